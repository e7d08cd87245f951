//! Display labels for everything an analysis reports
//!
//! Each label is a variant rather than a string key so that a renderer can't
//! ask for a label that doesn't exist.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    Title,
    NoPrimesFound,
    OnePrimeFound,
    PrimesFound,
    PrimeFound,

    FirstPrime,
    LastPrime,
    LowestPrime,
    HighestPrime,

    LongestGap,
    ShortestGap,
    MostCommonGap,
    GapLengths,
    Gap,

    PercentageOfPrimes,
    SumOfPrimes,
    ArithmeticMean,
    Median,
    PopulationStdDev,
    PopulationVariance,
    SampleStdDev,
    SampleVariance,
    LowerQuartile,
    UpperQuartile,
    InterquartileRange,

    MersennePrimes,
    FermatPrimes,
    ThabitPrimes,
    WagstaffPrimes,
    CarolPrimes,

    TimeSieve,
    TimeGaps,
    TimeBasics,
    TimeStats,
    TimeFamilies,
    TimeTotal,

    NotApplicable,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Self::Title => "Primes, their statistics and other related numbers in range",
            Self::NoPrimesFound => "No primes found",
            Self::OnePrimeFound => "1 prime found",
            Self::PrimesFound => "primes found",
            Self::PrimeFound => "Prime number found",
            Self::FirstPrime => "First prime",
            Self::LastPrime => "Last prime",
            Self::LowestPrime => "Lowest prime",
            Self::HighestPrime => "Highest prime",
            Self::LongestGap => "Longest gap",
            Self::ShortestGap => "Shortest gap",
            Self::MostCommonGap => "Most common gap",
            Self::GapLengths => "Different gap lengths",
            Self::Gap => "Gap",
            Self::PercentageOfPrimes => "Percentage of primes",
            Self::SumOfPrimes => "Sum of primes",
            Self::ArithmeticMean => "Arithmetic mean",
            Self::Median => "Median (middle value)",
            Self::PopulationStdDev => "Pop. standard deviation",
            Self::PopulationVariance => "Pop. variance",
            Self::SampleStdDev => "Sample standard deviation",
            Self::SampleVariance => "Sample variance",
            Self::LowerQuartile => "Lower Quartile",
            Self::UpperQuartile => "Upper Quartile",
            Self::InterquartileRange => "Interquartile Range",
            Self::MersennePrimes => "Mersenne primes",
            Self::FermatPrimes => "Fermat primes",
            Self::ThabitPrimes => "Thabit primes",
            Self::WagstaffPrimes => "Wagstaff primes",
            Self::CarolPrimes => "Carol primes",
            Self::TimeSieve => "Sieve",
            Self::TimeGaps => "Gaps",
            Self::TimeBasics => "Basics",
            Self::TimeStats => "Stats",
            Self::TimeFamilies => "Curiosities",
            Self::TimeTotal => "Total",
            Self::NotApplicable => "Not applicable",
        }
    }

    /// Mathematical notation shown next to the label, if any
    pub fn symbol(self) -> Option<&'static str> {
        let symbol = match self {
            Self::FirstPrime => "First",
            Self::LastPrime => "Last",
            Self::LowestPrime => "min(𝑥)",
            Self::HighestPrime => "max(𝑥)",
            Self::LongestGap => "∆ₘₐₓ",
            Self::ShortestGap => "∆ₘᵢₙ",
            Self::MostCommonGap => "∆ᶠ",
            Self::Gap => "∆",
            Self::PercentageOfPrimes => "%",
            Self::SumOfPrimes => "Σ𝑥",
            Self::ArithmeticMean => "μ",
            Self::Median => "𝑀𝑒",
            Self::PopulationStdDev => "σ𝑥",
            Self::PopulationVariance => "σ²𝑥",
            Self::SampleStdDev => "s𝑥",
            Self::SampleVariance => "s²𝑥",
            Self::LowerQuartile => "Q₁",
            Self::UpperQuartile => "Q₃",
            Self::InterquartileRange => "Qᵢ",
            _ => return None,
        };
        Some(symbol)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
