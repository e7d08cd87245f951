//! One complete analysis of a range: sieve, gaps, statistics and families

use std::fmt;

use serde::Serialize;

use crate::{
    Result,
    config::EngineConfig,
    families::Families,
    gaps::GapCatalog,
    messages::Message,
    range::RangeRequest,
    sieve::SieveResult,
    stats::{Basics, StatisticsSnapshot},
    timing::{Phase, Stopwatch, Timings},
};

/// How many primes a range holds, in words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoPrimesFound,
    OnePrimeFound,
    PrimesFound(usize),
}

impl Outcome {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NoPrimesFound,
            1 => Self::OnePrimeFound,
            n => Self::PrimesFound(n),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPrimesFound => write!(f, "{}", Message::NoPrimesFound),
            Self::OnePrimeFound => write!(f, "{}", Message::OnePrimeFound),
            Self::PrimesFound(n) => write!(f, "{} {}", n, Message::PrimesFound),
        }
    }
}

/// Result of analysing one validated range. Immutable once built.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub request: RangeRequest,
    pub primes: SieveResult,
    pub gaps: GapCatalog,
    pub basics: Basics,
    /// `None` when the range holds fewer than two primes
    pub statistics: Option<StatisticsSnapshot>,
    pub families: Families,
    pub timings: Timings,
}

impl Analysis {
    /// Run every phase over a validated request
    pub fn run(request: RangeRequest) -> Self {
        let mut stopwatch = Stopwatch::start();

        let primes = stopwatch.measure(Phase::Sieve, || SieveResult::compute(&request));
        let gaps = stopwatch.measure(Phase::Gaps, || GapCatalog::from_primes(primes.range()));
        let basics = stopwatch.measure(Phase::Basics, || {
            Basics::compute(primes.range(), request.count())
        });
        let statistics = stopwatch.measure(Phase::Stats, || {
            StatisticsSnapshot::compute(primes.range())
        });
        let families = stopwatch.measure(Phase::Families, || {
            Families::find(&primes, request.last())
        });

        let timings = stopwatch.finish();

        tracing::info!(
            "Analysed {}: {} in {:.4} ms",
            request.interval(),
            Outcome::from_count(primes.range_count()),
            timings.total_millis()
        );

        Self {
            request,
            primes,
            gaps,
            basics,
            statistics,
            families,
            timings,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_count(self.primes.range_count())
    }

    /// `Primes, their statistics and other related numbers in range {a..b}`
    pub fn title(&self) -> String {
        format!("{} {}", Message::Title, self.request.interval())
    }

    /// `{lowest..highest}` of the range primes, if there are any
    pub fn prime_interval(&self) -> Option<String> {
        let lowest = self.primes.lowest()?;
        let highest = self.primes.highest()?;
        Some(format!("{{{}..{}}}", lowest.value, highest.value))
    }

    /// Whether `n` is one of the range primes
    pub fn is_prime(&self, n: u64) -> bool {
        self.primes.in_range(n)
    }
}

/// Validates requests against the engine limits and runs analyses
#[derive(Debug, Clone, Default)]
pub struct PrimeAnalyzer {
    config: EngineConfig,
}

impl PrimeAnalyzer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn max_bound(&self) -> u64 {
        self.config.max_bound
    }

    /// Analyse `{first..last}` given as text, e.g. straight from the command line
    pub fn analyze(&self, first: &str, last: &str) -> Result<Analysis> {
        let request = RangeRequest::parse(first, last, self.config.max_bound)?;
        Ok(Analysis::run(request))
    }

    /// Analyse `{1..last}`
    pub fn analyze_up_to(&self, last: &str) -> Result<Analysis> {
        let request = RangeRequest::up_to(last, self.config.max_bound)?;
        Ok(Analysis::run(request))
    }

    /// Analyse numeric bounds
    pub fn analyze_bounds(&self, first: i64, last: i64) -> Result<Analysis> {
        let request = RangeRequest::new(first, last, self.config.max_bound)?;
        Ok(Analysis::run(request))
    }
}

/// Analyse `{first..last}` with the default engine limits
pub fn analyze(first: &str, last: &str) -> Result<Analysis> {
    PrimeAnalyzer::default().analyze(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PrimesError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_text() {
        assert_eq!(Outcome::from_count(0).to_string(), "No primes found");
        assert_eq!(Outcome::from_count(1).to_string(), "1 prime found");
        assert_eq!(Outcome::from_count(9).to_string(), "9 primes found");
    }

    #[test]
    fn test_titles_and_intervals() {
        let analysis = analyze("5", "25").unwrap();
        assert_eq!(
            analysis.title(),
            "Primes, their statistics and other related numbers in range {5..25}"
        );
        assert_eq!(analysis.prime_interval(), Some("{5..23}".to_string()));
        assert!(analysis.is_prime(23));
        assert!(!analysis.is_prime(3));
    }

    #[test]
    fn test_every_phase_is_timed() {
        let analysis = analyze("1", "1000").unwrap();
        let phases: Vec<Phase> = analysis.timings.phases.iter().map(|t| t.phase).collect();
        assert_eq!(
            phases,
            vec![
                Phase::Sieve,
                Phase::Gaps,
                Phase::Basics,
                Phase::Stats,
                Phase::Families
            ]
        );
    }

    #[test]
    fn test_analyzer_uses_configured_bound() {
        let analyzer = PrimeAnalyzer::new(EngineConfig { max_bound: 50 });
        assert!(analyzer.analyze_bounds(1, 49).is_ok());
        let err = analyzer.analyze_up_to("50").unwrap_err();
        assert!(matches!(err, PrimesError::RangeViolation { max_bound: 50, .. }));
    }

    #[test]
    fn test_single_prime_range() {
        let analysis = analyze("13", "16").unwrap();
        assert_eq!(analysis.outcome(), Outcome::OnePrimeFound);
        assert_eq!(analysis.statistics, None);
        assert!(analysis.gaps.is_empty());
        assert_eq!(analysis.basics.sum, Some(13));
        assert_eq!(analysis.basics.percentage, 25.0);
        assert_eq!(analysis.prime_interval(), Some("{13..13}".to_string()));
    }
}
