//! Human-readable rendering of an analysis

use std::fmt::Display;

use primes_core::{
    Analysis, DisplayConfig, FamilyMembership, GapSummary, Message, PrimeDescriptor,
    StatisticsSnapshot,
};

use crate::output::Output;

/// Print an analysis the way the `primes` command shows it
pub fn render(analysis: &Analysis, display: &DisplayConfig) {
    let output = Output::new();
    let range_count = analysis.primes.range_count();

    output.title(Message::Title.text(), &analysis.request.interval());
    let line = outcome_line(analysis);
    if range_count == 0 {
        output.error(&line);
    } else {
        output.success(&line);
    }

    if display.show_statistics {
        if range_count > 0 {
            output.primes(&preview(analysis.primes.range(), display.preview));
            render_primes(&output, analysis);
            render_gaps(&output, analysis);
            println!();
            render_families(&output, analysis);
        }
        render_sieve_bounds(&output, analysis);
        println!();
        render_statistics(&output, analysis);
    }

    if display.show_timings {
        render_timings(&output, analysis);
    }
}

/// `9 primes found among 25 natural numbers.`
pub fn outcome_line(analysis: &Analysis) -> String {
    let count = analysis.request.count();
    let noun = if count == 1 {
        "natural number"
    } else {
        "natural numbers"
    };
    format!("{} among {} {}.", analysis.outcome(), count, noun)
}

/// All primes when there are few, otherwise `keep` from each end around a
/// `...n more...` marker
pub fn preview(primes: &[u64], keep: usize) -> String {
    if primes.len() <= keep * 2 {
        return join(primes, " ");
    }
    let head = join(&primes[..keep], " ");
    let tail = join(&primes[primes.len() - keep..], " ");
    format!("{} ...{} more... {}", head, primes.len() - keep * 2, tail)
}

/// A short sample of a list: everything up to five items, else three from
/// each end
pub fn examples<T: Display>(items: &[T]) -> String {
    match items {
        [] => String::new(),
        [only] => format!("({})", only),
        [first, second] => format!("({} and {})", first, second),
        _ if items.len() < 6 => format!("({})", join(items, ", ")),
        _ => {
            let n = items.len();
            format!(
                "({}, ..., {})",
                join(&items[..3], ", "),
                join(&items[n - 3..], ", ")
            )
        }
    }
}

/// `1 time` or `n times`
pub fn occurrences(count: usize) -> String {
    if count == 1 {
        "1 time".to_string()
    } else {
        format!("{} times", count)
    }
}

/// The pairs of a gap summary: one, two, or first and last with a count between
pub fn gap_pairs(summary: &GapSummary<'_>) -> String {
    match (summary.first(), summary.last(), summary.count()) {
        (Some(first), _, 1) => first.to_string(),
        (Some(first), Some(last), 2) => format!("{} and {}", first, last),
        (Some(first), Some(last), _) => {
            format!("{} ...{} more... {}", first, summary.between(), last)
        }
        _ => String::new(),
    }
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

fn render_primes(output: &Output, analysis: &Analysis) {
    let describe = |descriptor: Option<PrimeDescriptor>, label: Message| {
        if let Some(prime) = descriptor {
            output.prime(label.text(), label.symbol(), prime.value, &prime.ordinal());
        }
    };

    if analysis.primes.range_count() == 1 {
        describe(analysis.primes.lowest(), Message::PrimeFound);
        return;
    }
    describe(analysis.primes.lowest(), Message::LowestPrime);
    describe(analysis.primes.highest(), Message::HighestPrime);
}

/// First and last prime of the whole sieve, when the range doesn't start at
/// the first one
pub fn sieve_bounds(analysis: &Analysis) -> Option<(PrimeDescriptor, PrimeDescriptor)> {
    let first = analysis.primes.first_overall()?;
    let last = analysis.primes.last_overall()?;
    (analysis.primes.lowest() != Some(first)).then_some((first, last))
}

fn render_sieve_bounds(output: &Output, analysis: &Analysis) {
    if let Some((first, last)) = sieve_bounds(analysis) {
        for (label, prime) in [(Message::FirstPrime, first), (Message::LastPrime, last)] {
            output.prime(label.text(), label.symbol(), prime.value, &prime.ordinal());
        }
    }
}

fn render_gaps(output: &Output, analysis: &Analysis) {
    let gaps = &analysis.gaps;
    match analysis.primes.range_count() {
        0 | 1 => {}
        2 => {
            if let Some(gap) = gaps.longest() {
                output.quantity(
                    Message::Gap.text(),
                    Message::Gap.symbol(),
                    &gap.length.to_string(),
                );
            }
        }
        _ => {
            let summaries = [
                (Message::LongestGap, gaps.longest()),
                (Message::ShortestGap, gaps.shortest()),
                (Message::MostCommonGap, gaps.most_common()),
            ];
            for (label, summary) in summaries {
                if let Some(summary) = summary {
                    output.quantity(
                        label.text(),
                        label.symbol(),
                        &format!(
                            "{} ({}) {}",
                            summary.length,
                            occurrences(summary.count()),
                            gap_pairs(&summary)
                        ),
                    );
                }
            }
            let lengths: Vec<u64> = gaps.lengths().collect();
            output.count(
                Message::GapLengths.text(),
                None,
                gaps.distinct_count(),
                &examples(&lengths),
            );
        }
    }
}

fn render_families(output: &Output, analysis: &Analysis) {
    for membership in analysis.families.iter().filter(|m| !m.is_empty()) {
        render_family(output, membership);
    }
}

fn render_family(output: &Output, membership: &FamilyMembership) {
    output.count(
        membership.family.label().text(),
        Some(membership.family.formula()),
        membership.count(),
        &examples(&membership.primes),
    );
}

fn render_statistics(output: &Output, analysis: &Analysis) {
    let basics = &analysis.basics;
    let percentage = Message::PercentageOfPrimes;
    output.quantity(
        percentage.text(),
        percentage.symbol(),
        &basics.percentage.to_string(),
    );

    for (label, value) in statistic_rows(analysis.statistics.as_ref()) {
        output.quantity(label.text(), label.symbol(), &value);
    }
}

const STATISTICS: [Message; 10] = [
    Message::SumOfPrimes,
    Message::ArithmeticMean,
    Message::Median,
    Message::PopulationStdDev,
    Message::PopulationVariance,
    Message::SampleStdDev,
    Message::SampleVariance,
    Message::LowerQuartile,
    Message::UpperQuartile,
    Message::InterquartileRange,
];

/// Label and formatted value of every statistic, in display order.
///
/// Without a snapshot (fewer than two primes) every value is "Not applicable".
pub fn statistic_rows(stats: Option<&StatisticsSnapshot>) -> Vec<(Message, String)> {
    let Some(stats) = stats else {
        return STATISTICS
            .iter()
            .map(|&label| (label, Message::NotApplicable.to_string()))
            .collect();
    };
    vec![
        (Message::SumOfPrimes, stats.sum.to_string()),
        (Message::ArithmeticMean, stats.mean.to_string()),
        (Message::Median, stats.median.to_string()),
        (Message::PopulationStdDev, stats.population_stdev.to_string()),
        (
            Message::PopulationVariance,
            stats.population_variance.to_string(),
        ),
        (Message::SampleStdDev, stats.sample_stdev.to_string()),
        (Message::SampleVariance, stats.sample_variance.to_string()),
        (Message::LowerQuartile, stats.quartiles.lower.to_string()),
        (Message::UpperQuartile, stats.quartiles.upper.to_string()),
        (
            Message::InterquartileRange,
            stats.quartiles.interquartile_range.to_string(),
        ),
    ]
}

fn render_timings(output: &Output, analysis: &Analysis) {
    println!();
    for timing in &analysis.timings.phases {
        output.timing(timing.phase.label().text(), timing.millis());
    }
    output.timing_total(Message::TimeTotal.text(), analysis.timings.total_millis());
}
