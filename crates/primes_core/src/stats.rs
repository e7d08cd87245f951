//! Descriptive statistics over the primes of a range

use serde::Serialize;

/// Figures defined for any range, including an empty one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Basics {
    /// Share of the requested numbers that are prime, rounded to 4 decimals
    pub percentage: f64,
    /// `None` when the range holds no primes
    pub sum: Option<u64>,
}

impl Basics {
    pub fn compute(primes: &[u64], requested_count: u64) -> Self {
        let percentage = if requested_count == 0 {
            0.0
        } else {
            round_to(primes.len() as f64 / requested_count as f64 * 100.0, 4)
        };
        let sum = (!primes.is_empty()).then(|| primes.iter().sum());
        Self { percentage, sum }
    }
}

/// Lower and upper quartile with their spread.
///
/// Each quartile is the median of one half of the data, where a half is
/// `floor(n / 2)` values. For odd `n` the middle value belongs to neither half.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quartiles {
    pub lower: f64,
    pub upper: f64,
    pub interquartile_range: f64,
}

impl Quartiles {
    /// `None` for fewer than two values
    pub fn of_sorted(values: &[u64]) -> Option<Self> {
        let half = values.len() / 2;
        let lower = median(&values[..half])?;
        let upper = median(&values[values.len() - half..])?;
        Some(Self {
            lower,
            upper,
            interquartile_range: upper - lower,
        })
    }
}

/// Everything that needs at least two values
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    pub count: usize,
    pub sum: u64,
    pub mean: f64,
    pub median: f64,
    pub population_variance: f64,
    pub population_stdev: f64,
    pub sample_variance: f64,
    pub sample_stdev: f64,
    pub quartiles: Quartiles,
}

impl StatisticsSnapshot {
    /// Compute over ascending values. `None` when there are fewer than two.
    pub fn compute(values: &[u64]) -> Option<Self> {
        let count = values.len();
        if count < 2 {
            return None;
        }

        let sum: u64 = values.iter().sum();
        let n = count as f64;
        let mean = sum as f64 / n;
        let squares: f64 = values
            .iter()
            .map(|&x| {
                let d = x as f64 - mean;
                d * d
            })
            .sum();

        let population_variance = squares / n;
        let sample_variance = squares / (n - 1.0);

        Some(Self {
            count,
            sum,
            mean,
            median: median(values)?,
            population_variance,
            population_stdev: population_variance.sqrt(),
            sample_variance,
            sample_stdev: sample_variance.sqrt(),
            quartiles: Quartiles::of_sorted(values)?,
        })
    }
}

/// Middle value of ascending data, or the mean of the two middle values
pub fn median(sorted: &[u64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[]), None);
        assert_eq!(median(&[7]), Some(7.0));
        assert_eq!(median(&[3, 5]), Some(4.0));
        assert_eq!(median(&[2, 3, 5]), Some(3.0));
    }

    #[test]
    fn test_basics_empty_range() {
        let basics = Basics::compute(&[], 1);
        assert_eq!(basics.percentage, 0.0);
        assert_eq!(basics.sum, None);
    }

    #[test]
    fn test_basics_percentage_rounding() {
        // 9 primes among 25 numbers
        let basics = Basics::compute(&[2, 3, 5, 7, 11, 13, 17, 19, 23], 25);
        assert_eq!(basics.percentage, 36.0);
        assert_eq!(basics.sum, Some(100));

        // 4 primes among 7 numbers: 57.142857...
        let basics = Basics::compute(&[2, 3, 5, 7], 7);
        assert_eq!(basics.percentage, 57.1429);
    }

    #[test]
    fn test_needs_two_values() {
        assert_eq!(StatisticsSnapshot::compute(&[]), None);
        assert_eq!(StatisticsSnapshot::compute(&[13]), None);
        assert!(StatisticsSnapshot::compute(&[11, 13]).is_some());
    }

    #[test]
    fn test_primes_up_to_25() {
        let stats = StatisticsSnapshot::compute(&[2, 3, 5, 7, 11, 13, 17, 19, 23]).unwrap();
        assert_eq!(stats.sum, 100);
        assert!(close(stats.mean, 100.0 / 9.0));
        assert_eq!(stats.median, 11.0);
        // Halves are [2, 3, 5, 7] and [13, 17, 19, 23]; 11 is in neither
        assert_eq!(stats.quartiles.lower, 4.0);
        assert_eq!(stats.quartiles.upper, 18.0);
        assert_eq!(stats.quartiles.interquartile_range, 14.0);
        assert!(close(stats.population_variance, 4004.0 / 81.0));
        assert!(close(stats.sample_variance, 4004.0 / 72.0));
        assert!(close(stats.population_stdev, stats.population_variance.sqrt()));
        assert!(close(stats.sample_stdev, stats.sample_variance.sqrt()));
    }

    #[test]
    fn test_floor_half_quartiles_differ_from_inclusive_method() {
        // An inclusive-median method would give 3.0 and 7.0 here
        let quartiles = Quartiles::of_sorted(&[2, 3, 5, 7, 11]).unwrap();
        assert_eq!(quartiles.lower, 2.5);
        assert_eq!(quartiles.upper, 9.0);
    }

    #[test]
    fn test_two_values() {
        let stats = StatisticsSnapshot::compute(&[3, 5]).unwrap();
        assert_eq!(stats.median, 4.0);
        assert_eq!(stats.quartiles.lower, 3.0);
        assert_eq!(stats.quartiles.upper, 5.0);
        assert_eq!(stats.population_variance, 1.0);
        assert_eq!(stats.sample_variance, 2.0);
    }

    #[test]
    fn test_quartile_ordering_holds() {
        let primes: Vec<u64> = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];
        for end in 2..=primes.len() {
            let stats = StatisticsSnapshot::compute(&primes[..end]).unwrap();
            assert!(stats.quartiles.lower <= stats.median);
            assert!(stats.median <= stats.quartiles.upper);
        }
    }
}
