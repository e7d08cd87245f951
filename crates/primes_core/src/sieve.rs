//! Sieve of Eratosthenes over a packed bit array
//!
//! One bit per number keeps the sieve at roughly 12.5 MB for a limit of 10^8.

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::range::RangeRequest;

const WORD_BITS: u64 = u64::BITS as u64;

/// Primality flags for every number in `0..=limit`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sieve {
    limit: u64,
    words: Vec<u64>,
}

impl Sieve {
    /// Sieve all numbers up to and including `limit`
    pub fn up_to(limit: u64) -> Self {
        let len = usize::try_from(limit / WORD_BITS + 1).unwrap_or(usize::MAX);
        let mut sieve = Self {
            limit,
            words: vec![u64::MAX; len],
        };

        // Bits past the limit in the last word are never primes
        let tail = (limit % WORD_BITS) + 1;
        if tail < WORD_BITS {
            if let Some(last) = sieve.words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }

        sieve.clear(0);
        sieve.clear(1);

        for i in 2..=limit.isqrt() {
            if sieve.is_prime(i) {
                // Multiples below i² were already crossed off by smaller primes
                let mut j = i * i;
                while j <= limit {
                    sieve.clear(j);
                    j += i;
                }
            }
        }

        sieve
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Membership test, `false` for anything beyond the limit
    pub fn is_prime(&self, n: u64) -> bool {
        if n > self.limit {
            return false;
        }
        let (word, bit) = Self::position(n);
        self.words[word] & (1u64 << bit) != 0
    }

    /// Primes in ascending order
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.words
            .iter()
            .enumerate()
            .flat_map(|(index, &word)| SetBits {
                base: index as u64 * WORD_BITS,
                word,
            })
    }

    fn clear(&mut self, n: u64) {
        let (word, bit) = Self::position(n);
        self.words[word] &= !(1u64 << bit);
    }

    fn position(n: u64) -> (usize, u64) {
        ((n / WORD_BITS) as usize, n % WORD_BITS)
    }
}

/// Iterates the set bits of one word, lowest first
struct SetBits {
    base: u64,
    word: u64,
}

impl Iterator for SetBits {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.word == 0 {
            return None;
        }
        let bit = u64::from(self.word.trailing_zeros());
        self.word &= self.word - 1;
        Some(self.base + bit)
    }
}

/// A prime together with its position among all primes counted from 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimeDescriptor {
    pub value: u64,
    /// 1-based: 2 is the 1st prime, 3 the 2nd, ...
    pub rank: usize,
}

impl PrimeDescriptor {
    /// The rank with its English suffix, e.g. `3rd`
    pub fn ordinal(&self) -> String {
        format!("{}{}", self.rank, ordinal_suffix(self.rank))
    }
}

/// English ordinal suffix for `n`: st, nd, rd or th
pub fn ordinal_suffix(n: usize) -> &'static str {
    let tens = n % 100;
    let key = if tens < 20 { tens } else { n % 10 };
    match key {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// All primes up to the end of a request plus the slice inside it.
///
/// The range primes are a suffix of the full list, never recomputed, so
/// ranks come straight from positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SieveResult {
    sieve: Sieve,
    all: Vec<u64>,
    range_start: usize,
}

impl SieveResult {
    /// Sieve up to `request.last()` and locate the first prime `≥ request.first()`
    pub fn compute(request: &RangeRequest) -> Self {
        let sieve = Sieve::up_to(request.last());
        let all: Vec<u64> = sieve.primes().collect();
        let range_start = all.partition_point(|&p| p < request.first());

        tracing::debug!(
            "Sieved {} primes up to {}, {} in range",
            all.len(),
            request.last(),
            all.len() - range_start
        );

        Self {
            sieve,
            all,
            range_start,
        }
    }

    /// Every prime `≤ last`
    pub fn all(&self) -> &[u64] {
        &self.all
    }

    /// Primes inside the requested range
    pub fn range(&self) -> &[u64] {
        &self.all[self.range_start..]
    }

    pub fn sieve_size(&self) -> usize {
        self.all.len()
    }

    pub fn range_count(&self) -> usize {
        self.all.len() - self.range_start
    }

    /// Primality of any number up to the sieve's limit
    pub fn is_prime(&self, n: u64) -> bool {
        self.sieve.is_prime(n)
    }

    /// Whether `n` is one of the range primes
    pub fn in_range(&self, n: u64) -> bool {
        self.range().first().is_some_and(|&first| n >= first) && self.sieve.is_prime(n)
    }

    /// Lowest prime of the range
    pub fn lowest(&self) -> Option<PrimeDescriptor> {
        self.describe(self.range_start)
    }

    /// Highest prime of the range, which is also the highest sieved prime
    pub fn highest(&self) -> Option<PrimeDescriptor> {
        if self.range_count() == 0 {
            return None;
        }
        self.describe(self.all.len().checked_sub(1)?)
    }

    /// First sieved prime, always 2 when any prime was found
    pub fn first_overall(&self) -> Option<PrimeDescriptor> {
        self.describe(0)
    }

    pub fn last_overall(&self) -> Option<PrimeDescriptor> {
        self.describe(self.all.len().checked_sub(1)?)
    }

    fn describe(&self, index: usize) -> Option<PrimeDescriptor> {
        self.all.get(index).map(|&value| PrimeDescriptor {
            value,
            rank: index + 1,
        })
    }
}

impl Serialize for SieveResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SieveResult", 5)?;
        state.serialize_field("sieve_size", &self.sieve_size())?;
        state.serialize_field("range_count", &self.range_count())?;
        state.serialize_field("lowest", &self.lowest())?;
        state.serialize_field("highest", &self.highest())?;
        state.serialize_field("primes", self.range())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trial_division(n: u64) -> bool {
        n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    fn request(first: i64, last: i64) -> RangeRequest {
        RangeRequest::new(first, last, 100_000_000).unwrap()
    }

    #[test]
    fn test_small_sieves() {
        assert_eq!(Sieve::up_to(0).primes().count(), 0);
        assert_eq!(Sieve::up_to(1).primes().count(), 0);
        assert_eq!(Sieve::up_to(2).primes().collect::<Vec<_>>(), vec![2]);
        assert_eq!(
            Sieve::up_to(30).primes().collect::<Vec<_>>(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_agrees_with_trial_division() {
        let sieve = Sieve::up_to(1000);
        for n in 0..=1000 {
            assert_eq!(sieve.is_prime(n), trial_division(n), "disagreement at {}", n);
        }
        assert!(!sieve.is_prime(1009));
    }

    #[test]
    fn test_word_boundaries() {
        // Limits on both sides of a 64-bit word edge
        for limit in [63, 64, 65, 127, 128, 129] {
            let primes: Vec<u64> = Sieve::up_to(limit).primes().collect();
            let expected: Vec<u64> = (0..=limit).filter(|&n| trial_division(n)).collect();
            assert_eq!(primes, expected, "limit {}", limit);
        }
    }

    #[test]
    fn test_prime_count_below_one_million() {
        assert_eq!(Sieve::up_to(1_000_000).primes().count(), 78_498);
    }

    #[test]
    fn test_range_is_suffix_of_all() {
        let result = SieveResult::compute(&request(5, 25));
        assert_eq!(result.all(), &[2, 3, 5, 7, 11, 13, 17, 19, 23]);
        assert_eq!(result.range(), &[5, 7, 11, 13, 17, 19, 23]);
        assert_eq!(result.sieve_size(), 9);
        assert_eq!(result.range_count(), 7);
    }

    #[test]
    fn test_ranks() {
        let result = SieveResult::compute(&request(5, 25));
        assert_eq!(
            result.lowest(),
            Some(PrimeDescriptor { value: 5, rank: 3 })
        );
        assert_eq!(
            result.highest(),
            Some(PrimeDescriptor { value: 23, rank: 9 })
        );
        assert_eq!(
            result.first_overall(),
            Some(PrimeDescriptor { value: 2, rank: 1 })
        );
        assert_eq!(
            result.last_overall(),
            Some(PrimeDescriptor { value: 23, rank: 9 })
        );
    }

    #[test]
    fn test_empty_range_keeps_full_sieve() {
        let result = SieveResult::compute(&request(24, 28));
        assert!(result.range().is_empty());
        assert_eq!(result.sieve_size(), 9);
        assert_eq!(result.lowest(), None);
        assert_eq!(result.highest(), None);
        assert_eq!(
            result.last_overall(),
            Some(PrimeDescriptor { value: 23, rank: 9 })
        );
        assert!(!result.in_range(23));
    }

    #[test]
    fn test_in_range_membership() {
        let result = SieveResult::compute(&request(10, 30));
        assert!(result.in_range(11));
        assert!(result.in_range(29));
        assert!(!result.in_range(7));
        assert!(!result.in_range(15));
        assert!(!result.in_range(31));
        assert!(result.is_prime(7));
    }

    #[test]
    fn test_ordinal_suffixes() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (21, "21st"),
            (22, "22nd"),
            (101, "101st"),
            (111, "111th"),
            (112, "112th"),
        ];
        for (rank, expected) in cases {
            let descriptor = PrimeDescriptor { value: 2, rank };
            assert_eq!(descriptor.ordinal(), expected);
        }
    }
}
