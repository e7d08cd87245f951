//! Gaps between consecutive primes

use std::collections::BTreeMap;

use serde::{Serialize, Serializer, ser::SerializeStruct};

/// Two consecutive primes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrimePair {
    pub lower: u64,
    pub upper: u64,
}

impl PrimePair {
    pub fn gap(&self) -> u64 {
        self.upper - self.lower
    }
}

impl std::fmt::Display for PrimePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}, {}}}", self.lower, self.upper)
    }
}

/// One gap length and every pair of consecutive primes that has it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapSummary<'a> {
    pub length: u64,
    pub pairs: &'a [PrimePair],
}

impl<'a> GapSummary<'a> {
    /// Number of times the gap occurs
    pub fn count(&self) -> usize {
        self.pairs.len()
    }

    pub fn first(&self) -> Option<&'a PrimePair> {
        self.pairs.first()
    }

    pub fn last(&self) -> Option<&'a PrimePair> {
        self.pairs.last()
    }

    /// Occurrences strictly between the first and the last
    pub fn between(&self) -> usize {
        self.pairs.len().saturating_sub(2)
    }
}

/// Gap length → pairs with that gap, in ascending order of length.
///
/// Empty when fewer than two primes were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapCatalog {
    kinds: BTreeMap<u64, Vec<PrimePair>>,
}

impl GapCatalog {
    /// Catalog the gaps of an ascending, duplicate-free prime sequence
    pub fn from_primes(primes: &[u64]) -> Self {
        let mut kinds: BTreeMap<u64, Vec<PrimePair>> = BTreeMap::new();
        for window in primes.windows(2) {
            let pair = PrimePair {
                lower: window[0],
                upper: window[1],
            };
            kinds.entry(pair.gap()).or_default().push(pair);
        }
        Self { kinds }
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Distinct gap lengths, ascending
    pub fn lengths(&self) -> impl Iterator<Item = u64> + '_ {
        self.kinds.keys().copied()
    }

    pub fn distinct_count(&self) -> usize {
        self.kinds.len()
    }

    /// Total number of gaps, one fewer than the number of primes
    pub fn total(&self) -> usize {
        self.kinds.values().map(Vec::len).sum()
    }

    /// How often each gap length occurs
    pub fn frequencies(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.kinds.iter().map(|(&length, pairs)| (length, pairs.len()))
    }

    pub fn longest(&self) -> Option<GapSummary<'_>> {
        self.kinds
            .last_key_value()
            .map(|(&length, pairs)| GapSummary { length, pairs })
    }

    pub fn shortest(&self) -> Option<GapSummary<'_>> {
        self.kinds
            .first_key_value()
            .map(|(&length, pairs)| GapSummary { length, pairs })
    }

    /// The most frequent gap. Ties go to the shorter gap.
    pub fn most_common(&self) -> Option<GapSummary<'_>> {
        let mut best: Option<GapSummary<'_>> = None;
        for (&length, pairs) in &self.kinds {
            if best.is_none_or(|b| pairs.len() > b.count()) {
                best = Some(GapSummary { length, pairs });
            }
        }
        best
    }
}

impl Serialize for GapCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let frequencies: BTreeMap<u64, usize> = self.frequencies().collect();
        let mut state = serializer.serialize_struct("GapCatalog", 5)?;
        state.serialize_field("distinct_count", &self.distinct_count())?;
        state.serialize_field("frequencies", &frequencies)?;
        state.serialize_field("longest", &self.longest())?;
        state.serialize_field("shortest", &self.shortest())?;
        state.serialize_field("most_common", &self.most_common())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pair(lower: u64, upper: u64) -> PrimePair {
        PrimePair { lower, upper }
    }

    #[test]
    fn test_fewer_than_two_primes() {
        for primes in [&[][..], &[7][..]] {
            let catalog = GapCatalog::from_primes(primes);
            assert!(catalog.is_empty());
            assert_eq!(catalog.longest(), None);
            assert_eq!(catalog.shortest(), None);
            assert_eq!(catalog.most_common(), None);
            assert_eq!(catalog.distinct_count(), 0);
        }
    }

    #[test]
    fn test_primes_up_to_25() {
        let catalog = GapCatalog::from_primes(&[2, 3, 5, 7, 11, 13, 17, 19, 23]);

        let longest = catalog.longest().unwrap();
        assert_eq!(longest.length, 4);
        assert_eq!(longest.pairs, &[pair(7, 11), pair(13, 17), pair(19, 23)]);
        assert_eq!(longest.between(), 1);

        let shortest = catalog.shortest().unwrap();
        assert_eq!(shortest.length, 1);
        assert_eq!(shortest.pairs, &[pair(2, 3)]);

        let common = catalog.most_common().unwrap();
        assert_eq!(common.length, 2);
        assert_eq!(common.count(), 4);

        assert_eq!(catalog.lengths().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(catalog.total(), 8);
    }

    #[test]
    fn test_frequencies_sum_to_gap_count() {
        let primes = [101, 103, 107, 109, 113, 127, 131, 137, 139, 149];
        let catalog = GapCatalog::from_primes(&primes);
        let total: usize = catalog.frequencies().map(|(_, count)| count).sum();
        assert_eq!(total, primes.len() - 1);
        assert!(catalog.lengths().all(|gap| gap % 2 == 0));
        assert_eq!(catalog.longest().unwrap().pairs, &[pair(113, 127)]);
        let counts: BTreeMap<u64, usize> = catalog.frequencies().collect();
        assert_eq!(counts.get(&6), Some(&1));
        assert_eq!(counts.get(&8), None);
    }

    #[test]
    fn test_most_common_tie_goes_to_shorter_gap() {
        // 2 and 4 both occur three times, 4 first
        let catalog = GapCatalog::from_primes(&[7, 11, 13, 17, 19, 23, 29, 31]);
        let counts: BTreeMap<u64, usize> = catalog.frequencies().collect();
        assert_eq!(counts[&2], 3);
        assert_eq!(counts[&4], 3);
        assert_eq!(catalog.most_common().unwrap().length, 2);
    }

    #[test]
    fn test_single_gap() {
        let catalog = GapCatalog::from_primes(&[89, 97]);
        let longest = catalog.longest().unwrap();
        assert_eq!(longest, catalog.shortest().unwrap());
        assert_eq!(longest, catalog.most_common().unwrap());
        assert_eq!(longest.first(), longest.last());
        assert_eq!(longest.between(), 0);
    }

    #[test]
    fn test_pair_display() {
        assert_eq!(pair(7, 11).to_string(), "{7, 11}");
    }
}
