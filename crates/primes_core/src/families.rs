//! Special prime families: Mersenne, Fermat, Thabit, Wagstaff and Carol
//!
//! Candidates come from each family's closed form up to the end of the
//! request and are then intersected with the range primes.

use serde::Serialize;

use crate::{messages::Message, sieve::SieveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// 2ⁿ − 1
    Mersenne,
    /// 2^(2ⁿ) + 1
    Fermat,
    /// 3·2ⁿ − 1
    Thabit,
    /// (2ᵖ + 1) / 3 for prime p
    Wagstaff,
    /// (2ⁿ − 1)² − 2
    Carol,
}

/// One term of a generator sequence
enum Term {
    Value(u64),
    /// Not a natural number for this index
    Skip,
    /// Too large for 64 bits, and so past any limit
    Overflow,
}

impl Family {
    pub const ALL: [Family; 5] = [
        Family::Mersenne,
        Family::Thabit,
        Family::Fermat,
        Family::Wagstaff,
        Family::Carol,
    ];

    pub fn label(self) -> Message {
        match self {
            Self::Mersenne => Message::MersennePrimes,
            Self::Fermat => Message::FermatPrimes,
            Self::Thabit => Message::ThabitPrimes,
            Self::Wagstaff => Message::WagstaffPrimes,
            Self::Carol => Message::CarolPrimes,
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Self::Mersenne => "2ⁿ−1",
            Self::Fermat => "2^2ⁿ+1",
            Self::Thabit => "3⋅2ⁿ−1",
            Self::Wagstaff => "(2ᵖ+1)/3",
            Self::Carol => "(2ⁿ−1)²−2",
        }
    }

    /// Family values not exceeding `limit`, ascending.
    ///
    /// Wagstaff numbers are indexed by primes rather than by `n`, so they take
    /// their exponents from `exponents` (ascending primes).
    pub fn candidates(self, limit: u64, exponents: &[u64]) -> Vec<u64> {
        let mut values = Vec::new();

        if self == Self::Wagstaff {
            for &p in exponents {
                let Some(power) = u32::try_from(p).ok().and_then(|p| 1u64.checked_shl(p)) else {
                    break;
                };
                let numerator = power + 1;
                if numerator % 3 != 0 {
                    continue;
                }
                let w = numerator / 3;
                // Terms grow with p, so the first one past the limit ends the search
                if w > limit {
                    break;
                }
                values.push(w);
            }
            return values;
        }

        for n in 0u32.. {
            match self.term(n) {
                Term::Value(v) if v > limit => break,
                Term::Value(v) => values.push(v),
                Term::Skip => continue,
                Term::Overflow => break,
            }
        }
        values
    }

    fn term(self, n: u32) -> Term {
        let power = |e: u32| 1u64.checked_shl(e);
        let value = match self {
            Self::Mersenne => power(n).map(|p| p - 1),
            Self::Fermat => 1u32
                .checked_shl(n)
                .and_then(power)
                .and_then(|p| p.checked_add(1)),
            Self::Thabit => power(n).and_then(|p| p.checked_mul(3)).map(|t| t - 1),
            Self::Carol => {
                let Some(m) = power(n).map(|p| p - 1) else {
                    return Term::Overflow;
                };
                match m.checked_mul(m) {
                    Some(square) if square < 2 => return Term::Skip,
                    Some(square) => Some(square - 2),
                    None => None,
                }
            }
            Self::Wagstaff => return Term::Skip,
        };
        value.map_or(Term::Overflow, Term::Value)
    }
}

/// The range primes that belong to one family
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FamilyMembership {
    pub family: Family,
    pub primes: Vec<u64>,
}

impl FamilyMembership {
    pub fn count(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn first(&self) -> Option<u64> {
        self.primes.first().copied()
    }

    pub fn last(&self) -> Option<u64> {
        self.primes.last().copied()
    }
}

/// Membership of every family, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Families {
    pub mersenne: FamilyMembership,
    pub thabit: FamilyMembership,
    pub fermat: FamilyMembership,
    pub wagstaff: FamilyMembership,
    pub carol: FamilyMembership,
}

impl Families {
    /// Find family members among the range primes.
    ///
    /// `limit` is the end of the request, not the highest range prime.
    pub fn find(primes: &SieveResult, limit: u64) -> Self {
        let find = |family: Family| {
            let mut members: Vec<u64> = family
                .candidates(limit, primes.range())
                .into_iter()
                .filter(|&v| primes.in_range(v))
                .collect();
            members.sort_unstable();
            members.dedup();
            tracing::debug!("{}: {:?}", family.label(), members);
            FamilyMembership {
                family,
                primes: members,
            }
        };

        Self {
            mersenne: find(Family::Mersenne),
            thabit: find(Family::Thabit),
            fermat: find(Family::Fermat),
            wagstaff: find(Family::Wagstaff),
            carol: find(Family::Carol),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FamilyMembership> {
        [
            &self.mersenne,
            &self.thabit,
            &self.fermat,
            &self.wagstaff,
            &self.carol,
        ]
        .into_iter()
    }

    pub fn get(&self, family: Family) -> &FamilyMembership {
        match family {
            Family::Mersenne => &self.mersenne,
            Family::Thabit => &self.thabit,
            Family::Fermat => &self.fermat,
            Family::Wagstaff => &self.wagstaff,
            Family::Carol => &self.carol,
        }
    }
}
