//! Range requests and their validation

use std::num::IntErrorKind;

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    Result,
    config::MAX_BOUND_CEILING,
    error::{PrimesError, Violation},
};

/// A validated `{first..last}` request.
///
/// Only constructible through validation, so holding one means
/// `1 ≤ first ≤ last < max_bound` held for the bound it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeRequest {
    first: u64,
    last: u64,
}

impl RangeRequest {
    /// Parse both bounds from text, then validate them.
    ///
    /// Both bounds are parsed before failing so every non-integer bound is
    /// reported together.
    pub fn parse(first: &str, last: &str, max_bound: u64) -> Result<Self> {
        let parsed_first = parse_bound(first);
        let parsed_last = parse_bound(last);

        match (parsed_first, parsed_last) {
            (Some(first), Some(last)) => Self::new(first, last, max_bound),
            (first_ok, last_ok) => {
                let mut violations = Vec::new();
                if first_ok.is_none() {
                    violations.push(Violation::BeginningNotInteger {
                        value: first.to_string(),
                    });
                }
                if last_ok.is_none() {
                    violations.push(Violation::EndNotInteger {
                        value: last.to_string(),
                    });
                }
                tracing::debug!("Rejected non-integer bounds: {:?}", violations);
                Err(PrimesError::InvalidInput { violations })
            }
        }
    }

    /// Validate numeric bounds, accumulating every broken rule.
    ///
    /// A `max_bound` above [`MAX_BOUND_CEILING`] counts as the ceiling.
    pub fn new(first: i64, last: i64, max_bound: u64) -> Result<Self> {
        let max_bound = max_bound.min(MAX_BOUND_CEILING);
        let mut violations = Vec::new();

        if first < 1 {
            violations.push(Violation::BeginningNotPositive { value: first });
        }
        if last < 1 {
            violations.push(Violation::EndNotPositive { value: last });
        }
        if first > last {
            violations.push(Violation::EndBeforeBeginning { first, last });
        }
        if u64::try_from(last).is_ok_and(|last| last >= max_bound) {
            violations.push(Violation::EndTooLarge { last, max_bound });
        }

        if !violations.is_empty() {
            tracing::debug!("Rejected range {{{}..{}}}: {:?}", first, last, violations);
            return Err(PrimesError::RangeViolation {
                violations,
                max_bound,
            });
        }

        // Both bounds are positive here
        Ok(Self {
            first: first.unsigned_abs(),
            last: last.unsigned_abs(),
        })
    }

    /// The range `{1..last}`
    pub fn up_to(last: &str, max_bound: u64) -> Result<Self> {
        Self::parse("1", last, max_bound)
    }

    pub fn first(&self) -> u64 {
        self.first
    }

    pub fn last(&self) -> u64 {
        self.last
    }

    /// How many natural numbers the range covers
    pub fn count(&self) -> u64 {
        self.last - self.first + 1
    }

    /// `{first..last}`
    pub fn interval(&self) -> String {
        format!("{{{}..{}}}", self.first, self.last)
    }
}

impl Serialize for RangeRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RangeRequest", 3)?;
        state.serialize_field("first", &self.first)?;
        state.serialize_field("last", &self.last)?;
        state.serialize_field("count", &self.count())?;
        state.end()
    }
}

/// Parse one bound. Integers too large for 64 bits saturate so the range
/// rules report them instead of the integer check.
fn parse_bound(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}
