use miette::Diagnostic;
use thiserror::Error;

/// A single rule broken by a range request.
///
/// Validation never stops at the first problem: every violated rule is
/// collected so the caller can fix all of them in one pass.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Beginning of range must be an integer")]
    #[diagnostic(
        code(primes_core::beginning_not_integer),
        help("'{value}' is not a whole number")
    )]
    BeginningNotInteger { value: String },

    #[error("End of range must be an integer")]
    #[diagnostic(
        code(primes_core::end_not_integer),
        help("'{value}' is not a whole number")
    )]
    EndNotInteger { value: String },

    #[error("Beginning of range must be a positive natural number")]
    #[diagnostic(code(primes_core::beginning_not_positive), help("got {value}"))]
    BeginningNotPositive { value: i64 },

    #[error("End of range must be a positive natural number")]
    #[diagnostic(code(primes_core::end_not_positive), help("got {value}"))]
    EndNotPositive { value: i64 },

    #[error("End of range must be greater than or equal to its beginning")]
    #[diagnostic(
        code(primes_core::end_before_beginning),
        help("{last} comes before {first}; swap the bounds")
    )]
    EndBeforeBeginning { first: i64, last: i64 },

    #[error("End of range must be less than {max_bound}")]
    #[diagnostic(
        code(primes_core::end_too_large),
        help("the sieve keeps one bit per number up to the end of the range")
    )]
    EndTooLarge { last: i64, max_bound: u64 },
}

/// Failures while reading or writing configuration files
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

#[derive(Error, Diagnostic, Debug)]
pub enum PrimesError {
    #[error("Invalid input")]
    #[diagnostic(
        code(primes_core::invalid_input),
        help("Both bounds must be whole numbers, e.g. `primes 10 100`")
    )]
    InvalidInput {
        #[related]
        violations: Vec<Violation>,
    },

    #[error("Range violation")]
    #[diagnostic(
        code(primes_core::range_violation),
        help("The range must satisfy 1 ≤ first ≤ last < {max_bound}")
    )]
    RangeViolation {
        #[related]
        violations: Vec<Violation>,
        max_bound: u64,
    },

    #[error("Configuration error")]
    #[diagnostic(
        code(primes_core::configuration_error),
        help("Check configuration file at {config_path}: {field} should be {expected}")
    )]
    ConfigurationError {
        config_path: String,
        field: String,
        expected: String,
        #[source]
        cause: ConfigError,
    },
}

pub type Result<T> = std::result::Result<T, PrimesError>;

impl PrimesError {
    /// The individual rules that were broken, empty for non-validation errors
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidInput { violations } | Self::RangeViolation { violations, .. } => {
                violations
            }
            Self::ConfigurationError { .. } => &[],
        }
    }

    /// Human-readable messages, one per violated rule.
    ///
    /// Non-validation errors produce a single message with their cause.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::ConfigurationError { cause, .. } => vec![format!("{}: {}", self, cause)],
            _ => self.violations().iter().map(ToString::to_string).collect(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidInput { .. } | Self::RangeViolation { .. })
    }

    pub(crate) fn config(
        path: impl Into<String>,
        field: impl Into<String>,
        expected: impl Into<String>,
        cause: ConfigError,
    ) -> Self {
        Self::ConfigurationError {
            config_path: path.into(),
            field: field.into(),
            expected: expected.into(),
            cause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Report;

    #[test]
    fn test_range_violation_report() {
        let error = PrimesError::RangeViolation {
            violations: vec![
                Violation::BeginningNotPositive { value: -5 },
                Violation::EndNotPositive { value: -1 },
            ],
            max_bound: 100,
        };
        let report = Report::new(error);
        let output = format!("{:?}", report);
        assert!(output.contains("range_violation"));
    }

    #[test]
    fn test_messages_follow_violation_order() {
        let error = PrimesError::RangeViolation {
            violations: vec![
                Violation::EndBeforeBeginning { first: 9, last: 3 },
                Violation::EndTooLarge {
                    last: 3,
                    max_bound: 2,
                },
            ],
            max_bound: 2,
        };
        assert_eq!(
            error.messages(),
            vec![
                "End of range must be greater than or equal to its beginning".to_string(),
                "End of range must be less than 2".to_string(),
            ]
        );
        assert!(error.is_validation());
    }

    #[test]
    fn test_configuration_error_has_no_violations() {
        let error = PrimesError::config(
            "primes.toml",
            "engine.max_bound",
            "an integer greater than 1",
            ConfigError::InvalidValue("0".to_string()),
        );
        assert!(error.violations().is_empty());
        assert!(!error.is_validation());
        assert_eq!(error.messages().len(), 1);
        assert!(error.messages()[0].contains("Invalid value: 0"));
    }
}
