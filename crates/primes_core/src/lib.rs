//! Primes Core - prime analysis over a bounded range
//!
//! Given `{first..last}`, this crate sieves every prime up to `last`, then
//! reports the primes inside the range together with their gaps, descriptive
//! statistics and membership in special prime families.
//!
//! ```
//! let analysis = primes_core::analyze("1", "25").unwrap();
//! assert_eq!(analysis.primes.range(), &[2, 3, 5, 7, 11, 13, 17, 19, 23]);
//! assert_eq!(analysis.gaps.longest().unwrap().length, 4);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod families;
pub mod gaps;
pub mod messages;
pub mod range;
pub mod sieve;
pub mod stats;
pub mod timing;

pub use analysis::{Analysis, Outcome, PrimeAnalyzer, analyze};
pub use config::{DisplayConfig, EngineConfig, PrimesConfig};
pub use error::{PrimesError, Result, Violation};
pub use families::{Families, Family, FamilyMembership};
pub use gaps::{GapCatalog, GapSummary, PrimePair};
pub use messages::Message;
pub use range::RangeRequest;
pub use sieve::{PrimeDescriptor, Sieve, SieveResult};
pub use stats::{Basics, Quartiles, StatisticsSnapshot};
pub use timing::{Phase, PhaseTiming, Timings};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Analysis, Family, GapCatalog, Message, Outcome, PrimeAnalyzer, PrimesConfig, PrimesError,
        RangeRequest, Result, SieveResult, StatisticsSnapshot,
    };
}
