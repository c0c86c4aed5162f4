//! Assessment setup
//!
//! Building the records for one child happens in two separate steps:
//! 1. defaulting - every sound in every valid position, produced correctly
//! 2. overriding - the clinician's transcriptions replace the defaults
//!
//! ```
//! use starticulation::assessment::{AssessmentBuilder, ProductionOverride};
//!
//! let overrides: Vec<ProductionOverride> = vec!["k:initial=t".parse().unwrap()];
//! let records = AssessmentBuilder::with_defaults()
//!     .apply_overrides(overrides)
//!     .unwrap()
//!     .build();
//! assert_eq!(records.iter().filter(|r| !r.is_correct()).count(), 1);
//! ```

mod builder;
mod productions;
mod session;

pub use builder::{default_records, AssessmentBuilder, ProductionOverride};
pub use productions::{ChildSection, ProductionsFile, ProductionsFormat};
pub use session::{Session, INSTRUCTIONS};
