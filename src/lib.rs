//! Starticulation - consonant articulation assessment
//!
//! Scores a child's productions against developmental norms and flags
//! phonological processes (fronting, stopping, cluster reduction, ...).
//!
//! The engine is a fixed set of lookup tables plus an ordered rule scan:
//!
//! ```text
//! records ──▶ classifier (norms + process detector) ──▶ report ──▶ reporters
//! ```
//!
//! ```
//! use starticulation::assessment::AssessmentBuilder;
//! use starticulation::models::{Child, ChildAge, Position};
//! use starticulation::norms::Sound;
//! use starticulation::report::AssessmentReport;
//!
//! let r = Sound::parse("r").unwrap();
//! let records = AssessmentBuilder::with_defaults()
//!     .with_production(r, Position::Initial, "w")
//!     .unwrap()
//!     .build();
//! let child = Child::new(Some("Sam".into()), "5;0".parse::<ChildAge>().unwrap());
//! let report = AssessmentReport::build(child, &records);
//! assert_eq!(report.process_summary.typical_delayed.len(), 1);
//! ```

pub mod assessment;
pub mod classifier;
pub mod config;
pub mod error;
pub mod models;
pub mod norms;
pub mod processes;
pub mod report;
pub mod reporters;

pub use error::AssessmentError;
