//! Validation of loaded configuration records.
//!
//! - Vocabulary checks: `darkMode` and every variant state name must come
//!   from their fixed vocabularies (violations, fatal)
//! - Hygiene checks: empty content, duplicate plugins or states, unknown
//!   future flags (warnings, never fatal)

pub mod vocabulary;

pub use vocabulary::{ValidationResult, ValidationWarning, Violation, validate};
