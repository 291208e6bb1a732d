//! Configuration document for windcfg.
//!
//! This module defines the `BuildConfiguration` record that represents
//! `windcfg.yaml`. Loading is strict by default (unknown keys fail) with a
//! lenient mode that logs and drops them; enumerated values are validated
//! before a record is handed out.

mod merge;
mod model;
mod operations;
pub mod schema;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{BuildConfiguration, ContentConfig, ThemeConfig, VariantSelection};
pub use types::{
    DEFAULT_DOCUMENT, DarkModeSetting, DarkModeStrategy, DocumentFormat, KNOWN_FUTURE_FLAGS,
    LoadMode, LoadOptions, TokenScale, VariantState,
};
