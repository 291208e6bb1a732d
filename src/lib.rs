//! windcfg: loader and validator for utility-CSS build configuration.
//!
//! A configuration document declares which source files a CSS build scans
//! for class names, which variant states it generates, which plugins it
//! loads and which theme tokens it extends. This crate loads that document
//! into an immutable [`config::BuildConfiguration`], validates it, and
//! provides the consumer-side pieces that depend on it: the content scan
//! ([`scan`]) and the variant plan ([`variants`]).
//!
//! ```
//! use windcfg::config::{BuildConfiguration, LoadOptions};
//!
//! let config = BuildConfiguration::from_yaml(
//!     "purge: ['src/*.fs']\ndarkMode: false\nplugins: ['@tailwindcss/typography']\n",
//!     LoadOptions::strict(),
//! )
//! .unwrap();
//! assert_eq!(config.content_globs(), &["src/*.fs"]);
//! ```

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod scan;
pub mod validate;
pub mod variants;
