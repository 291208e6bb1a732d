//! Error types for windcfg.
//!
//! Uses thiserror for derive macros. Every variant carries enough context
//! (document path, field paths) for the author to fix the document by hand.

use crate::exit_codes;
use crate::validate::Violation;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for windcfg operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document (or a scanned source file) could not be read.
    #[error("failed to read '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },

    /// The document does not have the expected structure.
    #[error("malformed document '{}': {message}", .path.display())]
    MalformedDocument { path: PathBuf, message: String },

    /// Keys outside the recognized schema were found (strict mode only).
    #[error("unknown option(s): {}", .paths.join(", "))]
    UnknownOption { paths: Vec<String> },

    /// A content glob does not compile.
    #[error("invalid glob at {field_path}: {message}")]
    InvalidGlob { field_path: String, message: String },

    /// One or more values fall outside their field's fixed vocabulary.
    #[error("invalid value(s):\n{}", format_violations(.violations))]
    InvalidEnumValue { violations: Vec<Violation> },
}

impl ConfigError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::Io { .. } => exit_codes::USER_ERROR,
            ConfigError::MalformedDocument { .. } => exit_codes::USER_ERROR,
            ConfigError::UnknownOption { .. } => exit_codes::USER_ERROR,
            ConfigError::InvalidGlob { .. } => exit_codes::USER_ERROR,
            ConfigError::InvalidEnumValue { .. } => exit_codes::VALIDATION_FAILURE,
        }
    }

    /// Field paths the author has to look at, in reporting order.
    pub fn field_paths(&self) -> Vec<&str> {
        match self {
            ConfigError::UnknownOption { paths } => paths.iter().map(String::as_str).collect(),
            ConfigError::InvalidGlob { field_path, .. } => vec![field_path.as_str()],
            ConfigError::InvalidEnumValue { violations } => {
                violations.iter().map(|v| v.field_path.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("  x {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for windcfg operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
