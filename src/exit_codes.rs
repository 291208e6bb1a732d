//! Exit code constants for the windcfg CLI.
//!
//! - 0: Success
//! - 1: User error (unreadable, malformed or unknown-keyed document, bad args)
//! - 2: Validation failure (value outside a fixed vocabulary)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: IO failure, malformed document, unknown option.
pub const USER_ERROR: i32 = 1;

/// Validation failure: one or more enumerated values are invalid.
pub const VALIDATION_FAILURE: i32 = 2;
