//! Exit codes returned by [`crate::run`].

/// Command completed.
pub const SUCCESS: i32 = 0;

/// Parse error, invalid input, failed verification or I/O failure.
pub const ERROR: i32 = 2;
