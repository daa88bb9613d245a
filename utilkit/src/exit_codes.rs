//! Stable exit codes for the utilkit CLI.

/// Greeting printed.
pub const OK: i32 = 0;
/// Any failure other than argument parsing.
pub const INVALID: i32 = 1;
