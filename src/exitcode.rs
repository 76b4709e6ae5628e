//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any failure: invalid request, missing tool, or tool error
pub const FAILURE: i32 = 1;
