//! Stable exit codes for catalog CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid dataset or config, or any other error.
pub const INVALID: i32 = 1;
/// The requested course or pathway id does not exist.
pub const NOT_FOUND: i32 = 2;
