//! Standard exit codes for mediapack binaries
//!
//! Scripts drive the flavor tooling and branch on these codes, so they are
//! part of the command-line contract.

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Flavor string did not parse as `type/subtype`
pub const EXIT_MALFORMED_FLAVOR: i32 = 102;

/// Flavor parsed but is not in the well-known registry
pub const EXIT_UNKNOWN_FLAVOR: i32 = 103;

/// JSON serialization error
pub const EXIT_JSON_ERROR: i32 = 104;

/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 105;
