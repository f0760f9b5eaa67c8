//! Exit code constants for the gen-config CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Missing or unreadable input (template or CSV)
//! - 3: One or more rows failed while others were generated
//! - 4: Write failure (output directory or file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid configuration.
pub const USER_ERROR: i32 = 1;

/// Template or CSV file is missing, unreadable, or malformed.
pub const INPUT_FAILURE: i32 = 2;

/// Some rows were skipped because they could not be generated.
pub const PARTIAL_FAILURE: i32 = 3;

/// Output directory or file could not be written.
pub const WRITE_FAILURE: i32 = 4;
