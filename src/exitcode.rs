//! Process exit codes
//!
//! The bootstrap command surface only distinguishes success from failure;
//! `SOFTWARE` follows BSD sysexits.h for internal faults.

/// Successful termination (also used for operator cancellation)
pub const OK: i32 = 0;

/// Any reported failure: usage, validation, install
pub const FAILURE: i32 = 1;

/// Internal software error (downstream initializer missing after install)
pub const SOFTWARE: i32 = 70;
