//! Exit code constants for the prp-runner CLI.
//!
//! - 0: Success (the runner itself exited with 0)
//! - 1: Local failure (manifest, task file, runner lookup, or spawn error)
//!
//! Any other code returned by the process is the runner's own exit code,
//! relayed unchanged.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Local failure: bad manifest, unknown runner, missing task file, or spawn error.
pub const FAILURE: i32 = 1;

/// Offset added to a signal number when the runner was killed by a signal.
#[cfg_attr(not(unix), allow(dead_code))]
pub const SIGNAL_BASE: i32 = 128;

/// Convert an exit code to the byte handed to the OS.
///
/// Codes outside `0..=255` cannot be represented and become [`FAILURE`].
pub fn to_process_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(FAILURE as u8)
}
