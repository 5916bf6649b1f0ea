//! Exit codes for the srcview CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//!
//! Ranges:
//! - 0: success
//! - 10-19: user/environment errors (recoverable by user action)

/// Exit codes for srcview operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Page generated successfully
    Ok = 0,

    /// Invalid arguments
    ArgsError = 10,

    /// Source or annotation input unreadable or undecodable
    InputError = 11,

    /// Output tree could not be written
    OutputError = 12,
}

impl ExitCode {
    /// Terminate the process with this code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}
