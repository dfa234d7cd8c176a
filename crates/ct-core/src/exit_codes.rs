//! Exit codes for the ct CLI.
//!
//! Exit codes communicate run outcome without requiring output parsing.

use ct_common::Error;

/// Exit codes for ct operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Run completed, with or without anomalies
    Clean = 0,

    /// Configuration error (bad selector, bad threshold)
    ConfigError = 10,

    /// Discovery error (bad directory, no input files)
    ScanError = 11,

    /// Output rendering error
    RenderError = 13,

    /// Internal/unknown error
    InternalError = 99,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates an error.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Map a fatal error to its exit code.
pub fn exit_code_for(error: &Error) -> ExitCode {
    match error {
        Error::InvalidSelector(_) | Error::InvalidThreshold(_) => ExitCode::ConfigError,
        Error::InputDirectoryNotFound { .. } | Error::NoInputFilesFound { .. } => {
            ExitCode::ScanError
        }
        Error::Render(_) => ExitCode::RenderError,
        Error::FileUnreadable { .. }
        | Error::FileUnparsable { .. }
        | Error::ColumnNotFound { .. }
        | Error::Io(_) => ExitCode::InternalError,
    }
}
