//! Error types for CSV Triage.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for CSV Triage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for CSV Triage.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("invalid selector column: {0:?}")]
    InvalidSelector(String),

    #[error("invalid rarity threshold: {0}")]
    InvalidThreshold(f64),

    // Discovery errors (20-29)
    #[error("input directory not found: {path}")]
    InputDirectoryNotFound { path: PathBuf },

    #[error("no .{extension} files found under {path}")]
    NoInputFilesFound { path: PathBuf, extension: String },

    // Per-file errors (30-39), recovered by the aggregation coordinator
    #[error("failed to open {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    FileUnparsable { path: PathBuf, source: csv::Error },

    #[error("none of the columns {selectors:?} found in the header of {path}")]
    ColumnNotFound {
        path: PathBuf,
        selectors: Vec<String>,
    },

    // Rendering errors (40-49)
    #[error("failed to render results: {0}")]
    Render(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable error code for this error type.
    /// Used for process exit status and detailed error reporting.
    pub fn code(&self) -> u32 {
        match self {
            Error::InvalidSelector(_) => 10,
            Error::InvalidThreshold(_) => 11,
            Error::InputDirectoryNotFound { .. } => 20,
            Error::NoInputFilesFound { .. } => 21,
            Error::FileUnreadable { .. } => 30,
            Error::FileUnparsable { .. } => 31,
            Error::ColumnNotFound { .. } => 32,
            Error::Render(_) => 40,
            Error::Io(_) => 60,
        }
    }

    /// True for errors that are recovered per file and never abort a run.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::FileUnreadable { .. } | Error::FileUnparsable { .. } | Error::ColumnNotFound { .. }
        )
    }
}
