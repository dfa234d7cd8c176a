//! Error types for report sinks.

use thiserror::Error;

/// Errors from rendering a result set.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write delimited output: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to render HTML template: {0}")]
    Template(#[from] askama::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
