//! Result sinks for CSV Triage.
//!
//! Renders an ordered sequence of result records as a plain console
//! listing, a templated HTML document, or a delimited file. Sinks treat
//! records as opaque rows; the core decides what the fields mean.

pub mod console;
pub mod delimited;
pub mod error;
pub mod html;

pub use error::ReportError;

use std::path::Path;

use ct_common::OutputFormat;

/// Render records through the sink selected by `format`.
///
/// The console sink streams to stdout and ignores `path`.
pub fn render_records(
    records: &[Vec<String>],
    format: OutputFormat,
    path: &Path,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Console => console::render(records),
        OutputFormat::Html => html::render(records, path),
        OutputFormat::Csv => delimited::render(records, path),
    }
}
