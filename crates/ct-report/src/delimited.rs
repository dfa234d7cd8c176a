//! Delimited-file sink.

use std::path::Path;

use tracing::info;

use crate::ReportError;

/// Write records as CSV rows to `path`, one row per record.
///
/// Records may have differing field counts (row mode carries the
/// original row widths), so the writer is flexible.
pub fn render(records: &[Vec<String>], path: &Path) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for record in records {
        writer.write_record(record)?;
    }
    writer.flush()?;
    info!(file = %path.display(), records = records.len(), "delimited report written");
    Ok(())
}
