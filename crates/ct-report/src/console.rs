//! Plain console listing.

use std::io::{self, Write};

use crate::ReportError;

/// Write one tab-separated line per record to stdout.
pub fn render(records: &[Vec<String>]) -> Result<(), ReportError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_to(&mut handle, records)
}

pub(crate) fn write_to(writer: &mut impl Write, records: &[Vec<String>]) -> Result<(), ReportError> {
    for record in records {
        writeln!(writer, "{}", record.join("\t"))?;
    }
    Ok(())
}
