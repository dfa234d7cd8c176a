//! Templated HTML report.

use std::fs;
use std::path::Path;

use askama::Template;
use chrono::Local;
use tracing::info;

use crate::ReportError;

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    rows: &'a [Vec<String>],
    generated_at: String,
}

/// Render records as an HTML table and write the document to `path`.
pub fn render(records: &[Vec<String>], path: &Path) -> Result<(), ReportError> {
    let template = ReportTemplate {
        rows: records,
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    };
    let html = template.render()?;
    fs::write(path, html)?;
    info!(file = %path.display(), records = records.len(), "HTML report written");
    Ok(())
}
