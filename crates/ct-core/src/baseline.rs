//! Per-file presence averaging.
//!
//! The serial companion to the concurrent scan: for one selector column,
//! count how many files contain each distinct value and average against
//! the number of files that parsed. Useful as a baseline of what
//! "normally present" looks like across a directory of snapshots.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::warn;

use ct_common::{Error, Result};

/// A value's share of files containing it.
#[derive(Debug, Clone, PartialEq)]
pub struct PresenceAverage {
    /// Files containing the value, divided by files parsed.
    pub average: f64,
    /// The observed column value.
    pub value: String,
}

impl PresenceAverage {
    /// Render as an output record: `[average, value]`.
    pub fn record(&self) -> Vec<String> {
        vec![format!("{:.2}", self.average), self.value.clone()]
    }
}

/// Average each distinct value's per-file presence, descending.
///
/// Files that fail to parse or lack the column are logged and skipped;
/// they do not count toward the denominator.
pub fn average_presence(files: &[PathBuf], selector: &str) -> Vec<PresenceAverage> {
    let mut presence: HashMap<String, u64> = HashMap::new();
    let mut parsed_files = 0u64;

    for path in files {
        match distinct_values(path, selector) {
            Ok(values) => {
                parsed_files += 1;
                for value in values {
                    *presence.entry(value).or_insert(0) += 1;
                }
            }
            Err(err) => warn!(file = %path.display(), error = %err, "skipping file"),
        }
    }

    if parsed_files == 0 {
        return Vec::new();
    }

    let mut averages: Vec<PresenceAverage> = presence
        .into_iter()
        .map(|(value, count)| PresenceAverage {
            average: count as f64 / parsed_files as f64,
            value,
        })
        .collect();
    averages.sort_by(|a, b| b.average.total_cmp(&a.average));
    averages
}

/// The set of distinct values observed under `selector` in one file.
fn distinct_values(path: &Path, selector: &str) -> Result<HashSet<String>> {
    let file = File::open(path).map_err(|source| Error::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = reader.headers().map_err(|source| Error::FileUnparsable {
        path: path.to_path_buf(),
        source,
    })?;
    let Some(index) = headers.iter().position(|header| header == selector) else {
        return Err(Error::ColumnNotFound {
            path: path.to_path_buf(),
            selectors: vec![selector.to_string()],
        });
    };

    let mut values = HashSet::new();
    for record in reader.records() {
        let record = record.map_err(|source| Error::FileUnparsable {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(value) = record.get(index) {
            values.insert(value.to_string());
        }
    }
    Ok(values)
}
