//! Per-file tallying of selector column values.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::warn;

use ct_common::{Error, Result, TallyKind};

/// Accumulated groups: value → occurrence count, or value → the full
/// originating rows.
#[derive(Debug, Clone, PartialEq)]
pub enum TallyMap {
    Counts(HashMap<String, u64>),
    Rows(HashMap<String, Vec<Vec<String>>>),
}

impl TallyMap {
    /// Empty tally of the given kind.
    pub fn new(kind: TallyKind) -> Self {
        match kind {
            TallyKind::Counts => TallyMap::Counts(HashMap::new()),
            TallyKind::Rows => TallyMap::Rows(HashMap::new()),
        }
    }

    /// Fold another tally of the same kind into this one.
    pub fn merge(&mut self, other: TallyMap) {
        match (self, other) {
            (TallyMap::Counts(into), TallyMap::Counts(from)) => {
                for (key, count) in from {
                    *into.entry(key).or_insert(0) += count;
                }
            }
            (TallyMap::Rows(into), TallyMap::Rows(from)) => {
                for (key, rows) in from {
                    into.entry(key).or_default().extend(rows);
                }
            }
            _ => debug_assert!(false, "mismatched tally kinds"),
        }
    }

    /// Number of distinct grouping keys.
    pub fn group_count(&self) -> usize {
        match self {
            TallyMap::Counts(map) => map.len(),
            TallyMap::Rows(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.group_count() == 0
    }

    /// Occurrences recorded for `key`, if present.
    pub fn count_of(&self, key: &str) -> Option<u64> {
        match self {
            TallyMap::Counts(map) => map.get(key).copied(),
            TallyMap::Rows(map) => map.get(key).map(|rows| rows.len() as u64),
        }
    }
}

/// One file's contribution: its groups and the number of rows attributed.
#[derive(Debug, Clone, PartialEq)]
pub struct FileTally {
    pub groups: TallyMap,
    pub attributed: u64,
}

/// Parse one file and tally its rows under the selector columns.
///
/// Per-column header misses are logged and that column skipped; the file
/// fails only when it cannot be opened, cannot be parsed, or none of the
/// selector columns appear in its header. Rows shorter than a referenced
/// column index are skipped for that column with a warning.
///
/// A row attributes once per selector column that reaches it, so a row
/// can land in several buckets when multiple columns are configured.
pub fn tally_file(path: &Path, selectors: &[String], kind: TallyKind) -> Result<FileTally> {
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
    let mut columns = Vec::with_capacity(selectors.len());
    for selector in selectors {
        match headers.iter().position(|header| header == selector) {
            Some(index) => columns.push(index),
            None => warn!(column = %selector, file = %path.display(), "column not found in header"),
        }
    }
    if columns.is_empty() {
        return Err(Error::ColumnNotFound {
            path: path.to_path_buf(),
            selectors: selectors.to_vec(),
        });
    }

    let mut groups = TallyMap::new(kind);
    let mut attributed = 0u64;
    for record in reader.records() {
        let record = record.map_err(|source| Error::FileUnparsable {
            path: path.to_path_buf(),
            source,
        })?;
        for &index in &columns {
            let Some(value) = record.get(index) else {
                warn!(file = %path.display(), index, "row shorter than column index, skipping");
                continue;
            };
            match &mut groups {
                TallyMap::Counts(map) => {
                    *map.entry(value.to_string()).or_insert(0) += 1;
                }
                TallyMap::Rows(map) => {
                    let row: Vec<String> = record.iter().map(str::to_string).collect();
                    map.entry(value.to_string()).or_default().push(row);
                }
            }
            attributed += 1;
        }
    }

    Ok(FileTally { groups, attributed })
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    #[test]
    fn counts_values_under_one_selector() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "id,user\n1,alice\n2,bob\n3,alice\n");

        let tally = tally_file(&path, &["user".to_string()], TallyKind::Counts).expect("tally");
        assert_eq!(tally.attributed, 3);
        assert_eq!(tally.groups.count_of("alice"), Some(2));
        assert_eq!(tally.groups.count_of("bob"), Some(1));
    }

    #[test]
    fn rows_mode_keeps_originating_records() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "id,user\n1,alice\n2,bob\n");

        let tally = tally_file(&path, &["user".to_string()], TallyKind::Rows).expect("tally");
        match &tally.groups {
            TallyMap::Rows(map) => {
                assert_eq!(map["alice"], vec![vec!["1".to_string(), "alice".to_string()]]);
            }
            TallyMap::Counts(_) => panic!("expected row tally"),
        }
    }

    #[test]
    fn row_fans_out_to_every_selector_column() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "user,host\nalice,web-1\n");
        let selectors = vec!["user".to_string(), "host".to_string()];

        let tally = tally_file(&path, &selectors, TallyKind::Rows).expect("tally");
        assert_eq!(tally.attributed, 2);
        assert_eq!(tally.groups.count_of("alice"), Some(1));
        assert_eq!(tally.groups.count_of("web-1"), Some(1));
    }

    #[test]
    fn missing_column_is_skipped_but_file_survives() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "id,user\n1,alice\n");
        let selectors = vec!["user".to_string(), "missing".to_string()];

        let tally = tally_file(&path, &selectors, TallyKind::Counts).expect("tally");
        assert_eq!(tally.attributed, 1);
        assert_eq!(tally.groups.count_of("alice"), Some(1));
    }

    #[test]
    fn all_columns_missing_fails_the_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "id,user\n1,alice\n");

        let err = tally_file(&path, &["nope".to_string()], TallyKind::Counts)
            .expect_err("no selector column");
        assert!(matches!(err, Error::ColumnNotFound { .. }));
    }

    #[test]
    fn short_rows_are_skipped_for_unreachable_columns() {
        let dir = TempDir::new().expect("tempdir");
        let path = write_file(&dir, "a.csv", "a,b,c\n1,2,3\n4\n5,6,7\n");

        let tally = tally_file(&path, &["c".to_string()], TallyKind::Counts).expect("tally");
        assert_eq!(tally.attributed, 2);
        assert_eq!(tally.groups.count_of("3"), Some(1));
        assert_eq!(tally.groups.count_of("7"), Some(1));
    }

    #[test]
    fn unreadable_file_fails() {
        let err = tally_file(
            Path::new("/definitely/not/here.csv"),
            &["user".to_string()],
            TallyKind::Counts,
        )
        .expect_err("missing file");
        assert!(matches!(err, Error::FileUnreadable { .. }));
    }

    #[test]
    fn merge_accumulates_counts() {
        let mut left = TallyMap::Counts(HashMap::from([("a".to_string(), 2u64)]));
        let right = TallyMap::Counts(HashMap::from([
            ("a".to_string(), 1u64),
            ("b".to_string(), 4u64),
        ]));
        left.merge(right);
        assert_eq!(left.count_of("a"), Some(3));
        assert_eq!(left.count_of("b"), Some(4));
    }
}
