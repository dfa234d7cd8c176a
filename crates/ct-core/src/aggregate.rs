//! Concurrent aggregation of per-file tallies.
//!
//! A bounded pool of workers drains a pre-filled work queue of file
//! paths. Each worker tallies one file start-to-finish, adds the file's
//! attributed row count to a shared atomic total, and ships the partial
//! tally over a results channel. The global tally is populated by a
//! single-threaded merge after every worker has joined, so the map
//! itself never needs a lock.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crossbeam_channel::bounded;
use tracing::{debug, warn};

use ct_common::TallyKind;

use crate::tally::{self, TallyMap};

/// The merged result of one aggregation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    /// All groups observed across the input files.
    pub groups: TallyMap,
    /// Rows attributed to at least one selector column, summed per file.
    pub total_records: u64,
}

/// Tally `files` across a pool of `pool_size` workers and merge the
/// partial results.
///
/// A file that fails to parse is logged and contributes nothing; the
/// run always completes with whatever was aggregated. Results are
/// independent of the pool size.
pub fn aggregate_files(
    files: &[PathBuf],
    selectors: &[String],
    kind: TallyKind,
    pool_size: usize,
) -> Aggregation {
    let capacity = files.len().max(1);
    let (file_tx, file_rx) = bounded::<PathBuf>(capacity);
    let (tally_tx, tally_rx) = bounded::<TallyMap>(capacity);

    // The full file set is known upfront, so the queue is filled and
    // closed before the workers start; no backpressure is needed.
    for path in files {
        if file_tx.send(path.clone()).is_err() {
            break;
        }
    }
    drop(file_tx);

    let total_records = AtomicU64::new(0);
    let workers = pool_size.max(1);

    thread::scope(|scope| {
        for _ in 0..workers {
            let file_rx = file_rx.clone();
            let tally_tx = tally_tx.clone();
            let total_records = &total_records;
            scope.spawn(move || {
                for path in file_rx.iter() {
                    match tally::tally_file(&path, selectors, kind) {
                        Ok(tally) => {
                            total_records.fetch_add(tally.attributed, Ordering::Relaxed);
                            if tally_tx.send(tally.groups).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            warn!(file = %path.display(), error = %err, "skipping file");
                        }
                    }
                }
            });
        }
    });

    // Workers have all joined; close the results channel and merge the
    // partial tallies single-threaded.
    drop(tally_tx);
    let mut groups = TallyMap::new(kind);
    let mut merged = 0usize;
    for partial in tally_rx.iter() {
        groups.merge(partial);
        merged += 1;
    }
    debug!(
        files = files.len(),
        merged,
        groups = groups.group_count(),
        "aggregation complete"
    );

    Aggregation {
        groups,
        total_records: total_records.into_inner(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn failed_files_are_isolated() {
        let dir = TempDir::new().expect("tempdir");
        let good = dir.path().join("good.csv");
        fs::write(&good, "id,user\n1,alice\n2,bob\n").expect("write");
        let missing = dir.path().join("missing.csv");

        let files = vec![good, missing];
        let aggregation =
            aggregate_files(&files, &["user".to_string()], TallyKind::Counts, 2);
        assert_eq!(aggregation.total_records, 2);
        assert_eq!(aggregation.groups.group_count(), 2);
    }

    #[test]
    fn empty_file_set_produces_zero_total() {
        let aggregation = aggregate_files(&[], &["user".to_string()], TallyKind::Counts, 3);
        assert_eq!(aggregation.total_records, 0);
        assert!(aggregation.groups.is_empty());
    }
}
