//! Property-based tests for aggregation invariants.

use std::fs;

use proptest::collection::vec;
use proptest::prelude::*;
use tempfile::TempDir;

use ct_common::TallyKind;
use ct_core::{aggregate_files, score_groups};

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("alpha".to_string()),
        Just("beta".to_string()),
        Just("gamma".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The total record count equals the sum of rows across all files,
    /// independent of worker pool size, and the merged groups match.
    #[test]
    fn counts_are_conserved_across_pool_sizes(
        per_file in vec(vec(value_strategy(), 0..40), 1..6)
    ) {
        let dir = TempDir::new().expect("tempdir");
        let mut expected_rows = 0u64;
        let files: Vec<_> = per_file
            .iter()
            .enumerate()
            .map(|(i, rows)| {
                let path = dir.path().join(format!("input-{i}.csv"));
                let mut body = String::from("id,category\n");
                for (j, value) in rows.iter().enumerate() {
                    body.push_str(&format!("{j},{value}\n"));
                    expected_rows += 1;
                }
                fs::write(&path, body).expect("write fixture");
                path
            })
            .collect();

        let selectors = vec!["category".to_string()];
        let serial = aggregate_files(&files, &selectors, TallyKind::Counts, 1);
        let pooled = aggregate_files(&files, &selectors, TallyKind::Counts, 10);

        prop_assert_eq!(serial.total_records, expected_rows);
        prop_assert_eq!(pooled.total_records, expected_rows);
        prop_assert_eq!(&serial.groups, &pooled.groups);
    }

    /// A stricter threshold never flags a group the looser one missed.
    #[test]
    fn anomaly_sets_grow_with_the_threshold(
        rows in vec(value_strategy(), 1..120),
        t1 in -4.0f64..-0.1,
        delta in 0.0f64..2.0,
    ) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("input.csv");
        let mut body = String::from("id,category\n");
        for (i, value) in rows.iter().enumerate() {
            body.push_str(&format!("{i},{value}\n"));
        }
        fs::write(&path, body).expect("write fixture");

        let selectors = vec!["category".to_string()];
        let aggregation = aggregate_files(
            &[path],
            &selectors,
            TallyKind::Counts,
            1,
        );

        let strict: Vec<String> = score_groups(&aggregation, t1)
            .into_iter()
            .map(|group| group.key)
            .collect();
        let loose: Vec<String> = score_groups(&aggregation, t1 + delta)
            .into_iter()
            .map(|group| group.key)
            .collect();
        for key in &strict {
            prop_assert!(loose.contains(key));
        }
    }
}
