//! Rarity scoring and result ordering.

use ct_common::ScoredGroup;
use ct_math::{is_rare, log_proportion};

use crate::aggregate::Aggregation;
use crate::tally::TallyMap;

/// Score every group against the total record count and keep the ones
/// below the rarity threshold, ordered most anomalous first.
///
/// A zero total (empty or all-failing input) yields an empty result set.
/// In row mode each originating row of an anomalous group becomes its
/// own entry, sharing the group's count and score. Ties on equal scores
/// keep merge order.
pub fn score_groups(aggregation: &Aggregation, threshold: f64) -> Vec<ScoredGroup> {
    let mut results = Vec::new();
    let total = aggregation.total_records;
    if total == 0 {
        return results;
    }

    match &aggregation.groups {
        TallyMap::Counts(counts) => {
            for (key, &count) in counts {
                let Some(score) = log_proportion(count, total) else {
                    continue;
                };
                if is_rare(score, threshold) {
                    results.push(ScoredGroup {
                        count,
                        score,
                        key: key.clone(),
                        fields: Vec::new(),
                    });
                }
            }
        }
        TallyMap::Rows(buckets) => {
            for (key, rows) in buckets {
                let count = rows.len() as u64;
                let Some(score) = log_proportion(count, total) else {
                    continue;
                };
                if !is_rare(score, threshold) {
                    continue;
                }
                for row in rows {
                    results.push(ScoredGroup {
                        count,
                        score,
                        key: key.clone(),
                        fields: row.clone(),
                    });
                }
            }
        }
    }

    results.sort_by(|a, b| a.score.total_cmp(&b.score));
    results
}
