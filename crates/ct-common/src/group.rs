//! Grouping and scored-result types.

use serde::{Deserialize, Serialize};

/// How observed values are tallied per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyKind {
    /// One occurrence counter per distinct value.
    Counts,
    /// The full originating rows per distinct value, so sinks can
    /// emit every matching record alongside its group statistics.
    Rows,
}

/// One scored group (or, in row mode, one originating row of a group).
///
/// `score` is the base-10 logarithm of the group's proportion of the
/// total record count; more negative means rarer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredGroup {
    /// Occurrences of this value across all input files.
    pub count: u64,
    /// log10(count / total).
    pub score: f64,
    /// The observed column value that defines the group.
    pub key: String,
    /// Original row fields; empty in count mode.
    pub fields: Vec<String>,
}

impl ScoredGroup {
    /// Render as an output record: `[count, score, key]` in count mode,
    /// `[count, score, fields...]` in row mode.
    pub fn record(&self) -> Vec<String> {
        let mut record = vec![self.count.to_string(), format!("{:.6}", self.score)];
        if self.fields.is_empty() {
            record.push(self.key.clone());
        } else {
            record.extend(self.fields.iter().cloned());
        }
        record
    }
}
