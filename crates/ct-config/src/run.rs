//! Run configuration and validation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use ct_common::{Error, OutputFormat, Result, TallyKind};

use crate::{DEFAULT_EXTENSION, DEFAULT_THRESHOLD};

/// Configuration for one triage run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Root directory to walk for input files.
    pub root: PathBuf,

    /// Header names whose values define the grouping keys.
    pub selectors: Vec<String>,

    /// Log-proportion threshold below which a group is an anomaly.
    pub threshold: f64,

    /// Rendering backend for the result set.
    pub output: OutputFormat,

    /// Output file path for file-writing backends.
    pub output_path: PathBuf,

    /// Worker pool size override; `None` defers to the sizing policy.
    pub workers: Option<usize>,

    /// Force row output even for a single selector column.
    pub row_output: bool,

    /// Input file extension, matched case-insensitively.
    pub extension: String,
}

impl RunConfig {
    /// Create a config with defaults matching the CLI flag defaults.
    pub fn new(root: impl Into<PathBuf>, selectors: Vec<String>) -> Self {
        Self {
            root: root.into(),
            selectors,
            threshold: DEFAULT_THRESHOLD,
            output: OutputFormat::Console,
            output_path: PathBuf::from("output.csv"),
            workers: None,
            row_output: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the rarity threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the output backend and file path.
    pub fn with_output(mut self, output: OutputFormat, path: impl Into<PathBuf>) -> Self {
        self.output = output;
        self.output_path = path.into();
        self
    }

    /// Override the worker pool size.
    pub fn with_workers(mut self, workers: Option<usize>) -> Self {
        self.workers = workers;
        self
    }

    /// Force one output row per originating record.
    pub fn with_row_output(mut self, row_output: bool) -> Self {
        self.row_output = row_output;
        self
    }

    /// Check selector columns and threshold before any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.selectors.is_empty() {
            return Err(Error::InvalidSelector(String::new()));
        }
        for selector in &self.selectors {
            if selector.trim().is_empty() {
                return Err(Error::InvalidSelector(selector.clone()));
            }
        }
        if self.threshold.is_nan() {
            return Err(Error::InvalidThreshold(self.threshold));
        }
        Ok(())
    }

    /// How values are tallied: full rows whenever more than one selector
    /// column is configured (or explicitly requested), counters otherwise.
    pub fn tally_kind(&self) -> TallyKind {
        if self.row_output || self.selectors.len() > 1 {
            TallyKind::Rows
        } else {
            TallyKind::Counts
        }
    }
}
