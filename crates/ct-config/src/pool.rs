//! Worker pool sizing.
//!
//! The pool size is a policy decision, kept behind a trait so the
//! heuristic can be tuned without touching the aggregation logic.

/// Maps an input file count to a worker pool size.
pub trait PoolSizePolicy {
    /// Number of workers for `file_count` input files. Must be at least 1.
    fn pool_size(&self, file_count: usize) -> usize;
}

/// Default heuristic: half the file count, clamped to `[min_workers, max_workers]`.
///
/// Not adaptive to file size or system load.
#[derive(Debug, Clone, Copy)]
pub struct HalvedFileCount {
    pub min_workers: usize,
    pub max_workers: usize,
}

impl Default for HalvedFileCount {
    fn default() -> Self {
        Self {
            min_workers: 1,
            max_workers: 10,
        }
    }
}

impl PoolSizePolicy for HalvedFileCount {
    fn pool_size(&self, file_count: usize) -> usize {
        (file_count / 2).clamp(self.min_workers.max(1), self.max_workers.max(1))
    }
}

/// Resolve the pool size: an explicit nonzero override wins over the policy.
pub fn effective_pool_size(
    policy: &dyn PoolSizePolicy,
    file_count: usize,
    override_workers: Option<usize>,
) -> usize {
    match override_workers {
        Some(workers) if workers > 0 => workers,
        _ => policy.pool_size(file_count),
    }
}
