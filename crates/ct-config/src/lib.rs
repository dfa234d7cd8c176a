//! CSV Triage run configuration.
//!
//! This crate provides:
//! - Typed run configuration with defaults matching the CLI flags
//! - Validation of selector columns and the rarity threshold
//! - Worker pool sizing policy behind a replaceable interface

pub mod pool;
pub mod run;

pub use pool::{effective_pool_size, HalvedFileCount, PoolSizePolicy};
pub use run::RunConfig;

/// Default rarity threshold: groups below 0.1% of total records.
pub const DEFAULT_THRESHOLD: f64 = -3.0;

/// Default file extension for input discovery.
pub const DEFAULT_EXTENSION: &str = "csv";
