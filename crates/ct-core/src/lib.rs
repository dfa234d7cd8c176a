//! CSV Triage core engine.
//!
//! Pipeline: discover input files under a root directory, fan them out
//! across a bounded worker pool, merge the per-file tallies into one
//! global tally, score each group's rarity against the total record
//! count, and hand the ordered result set to a sink.

pub mod aggregate;
pub mod baseline;
pub mod exit_codes;
pub mod scan;
pub mod score;
pub mod tally;

pub use aggregate::{aggregate_files, Aggregation};
pub use scan::discover_files;
pub use score::score_groups;
pub use tally::{tally_file, FileTally, TallyMap};
