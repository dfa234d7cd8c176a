//! CSV Triage common types, errors, and output formats.
//!
//! This crate provides foundational types shared across ct-core modules:
//! - The unified error type with stable error codes
//! - Grouping and scored-result types
//! - Output format specifications

pub mod error;
pub mod group;
pub mod output;

pub use error::{Error, Result};
pub use group::{ScoredGroup, TallyKind};
pub use output::OutputFormat;
