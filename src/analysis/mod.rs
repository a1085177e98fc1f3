//! Analysis modules.
//!
//! Merging of analyzer results, project-level rollups, and the parallel
//! per-file driver used by `scan`.

pub mod aggregator;
pub mod project;

pub use aggregator::*;
pub use project::{analyze_file, analyze_project};
