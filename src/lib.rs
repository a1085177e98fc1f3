//! MasterCheck - per-technology code analyzers behind one contract.
//!
//! Each technology domain (JavaScript, React, Docker, AWS, ...) is an
//! [`analyzer::Analyzer`] with the same six operations: analyze, validate,
//! optimize, scaffold, guidance and the capability listing. The
//! [`registry::Registry`] maps ids to analyzers; [`scanner`],
//! [`analysis`] and [`report`] run them over a whole project.

pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod scanner;

pub use analyzer::{Analyzer, ScaffoldOptions, ValidationInput};
pub use config::{AnalyzerConfig, Config};
pub use error::{MasterError, Result};
pub use registry::Registry;
