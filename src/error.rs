//! Error types for analyzer operations.

use thiserror::Error;

/// Errors returned by analyzers and the registry.
///
/// Every variant is local to the call that produced it; nothing here
/// leaves an analyzer or the registry in a changed state.
#[derive(Error, Debug)]
pub enum MasterError {
    /// Malformed or missing input to `validate` or `scaffold`
    #[error("Invalid parameters: {0}")]
    InvalidArgument(String),

    /// Registry lookup miss
    #[error("Unknown analyzer: {0}")]
    UnknownAnalyzer(String),

    /// Scaffold template not offered by the analyzer
    #[error("Unknown template '{template}' for {agent}")]
    UnknownTemplate { agent: String, template: String },

    /// Guidance topic not offered by the analyzer
    #[error("Unknown guidance topic '{topic}' for {agent}")]
    UnknownTopic { agent: String, topic: String },

    /// A rule pattern failed to compile
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result alias for analyzer operations
pub type Result<T> = std::result::Result<T, MasterError>;
