//! Error types for chunktree

use thiserror::Error;

/// Result type alias for chunktree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or comparing trees
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Incongruent trees: left has height {left}, right has height {right}")]
    IncongruentTrees { left: usize, right: usize },

    #[error("Hash algorithm mismatch: {left} vs {right}")]
    AlgorithmMismatch { left: String, right: String },

    #[error("Hash failure: {0}")]
    HashFailure(String),
}
