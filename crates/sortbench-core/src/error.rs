//! Error types for SortBench

use thiserror::Error;

/// Main error type for SortBench operations
#[derive(Debug, Error)]
pub enum SortBenchError {
    /// Experiment parameters or algorithm list are unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Operation requires state that does not exist yet (e.g. export before run)
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// Filesystem error while writing results
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart backend failed to render
    #[error("Render error: {0}")]
    Render(String),

    /// Result table could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SortBenchError {
    /// Shorthand for [`SortBenchError::InvalidConfiguration`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Shorthand for [`SortBenchError::PreconditionViolation`].
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }
}

/// Result type alias for SortBench operations
pub type Result<T> = std::result::Result<T, SortBenchError>;
