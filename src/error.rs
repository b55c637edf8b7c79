//! Error types for stage pipelines
//!
//! Exhaustion is never an error: a Stage signals it structurally by closing.
//! The variants here cover caller misuse of the single-value sinks and the
//! I/O failures raised by source and sink adapters.

/// Main error type for stagepipe operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    /// A single-value sink found the Stage closed without any value
    #[error("stage closed before producing a value")]
    EmptyStream,
    /// I/O failure raised by an adapter
    #[error("IO error: {0}")]
    Io(String),
    /// A source worker terminated abnormally (panicked or was aborted)
    #[error("stage worker failed: {0}")]
    Worker(String),
    /// Invalid stage configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StreamError {
    fn from(err: serde_json::Error) -> Self {
        StreamError::Config(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StreamError {
    fn from(err: tokio::task::JoinError) -> Self {
        StreamError::Worker(err.to_string())
    }
}

/// Result type for stagepipe operations
pub type StreamResult<T> = Result<T, StreamError>;
