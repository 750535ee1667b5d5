//! Common error types for quoteit

use thiserror::Error;

/// Common result type for quoteit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the quoteit pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Transport-level failure calling an upstream (timeout, connection
    /// failure, non-2xx status)
    #[error("Network error: {0}")]
    Network(String),

    /// Upstream responded, but the payload carried no recognizable quote
    #[error("Quote unavailable: {0}")]
    QuoteUnavailable(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
