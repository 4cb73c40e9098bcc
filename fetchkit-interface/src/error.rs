//! Error types for fetchkit transports.

use thiserror::Error;

/// Errors a transport can produce while executing a request.
#[derive(Debug, Error)]
pub enum Error {
    /// The request target is not a well-formed URL the transport can send to.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The call did not finish within the per-call timeout.
    #[error("Request is not finished within timeout")]
    Timeout,
    /// Connection, TLS or name resolution failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
}

/// Result type for transport operations.
pub type Result<T> = std::result::Result<T, Error>;
