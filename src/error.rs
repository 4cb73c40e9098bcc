use thiserror::Error;

use fetchkit_interface::Error as ErrorImpl;

use crate::StatusCode;

/// The errors produced when sending a request or reading a response.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The request target is not a well-formed URL. No network call has been issued.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The request did not finish within the timeout set by
    /// [`crate::client::with_timeout`].
    #[error("Request is not finished within timeout")]
    Timeout,
    /// Connection, TLS or name resolution failure reported by the transport.
    #[error("Transport error: {0}")]
    Transport(#[from] std::io::Error),
    /// The server responded with a status code outside of 200-299, as reported by
    /// [`crate::Response::with_successful_status`].
    #[error("Server responded with a non-successful status code: {0}")]
    NonSuccessfulStatusCode(StatusCode),
}

/// A `Result` alias where the `Err` case is [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<ErrorImpl> for Error {
    fn from(e: ErrorImpl) -> Self {
        match e {
            ErrorImpl::InvalidRequest(target) => Self::InvalidRequest(target),
            ErrorImpl::Timeout => Self::Timeout,
            ErrorImpl::Transport(e) => Self::Transport(e),
        }
    }
}
