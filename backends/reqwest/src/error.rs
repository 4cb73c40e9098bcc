use std::io;

use fetchkit_interface::Error as FetchkitError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReqwestBackendError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid header name: {0}")]
    InvalidHeaderName(String),
    #[error("invalid header value for {0}")]
    InvalidHeaderValue(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid HTTP method")]
    InvalidMethod,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ReqwestBackendError> for FetchkitError {
    fn from(err: ReqwestBackendError) -> Self {
        match err {
            ReqwestBackendError::Reqwest(e) if e.is_timeout() => FetchkitError::Timeout,
            ReqwestBackendError::Reqwest(e) if e.is_builder() => {
                FetchkitError::InvalidRequest(e.to_string())
            }
            ReqwestBackendError::Reqwest(e) => FetchkitError::Transport(io::Error::other(e)),
            ReqwestBackendError::InvalidUrl(url) => FetchkitError::InvalidRequest(url),
            e @ (ReqwestBackendError::InvalidHeaderName(_)
            | ReqwestBackendError::InvalidHeaderValue(_)
            | ReqwestBackendError::InvalidMethod) => FetchkitError::InvalidRequest(e.to_string()),
            ReqwestBackendError::Io(e) => FetchkitError::Transport(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReqwestBackendError>;
