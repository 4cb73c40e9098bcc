//! Error types for transport construction.

use thiserror::Error;

use crate::Error as BackendError;

/// Errors that can occur when building a fetchkit client.
#[derive(Debug, Error)]
pub enum BuildClientError {
    /// No backend has been registered for fetchkit.
    #[error("No backend registered")]
    NoBackend,
    /// The backend failed to construct a transport from the given settings.
    #[error("Error creating transport: {0}")]
    BackendError(#[from] BackendError),
}

/// Result type for transport construction.
pub type BuildClientResult<T> = Result<T, BuildClientError>;
