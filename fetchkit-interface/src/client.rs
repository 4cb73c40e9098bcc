//! Transport construction settings and errors.
//!
//! This module provides the settings a backend needs to build a transport, and the errors
//! that may come out of building one.

mod error;
mod options;

pub use error::{BuildClientError, BuildClientResult};
pub use options::{TlsVerification, TransportSettings};
