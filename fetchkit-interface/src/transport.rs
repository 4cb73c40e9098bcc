//! Transport interface.
//!
//! This module provides the traits a backend implements to act as the transport collaborator
//! of fetchkit clients. All calls are blocking.

mod any;
mod backend;

pub use any::{AnyBackend, AnyTransport, AnyTransportResponse};
pub use backend::{Backend, Transport, TransportResponse};
