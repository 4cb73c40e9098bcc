//! Interface definitions for fetchkit transport backends.
//!
//! This crate describes the transport collaborator that the fetchkit facade configures and
//! invokes. A backend turns [`client::TransportSettings`] into a transport, and the transport
//! executes one [`Request`] at a time under the per-call [`CallOptions`] handed to it.
//!
//! The facade never performs socket, TLS or redirect work itself. Everything below the request
//! descriptor is the backend's business.
//!
//! ## Backend Registration
//!
//! Backend implementations register themselves using the `register_backend` function so that
//! `fetchkit::Client::new` can find them.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod client;
mod error;
#[doc(hidden)] // For fetchkit facade only
pub mod register;
mod request;
pub mod transport;

pub use error::{Error, Result};
pub use register::register_backend;
pub use request::{CallOptions, Method, Request};
