//! An HTTP client configured through composable options.
//!
//! ## Overview
//!
//! A [`Client`] is built from an ordered list of [`ConfigOption`]s. Construction starts from a
//! fully populated default [`ClientConfig`] (30 second timeout, a library user agent, redirects
//! followed, certificates verified), applies every option in the order given, and hands the
//! resulting transport settings to a backend to obtain a transport. Later options overwrite
//! earlier ones on the same field.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use fetchkit::client::{use_insecure_transport, with_timeout, with_user_agent};
//! use fetchkit::Client;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new([
//!     with_timeout(Duration::from_secs(10)),
//!     with_user_agent("My Custom User Agent"),
//!     use_insecure_transport(),
//! ])?;
//! let body = client.get("https://jsonplaceholder.typicode.com/users")?.text()?;
//! println!("{body}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Backends
//!
//! The facade does no network work itself. Socket I/O, TLS and redirect handling belong to a
//! backend implementing [`fetchkit-interface`]. Register one at program startup, for example
//! with `fetchkit_backend_reqwest::register()`, or pass a backend explicitly to
//! [`Client::with_backend`].
//!
//! ## Threading
//!
//! Requests block the calling thread. Clients are `Send + Sync`, cheap to clone, and can be used
//! from many threads at once: the timeout and redirect policy are passed to the transport with
//! each call rather than stored on it.
//!
//! [`fetchkit-interface`]: https://docs.rs/fetchkit-interface

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(missing_docs)]

pub mod client;
mod error;
#[cfg(test)]
mod mock;
mod request;
mod response;
mod status;

#[doc(inline)]
pub use client::{Client, ClientConfig, ConfigOption};
pub use error::{Error, Result};
pub use request::{Method, Request};
pub use response::Response;
pub use status::{StatusClass, StatusCode};
