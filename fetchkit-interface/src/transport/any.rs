//! Type-erased transport traits.
//!
//! The traits in this module are implemented automatically for every type implementing the
//! corresponding trait from the `transport::backend` module, so backend developers don't need to
//! implement them directly.

use std::any::Any;
use std::fmt;
use std::io;
use std::sync::Arc;

use super::backend::{Backend, Transport, TransportResponse};
use crate::client::{BuildClientResult, TransportSettings};
use crate::{CallOptions, Request, Result};

/// Type-erased [`Backend`].
pub trait AnyBackend: Send + Sync + 'static {
    /// Creates a new transport with the given settings.
    fn create_transport(&self, settings: TransportSettings)
        -> BuildClientResult<Arc<dyn AnyTransport>>;
}

/// Type-erased [`Transport`].
pub trait AnyTransport: Any + Send + Sync + 'static {
    /// Provides a textual description of this transport.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    /// Executes the request under the given call options.
    fn execute(&self, req: Request, options: CallOptions) -> Result<Box<dyn AnyTransportResponse>>;
}

/// Type-erased [`TransportResponse`].
pub trait AnyTransportResponse: io::Read + Any + Send + Sync + 'static {
    /// Provides a textual description of this response.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
    /// Returns the HTTP status code of this response.
    fn status(&self) -> u16;
    /// Returns the content-length of the response body, if known.
    fn content_length(&self) -> Option<u64>;
    /// Gets all values for the specified header.
    fn get_header(&self, header: &str) -> Result<Vec<String>>;
    /// Reads the response body as text.
    fn text(&mut self) -> Result<String>;
    /// Reads the response body as bytes.
    fn bytes(&mut self) -> Result<Vec<u8>>;
}

impl<B: Backend> AnyBackend for B {
    fn create_transport(
        &self,
        settings: TransportSettings,
    ) -> BuildClientResult<Arc<dyn AnyTransport>> {
        Ok(Arc::new(Backend::create_transport(self, settings)?))
    }
}

impl<T: Transport> AnyTransport for T {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Transport::describe(self, f)
    }

    fn execute(&self, req: Request, options: CallOptions) -> Result<Box<dyn AnyTransportResponse>> {
        Ok(Box::new(Transport::execute(self, req, options)?))
    }
}

impl<R: TransportResponse> AnyTransportResponse for R {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        TransportResponse::describe(self, f)
    }

    fn status(&self) -> u16 {
        TransportResponse::status(self)
    }

    fn content_length(&self) -> Option<u64> {
        TransportResponse::content_length(self)
    }

    fn get_header(&self, header: &str) -> Result<Vec<String>> {
        TransportResponse::get_header(self, header)
    }

    fn text(&mut self) -> Result<String> {
        TransportResponse::text(self)
    }

    fn bytes(&mut self) -> Result<Vec<u8>> {
        TransportResponse::bytes(self)
    }
}
