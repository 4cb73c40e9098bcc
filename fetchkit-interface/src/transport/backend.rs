//! Core transport traits.
//!
//! Backend developers implement [`Backend`] and [`Transport`], along with a custom
//! [`TransportResponse`] type.

use std::{fmt, io};

use crate::client::{BuildClientResult, TransportSettings};
use crate::{CallOptions, Request};

/// A transport able to execute HTTP requests.
///
/// A transport may be shared by several clients and used from several threads at once. It must
/// not keep any state derived from the [`CallOptions`] of one call around for the next one.
pub trait Transport: Send + Sync + 'static {
    /// The type of response returned by this transport.
    type Response: TransportResponse;

    /// Provides a textual description of this transport.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transport")
    }

    /// Executes the request under the given call options, blocking until the response head is
    /// available or an error occurs.
    fn execute(&self, req: Request, options: CallOptions) -> crate::Result<Self::Response>;
}

/// A backend that creates transports.
pub trait Backend: Send + Sync + 'static {
    /// The type of transport this backend creates.
    type Transport: Transport;

    /// Creates a new transport with the given settings.
    fn create_transport(&self, settings: TransportSettings) -> BuildClientResult<Self::Transport>;
}

/// A response produced by a transport.
///
/// The body is streamed through [`io::Read`]. Dropping the response releases the underlying
/// connection, whether or not the body was consumed.
///
/// `text()` and `bytes()` use `&mut self` receivers to stay object safe. They are expected to be
/// called at most once; the facade enforces this by consuming its own response wrapper.
pub trait TransportResponse: io::Read + Send + Sync + 'static {
    /// Provides a textual description of this response.
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransportResponse")
    }

    /// Returns the HTTP status code of this response.
    fn status(&self) -> u16;

    /// Returns the content-length of the response body, if known.
    fn content_length(&self) -> Option<u64>;

    /// Gets all values for the specified header.
    fn get_header(&self, header: &str) -> crate::Result<Vec<String>>;

    /// Reads the response body as text.
    fn text(&mut self) -> crate::Result<String>;

    /// Reads the response body as bytes.
    fn bytes(&mut self) -> crate::Result<Vec<u8>>;
}
