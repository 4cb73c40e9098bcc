use std::{borrow::Cow, time::Duration};

/// HTTP request method understood by transports.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    Get,
    /// `HEAD`
    Head,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
    /// `PATCH`
    Patch,
    /// Any other method, sent verbatim.
    Other(Cow<'static, str>),
}

/// A request descriptor handed to a transport.
///
/// `uri` is passed through untouched; validating it is up to the transport.
#[derive(Debug, Clone)]
pub struct Request {
    /// Request method.
    pub method: Method,
    /// Absolute request target.
    pub uri: Cow<'static, str>,
    /// Headers sent with this request, in order.
    pub headers: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

/// Parameters applied to a single transport call.
///
/// A transport must honor these for the call they are passed with and must not retain them for
/// later calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallOptions {
    /// Upper bound for the whole call. [`Duration::ZERO`] means no bound.
    pub timeout: Duration,
    /// Whether redirect responses are followed. When `false`, the first redirect response is
    /// returned to the caller as-is.
    pub follow_redirects: bool,
}
