use std::{fmt::Debug, io};

use fetchkit_interface::transport::AnyTransportResponse;

use crate::StatusCode;

/// An HTTP response.
///
/// The response owns the connection its body is read from. Dropping it releases the connection
/// whether or not the body has been read, so every exit path, including early returns on
/// errors, cleans up after itself.
///
/// The body can be streamed through [`io::Read`] or collected with [`Response::text`] or
/// [`Response::bytes`].
pub struct Response {
    inner: Box<dyn AnyTransportResponse>,
}

impl Response {
    /// Get the `StatusCode` of this Response.
    pub fn status(&self) -> StatusCode {
        self.inner.status().into()
    }

    /// Return the response as-is, or [`crate::Error::NonSuccessfulStatusCode`] if the status code
    /// does not indicate success.
    #[inline]
    pub fn with_successful_status(self) -> crate::Result<Self> {
        let status = self.status();
        if status.is_successful() {
            Ok(self)
        } else {
            Err(crate::Error::NonSuccessfulStatusCode(status))
        }
    }

    /// Get the `content-length` of this response, if known by the transport.
    pub fn content_length(&self) -> Option<u64> {
        self.inner.content_length()
    }

    /// Get the response values of the specified header.
    ///
    /// Multiple values may be returned if the header is present multiple times.
    pub fn get_header(&self, header: &str) -> crate::Result<Vec<String>> {
        Ok(self.inner.get_header(header)?)
    }

    /// Block the current thread until getting the full response text.
    ///
    /// Bytes that are not valid UTF-8 are replaced.
    pub fn text(mut self) -> crate::Result<String> {
        Ok(self.inner.text()?)
    }

    /// Block the current thread until getting the full response bytes.
    pub fn bytes(mut self) -> crate::Result<Vec<u8>> {
        Ok(AnyTransportResponse::bytes(&mut *self.inner)?)
    }
}

impl io::Read for Response {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut *self.inner, buf)
    }
}

impl From<Box<dyn AnyTransportResponse>> for Response {
    fn from(inner: Box<dyn AnyTransportResponse>) -> Self {
        Self { inner }
    }
}

struct ResponseDebug<'a> {
    inner: &'a dyn AnyTransportResponse,
}
impl Debug for ResponseDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.describe(f)
    }
}

impl Debug for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("status", &self.status())
            .field("content_length", &self.content_length())
            .field(
                "inner",
                &ResponseDebug {
                    inner: &*self.inner,
                },
            )
            .finish()
    }
}
