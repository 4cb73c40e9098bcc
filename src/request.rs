use std::{borrow::Cow, fmt::Debug};

use fetchkit_interface::{Method as MethodImpl, Request as RequestImpl};

/// HTTP request method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method {
    inner: MethodImpl,
}

/// A request to be sent with [`crate::Client::request`].
///
/// Requests carry no body.
#[derive(Clone)]
pub struct Request {
    pub(crate) inner: RequestImpl,
}

impl Method {
    /// A method sent verbatim.
    pub fn custom(method: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: MethodImpl::Other(method.into()),
        }
    }

    /// `GET`
    pub fn get() -> Self {
        Self {
            inner: MethodImpl::Get,
        }
    }

    /// `HEAD`
    pub fn head() -> Self {
        Self {
            inner: MethodImpl::Head,
        }
    }

    /// `POST`
    pub fn post() -> Self {
        Self {
            inner: MethodImpl::Post,
        }
    }

    /// `PUT`
    pub fn put() -> Self {
        Self {
            inner: MethodImpl::Put,
        }
    }

    /// `DELETE`
    pub fn delete() -> Self {
        Self {
            inner: MethodImpl::Delete,
        }
    }

    /// `PATCH`
    pub fn patch() -> Self {
        Self {
            inner: MethodImpl::Patch,
        }
    }
}

impl Request {
    /// Creates a request with the given method and absolute target.
    pub fn new(method: Method, uri: impl Into<Cow<'static, str>>) -> Self {
        Self {
            inner: RequestImpl {
                method: method.inner,
                uri: uri.into(),
                headers: vec![],
            },
        }
    }

    /// Creates a `GET` request.
    pub fn get(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::get(), uri)
    }

    /// Creates a `HEAD` request.
    pub fn head(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::head(), uri)
    }

    /// Creates a `POST` request without a body.
    pub fn post(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::post(), uri)
    }

    /// Creates a `PUT` request without a body.
    pub fn put(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::put(), uri)
    }

    /// Creates a `DELETE` request.
    pub fn delete(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::delete(), uri)
    }

    /// Creates a `PATCH` request without a body.
    pub fn patch(uri: impl Into<Cow<'static, str>>) -> Self {
        Self::new(Method::patch(), uri)
    }

    /// Adds a header to this request.
    ///
    /// `User-Agent` is owned by the client configuration and is replaced when the request is
    /// sent.
    pub fn with_header(
        mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.inner.headers.push((name.into(), value.into()));
        self
    }
}

impl Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt(f)
    }
}
