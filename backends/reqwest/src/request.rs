use std::{borrow::Cow, time::Duration};

use fetchkit_interface::{CallOptions, Method, Request};
use http::{HeaderName, HeaderValue};
use reqwest::RequestBuilder;
use url::Url;

use crate::{
    client::ReqwestClients,
    error::{ReqwestBackendError, Result},
};

pub fn convert_method(method: Method) -> Result<reqwest::Method> {
    Ok(match method {
        Method::Get => reqwest::Method::GET,
        Method::Head => reqwest::Method::HEAD,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Patch => reqwest::Method::PATCH,
        Method::Other(other) => other
            .parse()
            .map_err(|_| ReqwestBackendError::InvalidMethod)?,
    })
}

pub fn build_url(url: &str) -> Result<Url> {
    let parsed =
        Url::parse(url).map_err(|e| ReqwestBackendError::InvalidUrl(format!("{url:?}: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(ReqwestBackendError::InvalidUrl(format!(
            "{url:?}: unsupported scheme {scheme}"
        ))),
    }
}

fn convert_header_name(s: Cow<'static, str>) -> Result<HeaderName> {
    HeaderName::from_bytes(s.as_bytes())
        .map_err(|_| ReqwestBackendError::InvalidHeaderName(s.into_owned()))
}

fn convert_header_value(k: &str, v: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(v).map_err(|_| ReqwestBackendError::InvalidHeaderValue(k.into()))
}

/// Translates a request descriptor into a reqwest request on the client matching the call's
/// redirect policy. Nothing is sent yet, so malformed input never reaches the network.
pub fn build_request(
    clients: &ReqwestClients,
    req: Request,
    options: CallOptions,
) -> Result<RequestBuilder> {
    let url = build_url(&req.uri)?;
    let method = convert_method(req.method)?;

    let mut request_builder = clients.select(options.follow_redirects).request(method, url);

    for (key, value) in req.headers {
        let value = convert_header_value(&key, &value)?;
        request_builder = request_builder.header(convert_header_name(key)?, value);
    }

    if options.timeout != Duration::ZERO {
        request_builder = request_builder.timeout(options.timeout);
    }

    Ok(request_builder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_accepts_http_and_https() {
        assert_eq!(build_url("http://localhost:8080/a?b=c").unwrap().port(), Some(8080));
        assert_eq!(build_url("https://example.com").unwrap().scheme(), "https");
    }

    #[test]
    fn test_build_url_rejects_malformed_targets() {
        for url in ["", "example.com/path", "/relative", "ftp://example.com/file", "http://"] {
            let err = build_url(url).unwrap_err();
            assert!(matches!(err, ReqwestBackendError::InvalidUrl(_)), "{url}: {err:?}");
        }
    }

    #[test]
    fn test_convert_method() {
        assert_eq!(convert_method(Method::Head).unwrap(), reqwest::Method::HEAD);
        assert_eq!(
            convert_method(Method::Other("PURGE".into())).unwrap().as_str(),
            "PURGE"
        );
        assert!(convert_method(Method::Other("BAD METHOD".into())).is_err());
    }

    #[test]
    fn test_build_request_applies_call_options() {
        let clients = ReqwestClients::new(&Default::default()).unwrap();
        let req = Request {
            method: Method::Get,
            uri: "http://localhost/ua".into(),
            headers: vec![("user-agent".into(), "".into())],
        };
        let options = CallOptions {
            timeout: Duration::from_secs(3),
            follow_redirects: false,
        };
        let built = build_request(&clients, req, options).unwrap().build().unwrap();
        assert_eq!(built.timeout(), Some(&Duration::from_secs(3)));
        assert_eq!(built.headers()["user-agent"], "");
    }

    #[test]
    fn test_zero_timeout_leaves_request_unbounded() {
        let clients = ReqwestClients::new(&Default::default()).unwrap();
        let req = Request {
            method: Method::Get,
            uri: "http://localhost/".into(),
            headers: vec![],
        };
        let options = CallOptions {
            timeout: Duration::ZERO,
            follow_redirects: true,
        };
        let built = build_request(&clients, req, options).unwrap().build().unwrap();
        assert_eq!(built.timeout(), None);
    }

    #[test]
    fn test_build_request_rejects_bad_header() {
        let clients = ReqwestClients::new(&Default::default()).unwrap();
        let req = Request {
            method: Method::Get,
            uri: "http://localhost/".into(),
            headers: vec![("x-bad".into(), "line\nbreak".into())],
        };
        let options = CallOptions {
            timeout: Duration::from_secs(1),
            follow_redirects: true,
        };
        let err = build_request(&clients, req, options).unwrap_err();
        assert!(matches!(err, ReqwestBackendError::InvalidHeaderValue(_)), "{err:?}");
    }
}
