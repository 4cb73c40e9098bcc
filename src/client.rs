//! The fetchkit client and its configuration.

mod builder;
mod config;
mod error;
mod option;

use std::{borrow::Cow, fmt::Debug, sync::Arc};

use fetchkit_interface::transport::AnyTransport;
use log::debug;

pub use config::{ClientConfig, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use error::{BuildClientError, BuildClientResult};
pub use fetchkit_interface::client::{TlsVerification, TransportSettings};
pub use option::{
    use_insecure_transport, with_timeout, with_transport, with_user_agent, without_proxy,
    without_redirects, ConfigOption,
};

use crate::{Request, Response};

const USER_AGENT: &str = "user-agent";

/// A blocking HTTP client to make requests with.
///
/// The current thread issuing a request will be blocked until it is completed, or until the
/// configured timeout elapses.
///
/// The resolved [`ClientConfig`] is fixed at construction. Every call derives its timeout and
/// redirect policy from it and hands them to the transport as per-call parameters, so the shared
/// transport is never mutated by a request.
///
/// # Thread safety
///
/// The client is thread-safe and can be shared between threads. Cloning it is cheap and shares
/// the underlying transport, including any connection pool the backend keeps.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn AnyTransport>,
}

impl Client {
    /// The configuration this client resolved at construction.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends a `GET` request to `uri` and returns the response.
    ///
    /// Redirect responses are returned as-is if the client was built with
    /// [`without_redirects`].
    pub fn get(&self, uri: impl Into<Cow<'static, str>>) -> crate::Result<Response> {
        self.request(Request::get(uri))
    }

    /// Sends a `GET` request to `uri` and reads the whole response body as text.
    pub fn get_string(&self, uri: impl Into<Cow<'static, str>>) -> crate::Result<String> {
        self.get(uri)?.text()
    }

    /// Sends a request to the server and returns the response. The current thread will be blocked
    /// until the response is available or an error occurs.
    ///
    /// The `User-Agent` header is always set to the configured user agent, replacing any value
    /// carried by the request.
    pub fn request(&self, req: Request) -> crate::Result<Response> {
        let mut req = req.inner;
        req.headers
            .retain(|(name, _)| !name.eq_ignore_ascii_case(USER_AGENT));
        req.headers
            .push((Cow::Borrowed(USER_AGENT), self.config.user_agent.clone()));

        let options = self.config.call_options();
        debug!(
            "{:?} {} (timeout: {:?}, follow redirects: {})",
            req.method, req.uri, options.timeout, options.follow_redirects
        );
        let res = self.transport.execute(req, options)?;
        Ok(res.into())
    }
}

impl Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        struct TransportDebug<'a>(&'a dyn AnyTransport);
        impl Debug for TransportDebug<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.describe(f)
            }
        }

        f.debug_struct("Client")
            .field("config", &self.config)
            .field("transport", &TransportDebug(&*self.transport))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread, time::Duration};

    use super::*;
    use crate::mock::MockBackend;
    use crate::Error;

    #[test]
    fn test_get_sends_configured_user_agent() {
        let backend = MockBackend::default();
        let client =
            Client::with_backend(&backend, [with_user_agent("Custom Agent/1.0")]).unwrap();

        let res = client.get("http://localhost/ua").unwrap();
        assert_eq!(res.get_header("x-echo-user-agent").unwrap(), ["Custom Agent/1.0"]);
        assert_eq!(res.status(), 200);
    }

    #[test]
    fn test_empty_user_agent_is_sent_as_empty_header() {
        let backend = MockBackend::default();
        let client = Client::with_backend(&backend, [with_user_agent("")]).unwrap();

        client.get("http://localhost/ua").unwrap();
        let calls = backend.calls();
        let user_agents: Vec<_> = calls[0]
            .0
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("user-agent"))
            .map(|(_, v)| v.to_string())
            .collect();
        assert_eq!(user_agents, [""]);
    }

    #[test]
    fn test_request_user_agent_is_replaced() {
        let backend = MockBackend::default();
        let client = Client::with_backend(&backend, []).unwrap();

        let req = Request::get("http://localhost/ua").with_header("User-Agent", "overridden");
        let res = client.request(req).unwrap();
        assert_eq!(res.get_header("x-echo-user-agent").unwrap(), [DEFAULT_USER_AGENT]);
    }

    #[test]
    fn test_call_options_follow_config() {
        let backend = MockBackend::default();
        let client = Client::with_backend(
            &backend,
            [with_timeout(Duration::from_secs(5)), without_redirects()],
        )
        .unwrap();

        client.get("http://localhost/a").unwrap();
        client.get("http://localhost/b").unwrap();
        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        for (_, options) in calls {
            assert_eq!(options.timeout, Duration::from_secs(5));
            assert!(!options.follow_redirects);
        }
    }

    #[test]
    fn test_malformed_target_issues_no_call() {
        let backend = MockBackend::default();
        let client = Client::with_backend(&backend, []).unwrap();

        for target in ["", "example.com/missing-scheme"] {
            let err = client.get(target).unwrap_err();
            assert!(matches!(err, Error::InvalidRequest(_)), "{err:?}");
        }
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_concurrent_calls_keep_their_own_timeouts() {
        let backend = MockBackend::default();
        let fast = Client::with_backend(&backend, [with_timeout(Duration::from_secs(1))]).unwrap();
        let slow = Client::with_backend(
            &backend,
            [with_timeout(Duration::from_secs(9)), without_redirects()],
        )
        .unwrap();
        assert!(Arc::ptr_eq(&fast.transport, &slow.transport));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let client = if i % 2 == 0 { fast.clone() } else { slow.clone() };
                thread::spawn(move || {
                    let res = client.get(format!("http://localhost/{i}")).unwrap();
                    let expected = client.config().call_options();
                    (res.text().unwrap(), expected)
                })
            })
            .collect();

        for handle in handles {
            let (seen, expected) = handle.join().unwrap();
            assert_eq!(
                seen,
                format!(
                    "{}ms {}",
                    expected.timeout.as_millis(),
                    expected.follow_redirects
                )
            );
        }
    }

    #[test]
    fn test_clone_shares_transport() {
        let backend = MockBackend::default();
        let client = Client::with_backend(&backend, []).unwrap();
        let cloned = client.clone();
        assert!(Arc::ptr_eq(&client.transport, &cloned.transport));
        assert_eq!(client.config(), cloned.config());
        assert_eq!(backend.created_transports().len(), 1);
    }
}
