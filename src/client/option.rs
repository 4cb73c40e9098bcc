use std::{borrow::Cow, time::Duration};

use fetchkit_interface::client::TransportSettings;

use super::ClientConfig;

/// A deferred change to a [`ClientConfig`], applied while a client is being built.
///
/// Options are applied in the order they are given. Each one touches only the fields it names,
/// and a later option overwrites an earlier one on the same field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigOption {
    /// Sets [`ClientConfig::timeout`].
    Timeout(Duration),
    /// Sets [`ClientConfig::user_agent`].
    UserAgent(Cow<'static, str>),
    /// Clears [`ClientConfig::follow_redirects`].
    NoRedirects,
    /// Replaces [`ClientConfig::transport`] with [`TransportSettings::insecure`].
    InsecureTransport,
    /// Replaces [`ClientConfig::transport`] wholesale.
    Transport(TransportSettings),
    /// Clears [`TransportSettings::use_default_proxy`].
    NoProxy,
}

impl ConfigOption {
    /// Applies this option to `config`.
    pub fn apply(self, mut config: ClientConfig) -> ClientConfig {
        match self {
            Self::Timeout(timeout) => config.timeout = timeout,
            Self::UserAgent(user_agent) => config.user_agent = user_agent,
            Self::NoRedirects => config.follow_redirects = false,
            Self::InsecureTransport => config.transport = TransportSettings::insecure(),
            Self::Transport(settings) => config.transport = settings,
            Self::NoProxy => config.transport.use_default_proxy = false,
        }
        config
    }
}

/// Sets the timeout bounding each request.
///
/// The value is not validated. [`Duration::ZERO`] disables the bound.
pub fn with_timeout(timeout: Duration) -> ConfigOption {
    ConfigOption::Timeout(timeout)
}

/// Sets the `User-Agent` header sent with each request.
///
/// An empty string sends the header with an empty value.
pub fn with_user_agent(user_agent: impl Into<Cow<'static, str>>) -> ConfigOption {
    ConfigOption::UserAgent(user_agent.into())
}

/// Returns redirect responses to the caller instead of following them.
pub fn without_redirects() -> ConfigOption {
    ConfigOption::NoRedirects
}

/// Skips certificate and host name verification.
///
/// This replaces the whole transport configuration, so any transport customization given before
/// it is discarded. Put it first if it should be combined with other transport options.
pub fn use_insecure_transport() -> ConfigOption {
    ConfigOption::InsecureTransport
}

/// Uses the given transport settings.
pub fn with_transport(settings: TransportSettings) -> ConfigOption {
    ConfigOption::Transport(settings)
}

/// Bypasses the system's default proxy settings.
pub fn without_proxy() -> ConfigOption {
    ConfigOption::NoProxy
}
