use std::{borrow::Cow, time::Duration};

use fetchkit_interface::{client::TransportSettings, CallOptions};
use log::trace;

use super::ConfigOption;

/// Timeout applied when no [`super::with_timeout`] option is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// User agent sent when no [`super::with_user_agent`] option is given.
pub const DEFAULT_USER_AGENT: &str = "My HTTP Client";

/// The configuration record of a [`crate::Client`].
///
/// Every field is always populated: [`ClientConfig::default`] provides a value for each of them
/// before any [`ConfigOption`] runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Upper bound for a whole request. [`Duration::ZERO`] disables the bound.
    pub timeout: Duration,
    /// Value of the `User-Agent` header. May be empty.
    pub user_agent: Cow<'static, str>,
    /// Whether redirect responses are followed.
    pub follow_redirects: bool,
    /// Settings the transport is constructed with.
    pub transport: TransportSettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: Cow::Borrowed(DEFAULT_USER_AGENT),
            follow_redirects: true,
            transport: TransportSettings::default(),
        }
    }
}

impl ClientConfig {
    /// Seeds a record with the defaults and applies `options` in order.
    ///
    /// Options touching the same field are last-write-wins.
    pub fn resolve(options: impl IntoIterator<Item = ConfigOption>) -> Self {
        options.into_iter().fold(Self::default(), |config, option| {
            trace!("applying {option:?}");
            option.apply(config)
        })
    }

    /// The per-call transport parameters derived from this configuration.
    pub fn call_options(&self) -> CallOptions {
        CallOptions {
            timeout: self.timeout,
            follow_redirects: self.follow_redirects,
        }
    }
}
