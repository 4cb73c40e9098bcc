use fetchkit_interface::client::{TlsVerification, TransportSettings};
use reqwest::{redirect::Policy, Client};

use crate::error::{ReqwestBackendError, Result};

/// A pair of reqwest clients built from the same settings, differing only in redirect policy.
///
/// reqwest fixes the redirect policy per client, so the per-call choice is made by picking one
/// of the two. Both are cheap handles onto their own connection pools.
#[derive(Clone)]
pub(crate) struct ReqwestClients {
    following: Client,
    not_following: Client,
}

impl ReqwestClients {
    pub fn new(settings: &TransportSettings) -> Result<Self> {
        Ok(Self {
            following: build_reqwest_client(settings, Policy::default())?,
            not_following: build_reqwest_client(settings, Policy::none())?,
        })
    }

    pub fn select(&self, follow_redirects: bool) -> &Client {
        if follow_redirects {
            &self.following
        } else {
            &self.not_following
        }
    }
}

fn build_reqwest_client(settings: &TransportSettings, redirect: Policy) -> Result<Client> {
    let mut builder = Client::builder().redirect(redirect);

    if !settings.use_default_proxy {
        builder = builder.no_proxy();
    }

    #[cfg(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls",
    ))]
    {
        builder = builder
            .danger_accept_invalid_certs(settings.tls == TlsVerification::Insecure);
    }
    #[cfg(not(any(
        feature = "default-tls",
        feature = "native-tls",
        feature = "rustls-tls",
    )))]
    {
        if settings.tls == TlsVerification::Insecure {
            log::warn!("no TLS feature enabled, ignoring insecure TLS setting");
        }
    }

    builder.build().map_err(ReqwestBackendError::Reqwest)
}
