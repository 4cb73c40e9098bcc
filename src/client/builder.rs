use fetchkit_interface::{register::BACKEND, transport::AnyBackend};
use log::debug;

use super::{BuildClientError, BuildClientResult, Client, ClientConfig, ConfigOption};

impl Client {
    /// Builds a client on the registered backend.
    ///
    /// The configuration starts from [`ClientConfig::default`] and `options` are applied in the
    /// order given.
    pub fn new(options: impl IntoIterator<Item = ConfigOption>) -> BuildClientResult<Self> {
        let backend = BACKEND.get().ok_or(BuildClientError::NoBackend)?;
        Self::with_backend(&**backend, options)
    }

    /// Builds a client on the given backend instead of the registered one.
    pub fn with_backend(
        backend: &dyn AnyBackend,
        options: impl IntoIterator<Item = ConfigOption>,
    ) -> BuildClientResult<Self> {
        Self::from_config(backend, ClientConfig::resolve(options))
    }

    /// Builds a client on the given backend from an already resolved configuration.
    pub fn from_config(backend: &dyn AnyBackend, config: ClientConfig) -> BuildClientResult<Self> {
        debug!("building client with {config:?}");
        let transport = backend.create_transport(config.transport.clone())?;
        Ok(Self { config, transport })
    }
}
