#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod client;
mod error;
mod request;
mod response;
mod runtime;
mod transport;

use fetchkit_interface::{
    client::{BuildClientResult, TransportSettings},
    register_backend,
};

pub use transport::{ReqwestTransport, ReqwestTransportResponse};

/// The backend implementation using reqwest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestBackend;

impl fetchkit_interface::transport::Backend for ReqwestBackend {
    type Transport = ReqwestTransport;

    fn create_transport(&self, settings: TransportSettings) -> BuildClientResult<ReqwestTransport> {
        Ok(ReqwestTransport::new(&settings)?)
    }
}

/// Registers the reqwest backend as global default.
pub fn register() {
    register_backend(ReqwestBackend);
}
