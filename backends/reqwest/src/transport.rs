use std::io::{self, Read};
use std::sync::Arc;

use fetchkit_interface::client::TransportSettings;
use fetchkit_interface::transport::{Transport, TransportResponse};
use fetchkit_interface::{CallOptions, Request, Result as FetchkitResult};

use crate::client::ReqwestClients;
use crate::error::ReqwestBackendError;
use crate::response::ReqwestResponse;
use crate::runtime::ManagedRuntime;

/// A blocking transport backed by reqwest.
///
/// Timeout and redirect policy are taken from the [`CallOptions`] of each call; nothing about a
/// call is stored on the transport, so it can be shared freely between threads and clients.
#[derive(Clone)]
pub struct ReqwestTransport {
    clients: ReqwestClients,
    managed_runtime: Arc<ManagedRuntime>,
}

impl ReqwestTransport {
    /// Creates a transport from the given settings.
    pub fn new(settings: &TransportSettings) -> FetchkitResult<Self> {
        Ok(Self {
            clients: ReqwestClients::new(settings)?,
            managed_runtime: Arc::default(),
        })
    }
}

impl Transport for ReqwestTransport {
    type Response = ReqwestTransportResponse;

    fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReqwestTransport")
    }

    fn execute(&self, req: Request, options: CallOptions) -> FetchkitResult<Self::Response> {
        let request_builder = crate::request::build_request(&self.clients, req, options)?;
        let response = self.managed_runtime.execute(|| async move {
            request_builder.send().await
        })?
        .map_err(ReqwestBackendError::Reqwest)?;

        Ok(ReqwestTransportResponse {
            response: ReqwestResponse::new(response),
            managed_runtime: self.managed_runtime.clone(),
        })
    }
}

/// A response received through [`ReqwestTransport`].
pub struct ReqwestTransportResponse {
    response: ReqwestResponse,
    managed_runtime: Arc<ManagedRuntime>,
}

impl TransportResponse for ReqwestTransportResponse {
    fn describe(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReqwestTransportResponse(status: {})", self.status())
    }

    fn status(&self) -> u16 {
        self.response.status()
    }

    fn content_length(&self) -> Option<u64> {
        self.response.content_length()
    }

    fn get_header(&self, header: &str) -> FetchkitResult<Vec<String>> {
        Ok(self.response.get_header(header))
    }

    fn text(&mut self) -> FetchkitResult<String> {
        let bytes = TransportResponse::bytes(self)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn bytes(&mut self) -> FetchkitResult<Vec<u8>> {
        let response = &mut self.response;
        let bytes = self.managed_runtime.execute(|| async move {
            response.collect_all_bytes().await
        })?
        .map_err(ReqwestBackendError::Reqwest)?;
        Ok(bytes)
    }
}

impl Read for ReqwestTransportResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let written = self.response.write_to(buf);
            if written > 0 || buf.is_empty() {
                break Ok(written);
            }
            let response = &mut self.response;
            let received = self.managed_runtime.execute(|| async move {
                response.receive_data_frame_buffered().await
            })??;
            if received == 0 {
                break Ok(0);
            }
        }
    }
}
