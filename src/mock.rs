//! An in-memory backend for unit tests.

use std::{
    fmt, io,
    sync::{Arc, Mutex},
};

use fetchkit_interface::{
    client::{BuildClientResult, TransportSettings},
    transport::{Backend, Transport, TransportResponse},
    CallOptions, Error, Request,
};

type Calls = Arc<Mutex<Vec<(Request, CallOptions)>>>;

/// Hands out transports that share one call log, like clients sharing a connection pool.
#[derive(Default)]
pub(crate) struct MockBackend {
    fail: bool,
    created: Mutex<Vec<TransportSettings>>,
    calls: Calls,
}

impl MockBackend {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn created_transports(&self) -> Vec<TransportSettings> {
        self.created.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<(Request, CallOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Backend for MockBackend {
    type Transport = MockTransport;

    fn create_transport(&self, settings: TransportSettings) -> BuildClientResult<MockTransport> {
        if self.fail {
            return Err(Error::Transport(io::Error::other("transport unavailable")).into());
        }
        self.created.lock().unwrap().push(settings);
        Ok(MockTransport {
            calls: self.calls.clone(),
        })
    }
}

pub(crate) struct MockTransport {
    calls: Calls,
}

impl Transport for MockTransport {
    type Response = MockResponse;

    fn execute(&self, req: Request, options: CallOptions) -> fetchkit_interface::Result<MockResponse> {
        if !req.uri.contains("://") {
            return Err(Error::InvalidRequest(req.uri.into_owned()));
        }
        let user_agent = req
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case("user-agent"))
            .map(|(_, v)| v.to_string())
            .unwrap_or_default();
        self.calls.lock().unwrap().push((req, options));
        // Let concurrent callers interleave.
        std::thread::yield_now();
        Ok(MockResponse::new(
            200,
            vec![("x-echo-user-agent".into(), user_agent)],
            &format!(
                "{}ms {}",
                options.timeout.as_millis(),
                options.follow_redirects
            ),
        ))
    }
}

pub(crate) struct MockResponse {
    status: u16,
    headers: Vec<(String, String)>,
    body: io::Cursor<Vec<u8>>,
}

impl MockResponse {
    pub fn new(status: u16, headers: Vec<(String, String)>, body: &str) -> Self {
        Self {
            status,
            headers,
            body: io::Cursor::new(body.as_bytes().to_vec()),
        }
    }
}

impl io::Read for MockResponse {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        io::Read::read(&mut self.body, buf)
    }
}

impl TransportResponse for MockResponse {
    fn describe(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MockResponse")
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn content_length(&self) -> Option<u64> {
        Some(self.body.get_ref().len() as u64)
    }

    fn get_header(&self, header: &str) -> fetchkit_interface::Result<Vec<String>> {
        Ok(self
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case(header))
            .map(|(_, v)| v.clone())
            .collect())
    }

    fn text(&mut self) -> fetchkit_interface::Result<String> {
        let bytes = self.bytes()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn bytes(&mut self) -> fetchkit_interface::Result<Vec<u8>> {
        let mut buf = vec![];
        io::Read::read_to_end(&mut self.body, &mut buf)?;
        Ok(buf)
    }
}
