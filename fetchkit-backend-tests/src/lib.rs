#![cfg(test)]

use std::{
    collections::BTreeMap,
    convert::Infallible,
    future::Future,
    io,
    net::SocketAddr,
    pin::Pin,
    sync::{LazyLock, Mutex, Once},
};

use fetchkit::{Client, ConfigOption};
use http_body_util::{BodyExt, Full};
use hyper::{
    body::{self, Bytes},
    server::conn::http1,
    service::service_fn,
    Request, Response,
};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

mod fixtures;

type BoxedBody = http_body_util::combinators::BoxBody<Bytes, hyper::Error>;

/// What a fixture handler resolves to: the response to send, and `Err` with the request when
/// the request did not look as the test expected.
type FixtureResult<B = Full<Bytes>> = (Response<B>, Result<(), Request<body::Incoming>>);

/// A registered handler, answering with the response and a description of any rejected request.
type FixtureHandler = Box<
    dyn Fn(
            Request<body::Incoming>,
        ) -> Pin<Box<dyn Future<Output = (Response<BoxedBody>, Option<String>)> + Send>>
        + Send
        + Sync,
>;

/// Response bodies a fixture may answer with.
trait FixtureBody {
    fn into_boxed(self) -> BoxedBody;
}

impl FixtureBody for Full<Bytes> {
    fn into_boxed(self) -> BoxedBody {
        self.map_err(|never| -> hyper::Error { match never {} })
            .boxed()
    }
}

impl FixtureBody for BoxedBody {
    fn into_boxed(self) -> BoxedBody {
        self
    }
}

struct Fixture {
    handler: FixtureHandler,
    rejected_request: Option<String>,
}

static FIXTURES: Mutex<BTreeMap<String, Fixture>> = Mutex::new(BTreeMap::new());

/// Keeps a fixture path registered; on drop, fails the test if the path saw an unexpected
/// request.
#[must_use]
struct FixtureGuard(String);

impl Drop for FixtureGuard {
    fn drop(&mut self) {
        let rejected = FIXTURES
            .lock()
            .unwrap()
            .remove(&self.0)
            .and_then(|fixture| fixture.rejected_request);
        if let Some(req) = rejected {
            panic!("fixture {} received unexpected request {req}", self.0);
        }
    }
}

fn add_hyper_fixture<Fut, B>(
    path: impl Into<String>,
    handler: impl Fn(Request<body::Incoming>) -> Fut + Send + Sync + 'static,
) -> FixtureGuard
where
    Fut: Future<Output = FixtureResult<B>> + Send + 'static,
    B: FixtureBody + 'static,
{
    let mut path: String = path.into();
    if !path.starts_with('/') {
        path.insert(0, '/');
    }
    let handler: FixtureHandler = Box::new(move |req| {
        let fut = handler(req);
        Box::pin(async move {
            let (response, verdict) = fut.await;
            let rejected = verdict
                .err()
                .map(|req| format!("{} {}", req.method(), req.uri()));
            (response.map(FixtureBody::into_boxed), rejected)
        })
    });
    FIXTURES.lock().unwrap().insert(
        path.clone(),
        Fixture {
            handler,
            rejected_request: None,
        },
    );
    FixtureGuard(path)
}

async fn handle_service(req: Request<body::Incoming>) -> Result<Response<BoxedBody>, Infallible> {
    let path = req.uri().path().to_owned();
    let fut = {
        let fixtures = FIXTURES.lock().unwrap();
        match fixtures.get(&path) {
            Some(fixture) => (fixture.handler)(req),
            None => {
                let mut response = Response::new(Full::new(Bytes::new()).into_boxed());
                *response.status_mut() = hyper::StatusCode::NOT_FOUND;
                return Ok(response);
            }
        }
    };
    let (response, rejected) = fut.await;

    if let Some(fixture) = FIXTURES.lock().unwrap().get_mut(&path) {
        if rejected.is_some() {
            fixture.rejected_request = rejected;
        }
    }

    Ok(response)
}

async fn setup_hyper_impl() -> Result<String, io::Error> {
    let addr = SocketAddr::from(([127, 0, 0, 1], 0));

    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.expect("accept failed");
            let io = TokioIo::new(stream);

            tokio::task::spawn(async move {
                if let Err(err) = http1::Builder::new()
                    .serve_connection(io, service_fn(handle_service))
                    .await
                {
                    eprintln!("Error serving connection: {err:?}");
                }
            });
        }
    });

    Ok(format!("http://127.0.0.1:{port}"))
}

static TOKIO_RT: LazyLock<tokio::runtime::Runtime> = LazyLock::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .unwrap()
});

/// Absolute URL of `path` on the shared fixture server, starting the server on first use.
fn fixture_url(path: &str) -> io::Result<String> {
    use tokio::sync::OnceCell;

    static HYPER_SERVICE_INIT: OnceCell<io::Result<String>> = OnceCell::const_new();
    TOKIO_RT.block_on(async {
        match HYPER_SERVICE_INIT.get_or_init(setup_hyper_impl).await {
            Ok(base_url) => Ok(format!("{base_url}/{}", path.trim_start_matches('/'))),
            Err(err) => Err(io::Error::new(err.kind(), err.to_string())),
        }
    })
}

/// Builds a client on the backend selected by cargo features.
fn init_client(options: impl IntoIterator<Item = ConfigOption>) -> Client {
    static BACKEND_INIT: Once = Once::new();
    BACKEND_INIT.call_once(init_backend);

    Client::new(options).expect("failed to build client")
}

fn init_backend() {
    cfg_if::cfg_if! {
        if #[cfg(feature = "reqwest")] {
            fetchkit_backend_reqwest::register();
        } else {
            panic!("No backend feature enabled.");
        }
    }
}
