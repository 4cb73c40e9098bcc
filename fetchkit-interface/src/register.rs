use std::sync::OnceLock;

use crate::transport::AnyBackend;

/// The globally registered backend, consulted by `fetchkit::Client::new`.
pub static BACKEND: OnceLock<Box<dyn AnyBackend>> = OnceLock::new();

/// Registers `backend` as the global default.
///
/// # Panics
///
/// Panics if a backend has already been registered.
pub fn register_backend(backend: impl AnyBackend) {
    if BACKEND.set(Box::new(backend)).is_err() {
        panic!("Backend already registered");
    }
}
