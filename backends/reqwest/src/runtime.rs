use std::{future::Future, io, sync::OnceLock, thread};

use log::debug;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// The runtime a transport performs all of its I/O on, created on first use.
///
/// Dropping it never blocks, so the last transport handle may be released from within an
/// async context.
#[derive(Default)]
pub struct ManagedRuntime {
    cell: OnceLock<Runtime>,
}

impl ManagedRuntime {
    fn get(&self) -> io::Result<&Runtime> {
        if let Some(runtime) = self.cell.get() {
            return Ok(runtime);
        }
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .thread_name("fetchkit-reqwest")
            .worker_threads(1)
            .enable_all()
            .build()?;
        debug!("created managed tokio runtime for blocking transport");
        Ok(self.cell.get_or_init(|| runtime))
    }

    /// Blocks the current thread on `task`, driving it on the managed runtime.
    ///
    /// Pooled connections live on the managed runtime, so they never depend on whichever
    /// runtime the caller happened to be in. From a multi-threaded tokio worker the wait goes
    /// through `block_in_place`. A current-thread runtime cannot be left that way, so the wait
    /// happens on a helper thread instead.
    pub fn execute<F, Fut, T>(&self, task: F) -> io::Result<T>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = T>,
        T: Send,
    {
        let runtime = self.get()?;
        match Handle::try_current() {
            Err(_) => Ok(runtime.block_on(task())),
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                Ok(tokio::task::block_in_place(|| runtime.block_on(task())))
            }
            Ok(_) => {
                debug!("blocking call from a current-thread runtime; waiting on a helper thread");
                thread::scope(|scope| {
                    scope
                        .spawn(|| runtime.block_on(task()))
                        .join()
                        .map_err(|_| io::Error::other("blocking transport task panicked"))
                })
            }
        }
    }
}

impl Drop for ManagedRuntime {
    fn drop(&mut self) {
        if let Some(runtime) = self.cell.take() {
            runtime.shutdown_background();
        }
    }
}
