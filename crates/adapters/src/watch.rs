// SPDX-License-Identifier: MIT

//! Orchestrator watch client interface (§6 "Inbound").
//!
//! The real client is an external collaborator (out of scope, §1); this
//! module defines only the trait the watch multiplexer (`fv-engine`)
//! consumes, plus a scriptable fake for tests.

use fv_core::{Container, Endpoint, Executable, Service};
use futures::stream::BoxStream;
use tokio_util::sync::CancellationToken;

/// One event from an orchestrator watch stream. `Bookmark` and `Error` are
/// consumed and dropped by the watch multiplexer before anything reaches the
/// merged channel (§4.1).
#[derive(Debug, Clone)]
pub enum RawWatchEvent<T> {
    Added(T),
    Modified(T),
    Deleted(T),
    Bookmark,
    Error(String),
}

/// Typed watch streams for the four primitive kinds (§6).
///
/// Each method returns a lazy, infinite stream; the watch multiplexer spawns
/// one task per kind to drain it.
pub trait WatchClient: Send + Sync + 'static {
    fn watch_containers(&self, cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Container>>;
    fn watch_executables(&self, cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Executable>>;
    fn watch_endpoints(&self, cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Endpoint>>;
    fn watch_services(&self, cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Service>>;
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    use super::*;
    use futures::StreamExt;
    use parking_lot::Mutex;
    use tokio::sync::mpsc;
    use tokio_stream::wrappers::UnboundedReceiverStream;

    struct Channel<T> {
        tx: mpsc::UnboundedSender<RawWatchEvent<T>>,
        rx: Mutex<Option<mpsc::UnboundedReceiver<RawWatchEvent<T>>>>,
    }

    impl<T> Channel<T> {
        fn new() -> Self {
            let (tx, rx) = mpsc::unbounded_channel();
            Self {
                tx,
                rx: Mutex::new(Some(rx)),
            }
        }

        fn send(&self, event: RawWatchEvent<T>) {
            // A closed receiver (stream already taken and dropped) is not an
            // error for a scripted test fixture; ignore.
            let _ = self.tx.send(event);
        }

        fn take_stream(&self) -> BoxStream<'static, RawWatchEvent<T>>
        where
            T: Send + 'static,
        {
            let rx = self
                .rx
                .lock()
                .take()
                .expect("watch_* called more than once on FakeWatchClient");
            UnboundedReceiverStream::new(rx).boxed()
        }
    }

    /// Scriptable [`WatchClient`] for tests: each `push_*` call enqueues one
    /// event that the corresponding `watch_*` stream will yield, in order.
    #[derive(Default)]
    pub struct FakeWatchClient {
        containers: Channel<Container>,
        executables: Channel<Executable>,
        endpoints: Channel<Endpoint>,
        services: Channel<Service>,
    }

    impl<T> Default for Channel<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl FakeWatchClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn push_container(&self, event: RawWatchEvent<Container>) {
            self.containers.send(event);
        }

        pub fn push_executable(&self, event: RawWatchEvent<Executable>) {
            self.executables.send(event);
        }

        pub fn push_endpoint(&self, event: RawWatchEvent<Endpoint>) {
            self.endpoints.send(event);
        }

        pub fn push_service(&self, event: RawWatchEvent<Service>) {
            self.services.send(event);
        }
    }

    impl WatchClient for FakeWatchClient {
        fn watch_containers(&self, _cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Container>> {
            self.containers.take_stream()
        }

        fn watch_executables(&self, _cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Executable>> {
            self.executables.take_stream()
        }

        fn watch_endpoints(&self, _cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Endpoint>> {
            self.endpoints.take_stream()
        }

        fn watch_services(&self, _cancel: CancellationToken) -> BoxStream<'static, RawWatchEvent<Service>> {
            self.services.take_stream()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeWatchClient;

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
