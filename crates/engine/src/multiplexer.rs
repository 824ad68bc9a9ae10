// SPDX-License-Identifier: MIT

//! Watch multiplexer (§4.1): one task per primitive kind, forwarding into
//! the merged channel.

use crate::message::WatchMessage;
use fv_adapters::{RawWatchEvent, WatchClient};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Spawn the four watcher tasks, returning their join handles.
///
/// Each task runs until cancelled or its stream ends; a stream error stops
/// only that kind's task (§4.1 "Failure").
pub fn spawn_watchers(
    client: Arc<dyn WatchClient>,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
) -> Vec<JoinHandle<()>> {
    vec![
        spawn_containers(client.clone(), tx.clone(), cancel.clone()),
        spawn_executables(client.clone(), tx.clone(), cancel.clone()),
        spawn_endpoints(client.clone(), tx.clone(), cancel.clone()),
        spawn_services(client, tx, cancel),
    ]
}

fn spawn_containers(
    client: Arc<dyn WatchClient>,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let span = tracing::info_span!("watch", kind = "container");
    tokio::spawn(
        async move {
            let mut stream = client.watch_containers(cancel.clone());
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("container watch cancelled");
                        break;
                    }
                    next = stream.next() => match next {
                        Some(RawWatchEvent::Added(obj)) => {
                            let _ = tx.send(WatchMessage::Container { event: fv_core::WatchEventType::Added, name: obj.name.clone(), object: Some(obj) });
                        }
                        Some(RawWatchEvent::Modified(obj)) => {
                            let _ = tx.send(WatchMessage::Container { event: fv_core::WatchEventType::Modified, name: obj.name.clone(), object: Some(obj) });
                        }
                        Some(RawWatchEvent::Deleted(obj)) => {
                            let _ = tx.send(WatchMessage::Container { event: fv_core::WatchEventType::Deleted, name: obj.name.clone(), object: Some(obj) });
                        }
                        Some(RawWatchEvent::Bookmark) => {}
                        Some(RawWatchEvent::Error(message)) => {
                            tracing::error!(message, "container watch stream error, stopping this kind's watcher");
                            break;
                        }
                        None => {
                            tracing::info!("container watch stream ended");
                            break;
                        }
                    }
                }
            }
        }
        .instrument(span),
    )
}

fn spawn_executables(
    client: Arc<dyn WatchClient>,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let span = tracing::info_span!("watch", kind = "executable");
    tokio::spawn(
        async move {
            let mut stream = client.watch_executables(cancel.clone());
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("executable watch cancelled");
                        break;
                    }
                    next = stream.next() => match next {
                        Some(RawWatchEvent::Added(obj)) => {
                            let _ = tx.send(WatchMessage::Executable { event: fv_core::WatchEventType::Added, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Modified(obj)) => {
                            let _ = tx.send(WatchMessage::Executable { event: fv_core::WatchEventType::Modified, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Deleted(obj)) => {
                            let _ = tx.send(WatchMessage::Executable { event: fv_core::WatchEventType::Deleted, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Bookmark) => {}
                        Some(RawWatchEvent::Error(message)) => {
                            tracing::error!(message, "executable watch stream error, stopping this kind's watcher");
                            break;
                        }
                        None => {
                            tracing::info!("executable watch stream ended");
                            break;
                        }
                    }
                }
            }
        }
        .instrument(span),
    )
}

fn spawn_endpoints(
    client: Arc<dyn WatchClient>,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let span = tracing::info_span!("watch", kind = "endpoint");
    tokio::spawn(
        async move {
            let mut stream = client.watch_endpoints(cancel.clone());
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("endpoint watch cancelled");
                        break;
                    }
                    next = stream.next() => match next {
                        Some(RawWatchEvent::Added(obj)) => {
                            let _ = tx.send(WatchMessage::Endpoint { event: fv_core::WatchEventType::Added, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Modified(obj)) => {
                            let _ = tx.send(WatchMessage::Endpoint { event: fv_core::WatchEventType::Modified, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Deleted(obj)) => {
                            let _ = tx.send(WatchMessage::Endpoint { event: fv_core::WatchEventType::Deleted, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Bookmark) => {}
                        Some(RawWatchEvent::Error(message)) => {
                            tracing::error!(message, "endpoint watch stream error, stopping this kind's watcher");
                            break;
                        }
                        None => {
                            tracing::info!("endpoint watch stream ended");
                            break;
                        }
                    }
                }
            }
        }
        .instrument(span),
    )
}

fn spawn_services(
    client: Arc<dyn WatchClient>,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let span = tracing::info_span!("watch", kind = "service");
    tokio::spawn(
        async move {
            let mut stream = client.watch_services(cancel.clone());
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::info!("service watch cancelled");
                        break;
                    }
                    next = stream.next() => match next {
                        Some(RawWatchEvent::Added(obj)) => {
                            let _ = tx.send(WatchMessage::Service { event: fv_core::WatchEventType::Added, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Modified(obj)) => {
                            let _ = tx.send(WatchMessage::Service { event: fv_core::WatchEventType::Modified, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Deleted(obj)) => {
                            let _ = tx.send(WatchMessage::Service { event: fv_core::WatchEventType::Deleted, name: obj.name.clone(), object: obj });
                        }
                        Some(RawWatchEvent::Bookmark) => {}
                        Some(RawWatchEvent::Error(message)) => {
                            tracing::error!(message, "service watch stream error, stopping this kind's watcher");
                            break;
                        }
                        None => {
                            tracing::info!("service watch stream ended");
                            break;
                        }
                    }
                }
            }
        }
        .instrument(span),
    )
}

#[cfg(test)]
#[path = "multiplexer_tests.rs"]
mod tests;
