// SPDX-License-Identifier: MIT

//! Fan-out processor and the snapshot-plus-delta subscription protocol
//! (§3 invariant 5, §4.4).
//!
//! A single `parking_lot::Mutex`-guarded piece of state read and written directly by
//! multiple components, with no dedicated actor task. `apply()` (called only
//! from the reconciler) and `subscribe()` (called from any task requesting a
//! [`Monitor`]) take the same lock, so a subscriber's snapshot and its first
//! received delta can never race — the snapshot is always current as of the
//! instant the subscription was registered.

use crate::error::EngineError;
use fv_core::{Change, ChangeType, Keyed};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;

use futures::stream::BoxStream;

/// A subscription: an initial ordered snapshot plus an ordered stream of
/// subsequent changes (§4.4). The stream ends when the fan-out processor
/// drops this subscriber, which happens only after it overflows its buffer
/// (§7 "Fan-out subscriber overflow").
pub struct Monitor<V> {
    pub snapshot: Vec<V>,
    pub stream: BoxStream<'static, Change<V>>,
}

struct FanoutState<V> {
    current: indexmap::IndexMap<<V as Keyed>::Key, V>,
    subscribers: Vec<mpsc::Sender<Change<V>>>,
}

impl<V> Default for FanoutState<V>
where
    V: Keyed,
{
    fn default() -> Self {
        Self {
            current: indexmap::IndexMap::new(),
            subscribers: Vec::new(),
        }
    }
}

/// Maintains one kind's current-state map and broadcasts changes to every
/// live subscriber, dropping any subscriber whose buffer overflows
/// (§4.4 "Per-subscriber independence").
pub struct FanoutProcessor<V: Keyed> {
    inner: Arc<Mutex<FanoutState<V>>>,
    buffer: usize,
}

impl<V> Clone for FanoutProcessor<V>
where
    V: Keyed,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            buffer: self.buffer,
        }
    }
}

impl<V> FanoutProcessor<V>
where
    V: Keyed + Clone + Send + Sync + 'static,
    V::Key: Send,
{
    pub fn new(buffer: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FanoutState::default())),
            buffer,
        }
    }

    /// Apply a change: update the current-state map, then broadcast it to
    /// every subscriber, dropping (and thereby closing the stream of) any
    /// subscriber whose buffer is full (§7).
    pub fn apply(&self, change: Change<V>) {
        let mut state = self.inner.lock();

        match change.change_type {
            ChangeType::Added | ChangeType::Modified => {
                state.current.insert(change.value.key(), change.value.clone());
            }
            ChangeType::Deleted => {
                state.current.shift_remove(&change.value.key());
            }
            ChangeType::Other => {}
        }

        state.subscribers.retain(|sender| match sender.try_send(change.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Closed(_)) => false,
            Err(mpsc::error::TrySendError::Full(_)) => {
                tracing::warn!(error = %EngineError::SubscriberOverflow, "dropping subscriber");
                false
            }
        });
    }

    /// Register a new subscriber and return its snapshot plus stream,
    /// atomically with respect to concurrent [`Self::apply`] calls.
    pub fn subscribe(&self) -> Monitor<V> {
        let mut state = self.inner.lock();

        let snapshot: Vec<V> = state.current.values().cloned().collect();
        let (tx, rx) = mpsc::channel(self.buffer);
        state.subscribers.push(tx);

        Monitor {
            snapshot,
            stream: Box::pin(ReceiverStream::new(rx)),
        }
    }
}

#[cfg(test)]
#[path = "fanout_tests.rs"]
mod tests;
