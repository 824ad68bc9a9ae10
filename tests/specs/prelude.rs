// SPDX-License-Identifier: MIT

//! Test helpers for the end-to-end reconciliation scenarios (§8).

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use fv_engine::Monitor;
use std::time::Duration;
use tokio_stream::StreamExt;

/// Give the watcher and reconciler tasks a chance to drain whatever has
/// already been pushed onto a `FakeWatchClient` before we inspect state.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Collect every change already buffered on `monitor.stream`, without
/// blocking past a short quiet window. Cross-kind event ordering through
/// four independent watcher tasks isn't guaranteed, so scenarios assert on
/// the *last* collected change rather than a fixed position.
pub async fn drain<V>(monitor: &mut Monitor<V>) -> Vec<fv_core::Change<V>> {
    let mut changes = Vec::new();
    loop {
        match tokio::time::timeout(Duration::from_millis(200), monitor.stream.next()).await {
            Ok(Some(change)) => changes.push(change),
            _ => break,
        }
    }
    changes
}
