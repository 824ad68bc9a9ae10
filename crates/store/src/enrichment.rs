// SPDX-License-Identifier: MIT

//! Enrichment cache and in-flight set (§3, §5).
//!
//! The only cross-task shared mutable state in the engine: enricher tasks
//! are the sole writers, the reconciler is the sole reader. A single
//! `parking_lot::Mutex` is sufficient (§5 "Shared-resource policy") — the
//! teacher's idiom for every piece of cross-task shared state in this
//! codebase.

use fv_core::{EnvVar, RuntimeId};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    cache: HashMap<RuntimeId, Vec<EnvVar>>,
    in_flight: HashSet<RuntimeId>,
}

/// Concurrent cache of runtime-reported environment variables, keyed by
/// container runtime id, plus the set of runtime ids an enrichment task has
/// already been scheduled for.
#[derive(Debug, Clone, Default)]
pub struct EnrichmentCache {
    inner: Arc<Mutex<Inner>>,
}

impl EnrichmentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment variables harvested for `runtime_id`, if enrichment has
    /// completed successfully.
    pub fn get(&self, runtime_id: &RuntimeId) -> Option<Vec<EnvVar>> {
        self.inner.lock().cache.get(runtime_id).cloned()
    }

    /// Record the enrichment result for `runtime_id`.
    pub fn insert(&self, runtime_id: RuntimeId, env: Vec<EnvVar>) {
        self.inner.lock().cache.insert(runtime_id, env);
    }

    /// Mark `runtime_id` as having an enrichment task scheduled (or
    /// completed). Never unmarked — enrichment is one-shot per runtime id
    /// (§3 invariant 3, §9 open question 2: failures are not retried).
    ///
    /// Returns `true` if this call performed the marking (i.e. the caller
    /// should schedule the task); `false` if it was already marked.
    pub fn mark_in_flight(&self, runtime_id: &RuntimeId) -> bool {
        self.inner.lock().in_flight.insert(runtime_id.clone())
    }

    pub fn is_in_flight(&self, runtime_id: &RuntimeId) -> bool {
        self.inner.lock().in_flight.contains(runtime_id)
    }
}

#[cfg(test)]
#[path = "enrichment_tests.rs"]
mod tests;
