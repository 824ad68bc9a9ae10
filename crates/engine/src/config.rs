// SPDX-License-Identifier: MIT

//! Engine tunables (§12). Passed explicitly to [`crate::service::ViewModelService::new`];
//! the engine is an embedded library and never reads environment variables
//! or config files itself.

use std::time::Duration;

/// Tunables for a [`crate::service::ViewModelService`] instance.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// How long the enricher waits for `docker container inspect` before
    /// giving up (§4.3).
    pub enrichment_timeout: Duration,
    /// Per-subscriber buffer capacity. When a subscriber falls this far
    /// behind the fan-out processor drops it rather than blocking other
    /// subscribers or the reconciler (§4.4 "Per-subscriber independence").
    pub subscriber_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enrichment_timeout: Duration::from_secs(30),
            subscriber_buffer: 256,
        }
    }
}
