// SPDX-License-Identifier: MIT

//! The raw store (§3, §4.1): four keyed snapshot tables plus the
//! associated-services index and enrichment cache.
//!
//! Owned exclusively by the reconciler (§3 invariant 1, §5 "Shared-resource
//! policy"); the only thread-safe piece is [`EnrichmentCache`], which is
//! shared with enricher tasks.

use crate::associated_services::AssociatedServicesIndex;
use crate::enrichment::EnrichmentCache;
use crate::error::StoreError;
use crate::table::Table;
use fv_core::{Container, Endpoint, Executable, Service};
use std::collections::HashMap;

#[derive(Debug)]
pub struct RawStore {
    pub containers: Table<Container>,
    pub executables: Table<Executable>,
    pub endpoints: Table<Endpoint>,
    pub services: Table<Service>,
    pub associated_services: AssociatedServicesIndex,
    pub enrichment: EnrichmentCache,
}

impl Default for RawStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RawStore {
    pub fn new() -> Self {
        Self {
            containers: Table::new("Container"),
            executables: Table::new("Executable"),
            endpoints: Table::new("Endpoint"),
            services: Table::new("Service"),
            associated_services: AssociatedServicesIndex::new(),
            enrichment: EnrichmentCache::new(),
        }
    }

    /// The current service table, keyed by name, suitable for
    /// `fv_core::convert` functions that expect a lookup map (§4.2).
    pub fn services_by_name(&self) -> HashMap<&str, &Service> {
        self.services
            .values()
            .map(|s| (s.name.as_str(), s))
            .collect()
    }

    /// All current endpoints, as references (for `compute_endpoints`).
    pub fn endpoint_refs(&self) -> Vec<&Endpoint> {
        self.endpoints.values().collect()
    }
}

#[cfg(test)]
#[path = "raw_store_tests.rs"]
mod tests;

// Re-exported so callers don't need to depend on `fv_core::WatchEventType`
// separately just to call `Table::apply`.
pub use fv_core::WatchEventType;

pub type ApplyResult = Result<bool, StoreError>;
