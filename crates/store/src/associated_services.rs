// SPDX-License-Identifier: MIT

//! `(kind, resource-name) → [service_name]` reverse index (§3).
//!
//! Populated from the `ServiceProducer` annotation on each container or
//! executable; used to re-emit owners when a service they declare changes
//! (§4.2 "Handler: service").

use fv_core::Kind;
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct AssociatedServicesIndex {
    entries: IndexMap<(Kind, String), Vec<String>>,
}

impl AssociatedServicesIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the declared service names for `(kind, name)`.
    pub fn set(&mut self, kind: Kind, name: &str, service_names: Vec<String>) {
        self.entries.insert((kind, name.to_string()), service_names);
    }

    /// Remove the row for `(kind, name)`. Called when the owning primitive
    /// is deleted (§8 boundary: "Deletion of a primitive drops its row").
    pub fn remove(&mut self, kind: Kind, name: &str) {
        self.entries.shift_remove(&(kind, name.to_string()));
    }

    /// Every `(kind, owner-name)` whose declared service list contains
    /// `service_name`, in insertion order (§4.2 "Handler: service").
    pub fn owners_of(&self, service_name: &str) -> Vec<(Kind, String)> {
        self.entries
            .iter()
            .filter(|(_, services)| services.iter().any(|s| s == service_name))
            .map(|(key, _)| key.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "associated_services_tests.rs"]
mod tests;
