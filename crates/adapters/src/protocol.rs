// SPDX-License-Identifier: MIT

//! Fake [`fv_core::ProtocolPredicate`] for tests (§3, §6).
//!
//! Production HTTP-scheme detection inspects orchestrator-specific endpoint
//! metadata (an external collaborator, out of scope, §1). Only the fake is
//! implemented here; it matches on [`fv_core::Service::name`].

use fv_core::{ProtocolPredicate, Service};
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Scriptable [`ProtocolPredicate`]: a service name on the `http` set
/// resolves to the `"http"` scheme, on the `https` set to `"https"`, and
/// everything else resolves to `None`.
#[derive(Clone, Default)]
pub struct FakeProtocolPredicate {
    http: Arc<Mutex<HashSet<String>>>,
    https: Arc<Mutex<HashSet<String>>>,
}

impl FakeProtocolPredicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_http(&self, service_name: impl Into<String>) {
        self.http.lock().insert(service_name.into());
    }

    pub fn mark_https(&self, service_name: impl Into<String>) {
        self.https.lock().insert(service_name.into());
    }
}

impl ProtocolPredicate for FakeProtocolPredicate {
    fn uses_http(&self, service: &Service) -> Option<String> {
        if self.https.lock().contains(&service.name) {
            Some("https".to_string())
        } else if self.http.lock().contains(&service.name) {
            Some("http".to_string())
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
