// SPDX-License-Identifier: MIT

//! The merged channel's message type (§4.1, §4.2 step 1).
//!
//! One variant per primitive kind. `Container`'s `object` is `None` only for
//! the enricher's synthetic re-emit (§9: the single allowed null source) —
//! the reconciler substitutes the current table entry in that case.

use fv_core::{Container, Endpoint, Executable, Service, WatchEventType};

#[derive(Debug, Clone)]
pub enum WatchMessage {
    Container {
        event: WatchEventType,
        name: String,
        object: Option<Container>,
    },
    Executable {
        event: WatchEventType,
        name: String,
        object: Executable,
    },
    Endpoint {
        event: WatchEventType,
        name: String,
        object: Endpoint,
    },
    Service {
        event: WatchEventType,
        name: String,
        object: Service,
    },
}

impl WatchMessage {
    /// Build the enricher's synthetic container re-emit message (§4.3).
    pub fn container_re_emit(name: impl Into<String>) -> Self {
        WatchMessage::Container {
            event: WatchEventType::Modified,
            name: name.into(),
            object: None,
        }
    }
}
