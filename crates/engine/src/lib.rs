// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-engine: the reconciliation engine — watch multiplexer, per-kind
//! handlers, one-shot enrichment tasks, fan-out processors, and the
//! [`ViewModelService`] facade that wires them together (§4, §6).

pub mod config;
pub mod enricher;
pub mod error;
pub mod fanout;
pub mod handlers;
pub mod message;
pub mod multiplexer;
pub mod reconciler;
pub mod service;

use fv_adapters::ProcessRunner;
use fv_core::{ApplicationModel, ProtocolPredicate};
use std::sync::Arc;

/// Shared-ownership handle to the protocol predicate collaborator (§6).
pub type ProtocolHandle = Arc<dyn ProtocolPredicate>;
/// Shared-ownership handle to the application-model collaborator (§6).
pub type AppModelHandle = Arc<dyn ApplicationModel>;
/// Shared-ownership handle to the process runner collaborator (§6).
pub type ProcessRunnerHandle = Arc<dyn ProcessRunner>;

pub use config::EngineConfig;
pub use error::EngineError;
pub use fanout::Monitor;
pub use service::ViewModelService;
