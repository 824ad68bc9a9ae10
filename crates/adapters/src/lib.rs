// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Adapters for external I/O: the orchestrator watch client, the docker
//! subprocess runner, and fakes for both plus the application-model and
//! protocol-predicate collaborators (§6).

pub mod process;
pub mod watch;

#[cfg(any(test, feature = "test-support"))]
pub mod application_model;
#[cfg(any(test, feature = "test-support"))]
pub mod protocol;

pub use process::{docker_inspect_env_spec, ProcessError, ProcessOutcome, ProcessRunner, ProcessSpec, TokioProcessRunner};
pub use watch::{RawWatchEvent, WatchClient};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use application_model::FakeApplicationModel;
#[cfg(any(test, feature = "test-support"))]
pub use process::{FakeProcessRunner, ScriptedOutcome};
#[cfg(any(test, feature = "test-support"))]
pub use protocol::FakeProtocolPredicate;
#[cfg(any(test, feature = "test-support"))]
pub use watch::FakeWatchClient;
