// SPDX-License-Identifier: MIT

//! Process runner interface (§6 "Inbound") and the docker-inspect enrichment
//! call built on top of it (§4.3).
//!
//! Generalized from a fixed set of named timeouts into a parameter on
//! [`ProcessSpec`].

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{description} failed to spawn: {source}")]
    Spawn {
        description: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{description} timed out after {timeout_secs}s")]
    Timeout {
        description: String,
        timeout_secs: u64,
    },
    #[error("{description} exited with status {code}")]
    NonZeroExit { description: String, code: i32 },
}

#[derive(Debug, Clone)]
pub struct ProcessSpec {
    pub exe: String,
    pub argv: Vec<String>,
    pub timeout: Duration,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs a subprocess to completion, subject to a timeout (§6).
#[async_trait]
pub trait ProcessRunner: Send + Sync + 'static {
    async fn run(&self, spec: ProcessSpec) -> Result<ProcessOutcome, ProcessError>;
}

/// Production runner backed by `tokio::process::Command`.
///
/// Every exit path (success, non-zero exit surfaced as `Ok` for the caller to
/// inspect, spawn failure, or timeout) releases the child process: timeout
/// cancellation drops the in-flight `Child` future, which kills the process
/// on drop, matching §4.3's "subprocess resources are released on every exit
/// path".
#[derive(Debug, Clone, Default)]
pub struct TokioProcessRunner;

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, spec: ProcessSpec) -> Result<ProcessOutcome, ProcessError> {
        let mut cmd = Command::new(&spec.exe);
        cmd.args(&spec.argv);
        cmd.kill_on_drop(true);

        let output = match timeout(spec.timeout, cmd.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(source)) => {
                return Err(ProcessError::Spawn {
                    description: spec.description,
                    source,
                })
            }
            Err(_elapsed) => {
                return Err(ProcessError::Timeout {
                    description: spec.description,
                    timeout_secs: spec.timeout.as_secs(),
                })
            }
        };

        Ok(ProcessOutcome {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

/// Build the argument vector for the docker-inspect enrichment call (§4.3,
/// §6 "Subprocess contract"). The CLI string is the observable contract.
pub fn docker_inspect_env_spec(runtime_id: &str, timeout: Duration) -> ProcessSpec {
    ProcessSpec {
        exe: "docker".to_string(),
        argv: vec![
            "container".to_string(),
            "inspect".to_string(),
            "--format={{json .Config.Env}}".to_string(),
            runtime_id.to_string(),
        ],
        timeout,
        description: format!("docker container inspect {runtime_id}"),
    }
}

#[cfg(any(test, feature = "test-support"))]
pub mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    pub enum ScriptedOutcome {
        Ok(ProcessOutcome),
        Timeout,
        SpawnFailure,
    }

    /// Fake runner that answers by the runtime id embedded in the last argv
    /// element (matching [`docker_inspect_env_spec`]'s shape), so tests can
    /// script per-container results without depending on call order.
    #[derive(Clone, Default)]
    pub struct FakeProcessRunner {
        inner: Arc<Mutex<FakeState>>,
    }

    #[derive(Default)]
    struct FakeState {
        scripted: HashMap<String, ScriptedOutcome>,
        calls: Vec<ProcessSpec>,
    }

    impl FakeProcessRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn script_json_env(&self, runtime_id: &str, env_pairs: &[&str]) {
            let json = serde_json::to_string(env_pairs).expect("serialize scripted env");
            self.inner.lock().scripted.insert(
                runtime_id.to_string(),
                ScriptedOutcome::Ok(ProcessOutcome {
                    exit_code: 0,
                    stdout: json.into_bytes(),
                    stderr: Vec::new(),
                }),
            );
        }

        pub fn script_outcome(&self, runtime_id: &str, outcome: ScriptedOutcome) {
            self.inner
                .lock()
                .scripted
                .insert(runtime_id.to_string(), outcome);
        }

        pub fn calls(&self) -> Vec<ProcessSpec> {
            self.inner.lock().calls.clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeProcessRunner {
        async fn run(&self, spec: ProcessSpec) -> Result<ProcessOutcome, ProcessError> {
            let runtime_id = spec.argv.last().cloned().unwrap_or_default();
            let scripted = {
                let mut guard = self.inner.lock();
                guard.calls.push(spec.clone());
                guard.scripted.get(&runtime_id).cloned()
            };
            match scripted {
                Some(ScriptedOutcome::Ok(outcome)) => Ok(outcome),
                Some(ScriptedOutcome::Timeout) => Err(ProcessError::Timeout {
                    description: spec.description,
                    timeout_secs: spec.timeout.as_secs(),
                }),
                Some(ScriptedOutcome::SpawnFailure) => Err(ProcessError::Spawn {
                    description: spec.description,
                    source: std::io::Error::other("docker not found"),
                }),
                None => Ok(ProcessOutcome {
                    exit_code: 1,
                    stdout: Vec::new(),
                    stderr: b"no script for runtime id".to_vec(),
                }),
            }
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProcessRunner, ScriptedOutcome};

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
