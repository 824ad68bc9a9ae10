// SPDX-License-Identifier: MIT

//! One-shot container enrichment tasks (§4.3).
//!
//! Each task resolves a single `ContainerOutcome::enrichment` request: it
//! shells out to `docker container inspect`, and on success stores the
//! harvested environment in the shared [`EnrichmentCache`] and asks the
//! reconciler to re-emit the container. Failures (non-zero exit, timeout,
//! spawn failure) are logged and dropped — enrichment is never retried (§9
//! open question 2), so a failed container simply keeps its orchestrator-
//! declared environment forever.

use crate::handlers::container::EnrichmentRequest;
use crate::message::WatchMessage;
use fv_adapters::{docker_inspect_env_spec, ProcessRunner};
use fv_core::EnvVar;
use fv_store::EnrichmentCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Spawn the enrichment task for `request`, returning its handle so the
/// reconciler can track it for the mandatory join on shutdown (§9 open
/// question 4).
pub fn spawn(
    request: EnrichmentRequest,
    process_runner: Arc<dyn ProcessRunner>,
    cache: EnrichmentCache,
    tx: mpsc::UnboundedSender<WatchMessage>,
    cancel: CancellationToken,
    timeout: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        if cancel.is_cancelled() {
            tracing::debug!(runtime_id = %request.runtime_id, "enrichment cancelled before it started");
            return;
        }

        let spec = docker_inspect_env_spec(request.runtime_id.as_str(), timeout);
        let outcome = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!(
                    runtime_id = %request.runtime_id,
                    "enrichment cancelled before completion"
                );
                return;
            }
            result = process_runner.run(spec) => result,
        };

        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    runtime_id = %request.runtime_id,
                    container = request.container_name,
                    error = %err,
                    "container enrichment failed"
                );
                return;
            }
        };

        if !outcome.success() {
            tracing::error!(
                runtime_id = %request.runtime_id,
                container = request.container_name,
                exit_code = outcome.exit_code,
                stderr = %String::from_utf8_lossy(&outcome.stderr),
                "docker inspect exited non-zero, leaving environment unenriched"
            );
            return;
        }

        let env = match parse_env_json(&outcome.stdout) {
            Ok(env) => env,
            Err(err) => {
                tracing::error!(
                    runtime_id = %request.runtime_id,
                    container = request.container_name,
                    error = %err,
                    "docker inspect produced unparseable output"
                );
                return;
            }
        };

        cache.insert(request.runtime_id.clone(), env);

        if tx.send(WatchMessage::container_re_emit(request.container_name.clone())).is_err() {
            tracing::debug!(
                container = request.container_name,
                "reconciler channel closed before enrichment result could be delivered"
            );
        }
    })
}

/// Parse `docker container inspect --format={{json .Config.Env}}`'s stdout:
/// a JSON array of `"KEY=VALUE"` (or bare `"KEY"`) strings (§4.3, §6).
fn parse_env_json(stdout: &[u8]) -> Result<Vec<EnvVar>, serde_json::Error> {
    let entries: Vec<String> = serde_json::from_slice(stdout)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry.split_once('=') {
            Some((name, value)) => EnvVar::new(name.to_string(), Some(value.to_string())),
            None => EnvVar::new(entry, None),
        })
        .collect())
}

#[cfg(test)]
#[path = "enricher_tests.rs"]
mod tests;
