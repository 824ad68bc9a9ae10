// SPDX-License-Identifier: MIT

//! The `ViewModelService` facade (§6): wires the watch multiplexer, the
//! reconciler, and the fan-out processors into a single embeddable handle.
//!
//! A struct that owns its background tasks' join handles and exposes a
//! small, explicit outbound API, constructed once with its collaborators
//! injected.

use crate::config::EngineConfig;
use crate::fanout::Monitor;
use crate::message::WatchMessage;
use crate::reconciler::{Fanouts, Reconciler};
use crate::{multiplexer, AppModelHandle, ProcessRunnerHandle, ProtocolHandle};
use fv_adapters::WatchClient;
use fv_core::{ContainerViewModel, ExecutableViewModel, ProjectViewModel, ResourceView};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// The reconciliation engine's outbound facade (§6). Construct once per
/// watched orchestrator connection; call `dispose()` to tear it down.
pub struct ViewModelService {
    application_name: String,
    fanouts: Fanouts,
    watcher_handles: Vec<JoinHandle<()>>,
    reconciler_handle: JoinHandle<Vec<JoinHandle<()>>>,
    cancel: CancellationToken,
}

impl ViewModelService {
    /// Start watching `client` and reconciling into view models.
    ///
    /// `raw_application_name` is the host-supplied name (§6 "Host
    /// environment"); [`Self::application_name`] strips its trailing
    /// case-insensitive `.AppHost` suffix.
    pub fn new(
        client: Arc<dyn WatchClient>,
        protocol: ProtocolHandle,
        app_model: AppModelHandle,
        process_runner: ProcessRunnerHandle,
        raw_application_name: impl Into<String>,
        config: EngineConfig,
    ) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = mpsc::unbounded_channel::<WatchMessage>();

        let watcher_handles = multiplexer::spawn_watchers(client, tx.clone(), cancel.clone());

        let fanouts = Fanouts::new(config.subscriber_buffer);
        let reconciler = Reconciler::new(
            protocol,
            app_model,
            process_runner,
            fanouts.clone(),
            config,
            cancel.clone(),
            tx,
        );
        let reconciler_handle = tokio::spawn(reconciler.run(rx));

        Self {
            application_name: strip_apphost_suffix(raw_application_name.into()),
            fanouts,
            watcher_handles,
            reconciler_handle,
            cancel,
        }
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn get_containers(&self) -> Monitor<ContainerViewModel> {
        self.fanouts.containers.subscribe()
    }

    pub fn get_executables(&self) -> Monitor<ExecutableViewModel> {
        self.fanouts.executables.subscribe()
    }

    pub fn get_projects(&self) -> Monitor<ProjectViewModel> {
        self.fanouts.projects.subscribe()
    }

    pub fn get_resources(&self) -> Monitor<ResourceView> {
        self.fanouts.aggregate.subscribe()
    }

    /// Cancel every background task and join all of them (§9 open question
    /// 4: joins are mandatory here, not best-effort).
    pub async fn dispose(self) {
        self.cancel.cancel();

        for handle in self.watcher_handles {
            let _ = handle.await;
        }

        match self.reconciler_handle.await {
            Ok(enrichment_tasks) => {
                for handle in enrichment_tasks {
                    let _ = handle.await;
                }
            }
            Err(err) => tracing::error!(error = %err, "reconciler task panicked during shutdown"),
        }
    }
}

fn strip_apphost_suffix(name: String) -> String {
    const SUFFIX: &str = ".AppHost";
    if name.len() >= SUFFIX.len() && name[name.len() - SUFFIX.len()..].eq_ignore_ascii_case(SUFFIX) {
        name[..name.len() - SUFFIX.len()].to_string()
    } else {
        name
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
