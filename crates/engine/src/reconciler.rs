// SPDX-License-Identifier: MIT

//! The reconciler (§4.1 step 2, §4.2): the sole writer of the raw store,
//! consuming the merged watch channel serially and driving the per-kind
//! handlers and fan-out processors.
//!
//! A single task owns all mutable state and processes one event at a time,
//! so handler logic never has to reason about concurrent mutation.

use crate::config::EngineConfig;
use crate::fanout::FanoutProcessor;
use crate::handlers::{self, HandlerContext, ReEmit};
use crate::message::WatchMessage;
use crate::{enricher, AppModelHandle, ProcessRunnerHandle, ProtocolHandle};
use fv_core::{Change, ContainerViewModel, ExecutableViewModel, ProjectViewModel, ResourceView};
use fv_store::RawStore;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// The four fan-out processors a reconciler drives (§3 invariant 5).
#[derive(Clone)]
pub struct Fanouts {
    pub containers: FanoutProcessor<ContainerViewModel>,
    pub executables: FanoutProcessor<ExecutableViewModel>,
    pub projects: FanoutProcessor<ProjectViewModel>,
    pub aggregate: FanoutProcessor<ResourceView>,
}

impl Fanouts {
    pub fn new(buffer: usize) -> Self {
        Self {
            containers: FanoutProcessor::new(buffer),
            executables: FanoutProcessor::new(buffer),
            projects: FanoutProcessor::new(buffer),
            aggregate: FanoutProcessor::new(buffer),
        }
    }

    fn apply_re_emit(&self, re_emit: ReEmit) {
        self.aggregate.apply(re_emit.as_resource_view_change());
        match re_emit {
            ReEmit::Container(change) => self.containers.apply(change),
            ReEmit::Executable(change) => self.executables.apply(change),
            ReEmit::Project(change) => self.projects.apply(change),
        }
    }
}

pub struct Reconciler {
    store: RawStore,
    protocol: ProtocolHandle,
    app_model: AppModelHandle,
    process_runner: ProcessRunnerHandle,
    fanouts: Fanouts,
    config: EngineConfig,
    cancel: CancellationToken,
    self_tx: mpsc::UnboundedSender<WatchMessage>,
    enrichment_tasks: Vec<JoinHandle<()>>,
}

impl Reconciler {
    pub fn new(
        protocol: ProtocolHandle,
        app_model: AppModelHandle,
        process_runner: ProcessRunnerHandle,
        fanouts: Fanouts,
        config: EngineConfig,
        cancel: CancellationToken,
        self_tx: mpsc::UnboundedSender<WatchMessage>,
    ) -> Self {
        Self {
            store: RawStore::new(),
            protocol,
            app_model,
            process_runner,
            fanouts,
            config,
            cancel,
            self_tx,
            enrichment_tasks: Vec::new(),
        }
    }

    /// Drain `rx` until cancelled or the merged channel closes, dispatching
    /// every message to its handler. Returns the enrichment tasks it
    /// spawned, so the caller can join them on shutdown (§9 open question 4).
    pub async fn run(mut self, mut rx: mpsc::UnboundedReceiver<WatchMessage>) -> Vec<JoinHandle<()>> {
        loop {
            tokio::select! {
                _ = self.cancel.cancelled() => {
                    tracing::info!("reconciler cancelled");
                    break;
                }
                message = rx.recv() => match message {
                    Some(message) => self.dispatch(message),
                    None => {
                        tracing::info!("merged watch channel closed, reconciler stopping");
                        break;
                    }
                }
            }
        }
        self.enrichment_tasks
    }

    fn ctx(&self) -> HandlerContext<'_> {
        HandlerContext {
            protocol: self.protocol.as_ref(),
            app_model: self.app_model.as_ref(),
        }
    }

    fn dispatch(&mut self, message: WatchMessage) {
        match message {
            WatchMessage::Container { event, name, object } => {
                let ctx = self.ctx();
                let outcome = handlers::container::handle(&mut self.store, event, &name, object, &ctx);
                if let Some(change) = outcome.change {
                    self.fanouts
                        .aggregate
                        .apply(Change::new(change.change_type, ResourceView::from(change.value.clone())));
                    self.fanouts.containers.apply(change);
                }
                if let Some(request) = outcome.enrichment {
                    let handle = enricher::spawn(
                        request,
                        self.process_runner.clone(),
                        self.store.enrichment.clone(),
                        self.self_tx.clone(),
                        self.cancel.clone(),
                        self.config.enrichment_timeout,
                    );
                    self.enrichment_tasks.push(handle);
                }
            }
            WatchMessage::Executable { event, name, object } => {
                let ctx = self.ctx();
                let outcome = handlers::executable::handle(&mut self.store, event, &name, object, &ctx);
                if let Some(re_emit) = outcome.as_re_emit() {
                    self.fanouts.apply_re_emit(re_emit);
                }
            }
            WatchMessage::Endpoint { event, name, object } => {
                let ctx = self.ctx();
                let outcome = handlers::endpoint::handle(&mut self.store, event, &name, object, &ctx);
                for re_emit in outcome.re_emits {
                    self.fanouts.apply_re_emit(re_emit);
                }
            }
            WatchMessage::Service { event, name, object } => {
                let ctx = self.ctx();
                let outcome = handlers::service::handle(&mut self.store, event, &name, object, &ctx);
                for re_emit in outcome.re_emits {
                    self.fanouts.apply_re_emit(re_emit);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "reconciler_tests.rs"]
mod tests;
