// SPDX-License-Identifier: MIT

//! Handler: endpoint (§4.2). Re-emits the owning container/executable/project
//! whenever the endpoint table changes; owners that haven't arrived yet are
//! skipped silently (§8 boundary: "Endpoint arriving before its owner").

use super::{container, executable, HandlerContext, ReEmit};
use fv_core::{Change, ChangeType, Endpoint, Kind, WatchEventType};
use fv_store::RawStore;

#[derive(Debug, Default)]
pub struct EndpointOutcome {
    pub re_emits: Vec<ReEmit>,
}

pub fn handle(
    store: &mut RawStore,
    event: WatchEventType,
    name: &str,
    object: Endpoint,
    ctx: &HandlerContext<'_>,
) -> EndpointOutcome {
    let owners = object.owner_refs.clone();

    let changed = match store.endpoints.apply(event, name, object) {
        Ok(changed) => changed,
        Err(err) => {
            tracing::error!(error = %crate::error::EngineError::from(err), endpoint = name, "dropping malformed endpoint event");
            return EndpointOutcome::default();
        }
    };
    if !changed {
        return EndpointOutcome::default();
    }

    let mut re_emits = Vec::new();
    for owner in owners {
        match owner.kind {
            Kind::Container => {
                if let Some(existing) = store.containers.get(&owner.name).cloned() {
                    let vm = container::build_view_model(store, &existing, ctx);
                    re_emits.push(ReEmit::Container(Change::new(ChangeType::Modified, vm)));
                }
            }
            Kind::Executable => {
                if let Some(existing) = store.executables.get(&owner.name).cloned() {
                    let is_project = existing.is_project();
                    let outcome = executable::build_change(
                        is_project,
                        ChangeType::Modified,
                        &existing,
                        store,
                        ctx,
                    );
                    if let Some(re_emit) = outcome.as_re_emit() {
                        re_emits.push(re_emit);
                    }
                }
            }
            Kind::Endpoint | Kind::Service => {}
        }
    }

    EndpointOutcome { re_emits }
}

#[cfg(test)]
#[path = "endpoint_tests.rs"]
mod tests;
