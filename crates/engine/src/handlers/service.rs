// SPDX-License-Identifier: MIT

//! Handler: service (§4.2). Re-emits every owner that declares the changed
//! service via its `ServiceProducer` annotation, looked up through the
//! associated-services index rather than a forward reference.

use super::{container, executable, HandlerContext, ReEmit};
use fv_core::{Change, ChangeType, Kind, Service, WatchEventType};
use fv_store::RawStore;

#[derive(Debug, Default)]
pub struct ServiceOutcome {
    pub re_emits: Vec<ReEmit>,
}

pub fn handle(
    store: &mut RawStore,
    event: WatchEventType,
    name: &str,
    object: Service,
    ctx: &HandlerContext<'_>,
) -> ServiceOutcome {
    let uses_http = ctx.protocol.uses_http(&object).is_some();

    let changed = match store.services.apply(event, name, object) {
        Ok(changed) => changed,
        Err(err) => {
            tracing::error!(error = %crate::error::EngineError::from(err), service = name, "dropping malformed service event");
            return ServiceOutcome::default();
        }
    };
    if !changed {
        return ServiceOutcome::default();
    }
    if !uses_http {
        return ServiceOutcome::default();
    }

    let owners = store.associated_services.owners_of(name);
    let mut re_emits = Vec::new();
    for (kind, owner_name) in owners {
        match kind {
            Kind::Container => {
                if let Some(existing) = store.containers.get(&owner_name).cloned() {
                    let vm = container::build_view_model(store, &existing, ctx);
                    re_emits.push(ReEmit::Container(Change::new(ChangeType::Modified, vm)));
                }
            }
            Kind::Executable => {
                if let Some(existing) = store.executables.get(&owner_name).cloned() {
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

    ServiceOutcome { re_emits }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
