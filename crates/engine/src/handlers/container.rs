// SPDX-License-Identifier: MIT

//! Handler: container (§4.2).

use super::HandlerContext;
use fv_core::{
    compute_endpoints, compute_expected_endpoints_count, parse_service_producer, project_environment,
    state_label, Change, ChangeType, Container, ContainerViewModel, Kind, LogSource, ResourceBase,
    RuntimeId, WatchEventType,
};
use fv_store::RawStore;

/// A request for the reconciler to spawn a one-shot enrichment task (§4.3).
/// Kept separate from the handler's return value so the handler itself stays
/// a pure function of the store and its inputs, easy to unit-test without a
/// process runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentRequest {
    pub runtime_id: RuntimeId,
    pub container_name: String,
}

#[derive(Debug, Default)]
pub struct ContainerOutcome {
    pub change: Option<Change<ContainerViewModel>>,
    pub enrichment: Option<EnrichmentRequest>,
}

pub fn handle(
    store: &mut RawStore,
    event: WatchEventType,
    name: &str,
    object: Option<Container>,
    ctx: &HandlerContext<'_>,
) -> ContainerOutcome {
    let object = match object {
        Some(o) => o,
        None => match store.containers.get(name) {
            Some(existing) => existing.clone(),
            None => {
                tracing::error!(container = name, "synthetic re-emit for unknown container, dropping");
                return ContainerOutcome::default();
            }
        },
    };

    let changed = match store.containers.apply(event, name, object.clone()) {
        Ok(changed) => changed,
        Err(err) => {
            tracing::error!(error = %crate::error::EngineError::from(err), container = name, "dropping malformed container event");
            return ContainerOutcome::default();
        }
    };
    if !changed {
        return ContainerOutcome::default();
    }

    if matches!(event, WatchEventType::Deleted) {
        store.associated_services.remove(Kind::Container, name);
        let view = build_view_model(store, &object, ctx);
        return ContainerOutcome {
            change: Some(Change::new(ChangeType::Deleted, view)),
            enrichment: None,
        };
    }

    let service_names = parse_service_producer(&object.annotations).unwrap_or_default();
    store
        .associated_services
        .set(Kind::Container, name, service_names);

    let mut enrichment = None;
    if let Some(runtime_id) = object.status.runtime_id.clone() {
        if store.enrichment.get(&runtime_id).is_none() && store.enrichment.mark_in_flight(&runtime_id) {
            tracing::info!(runtime_id = %runtime_id, container = name, "scheduling container enrichment");
            enrichment = Some(EnrichmentRequest {
                runtime_id,
                container_name: name.to_string(),
            });
        }
    }

    let change_type = match event {
        WatchEventType::Added => ChangeType::Added,
        WatchEventType::Modified => ChangeType::Modified,
        WatchEventType::Deleted => ChangeType::Deleted,
    };
    let view = build_view_model(store, &object, ctx);

    ContainerOutcome {
        change: Some(Change::new(change_type, view)),
        enrichment,
    }
}

pub(crate) fn build_view_model(store: &RawStore, object: &Container, ctx: &HandlerContext<'_>) -> ContainerViewModel {
    let services = store.services_by_name();
    let endpoint_refs = store.endpoint_refs();
    let declared_services = parse_service_producer(&object.annotations).unwrap_or_default();

    let endpoints = compute_endpoints(
        Kind::Container,
        &object.name,
        &endpoint_refs,
        &services,
        ctx.protocol,
        None,
        None,
    );
    let expected_endpoints_count =
        compute_expected_endpoints_count(&declared_services, &services, ctx.protocol);

    let env_source = object
        .status
        .runtime_id
        .as_ref()
        .and_then(|id| store.enrichment.get(id))
        .unwrap_or_else(|| object.env_spec.clone());
    let environment = project_environment(&env_source, &object.env_spec);

    ContainerViewModel {
        base: ResourceBase {
            name: object.name.clone(),
            uid: object.uid.clone(),
            namespaced_name: object.name.clone(),
            created_at: object.created_at,
            state: state_label(object.status.state),
            expected_endpoints_count,
            endpoints,
            environment,
            log_source: LogSource::Docker {
                runtime_id: object.status.runtime_id.as_ref().map(|r| r.as_str().to_string()),
            },
        },
        container_id: object.status.runtime_id.as_ref().map(|r| r.as_str().to_string()),
        image: object.image.clone(),
        ports: object.ports.clone(),
    }
}

#[cfg(test)]
#[path = "container_tests.rs"]
mod tests;
