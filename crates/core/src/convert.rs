// SPDX-License-Identifier: MIT

//! Pure functions projecting primitive + joined state to view models (§4.2).
//!
//! Every function here is a pure function of its arguments: given the same
//! snapshot of raw-store state it always produces the same view model,
//! satisfying §8 property 3.

use crate::primitive::{EnvVar, Kind, RuntimeState};
use crate::traits::{ApplicationModel, ProtocolPredicate};
use crate::view_model::EnvironmentVariableViewModel;
use std::collections::HashMap;

/// Render a resource's coarse runtime state for display (§3 `ResourceViewModel.state`).
/// `None` (status not yet reported) renders the same as `Unknown`.
pub fn state_label(state: Option<RuntimeState>) -> String {
    match state.unwrap_or(RuntimeState::Unknown) {
        RuntimeState::Starting => "starting",
        RuntimeState::Running => "running",
        RuntimeState::Exited => "exited",
        RuntimeState::FailedToStart => "failed_to_start",
        RuntimeState::Unknown => "unknown",
    }
    .to_string()
}

/// Build the `endpoints` list for a resource (§4.2 "Endpoint construction").
///
/// `services` is keyed by service name. For a project, pass `project_path` and
/// an `app_model` to append `/{launch_url}` where the application model
/// resolves one.
pub fn compute_endpoints(
    owner_kind: Kind,
    owner_name: &str,
    endpoints: &[&crate::primitive::Endpoint],
    services: &HashMap<&str, &crate::primitive::Service>,
    protocol: &dyn ProtocolPredicate,
    project_path: Option<&str>,
    app_model: Option<&dyn ApplicationModel>,
) -> Vec<String> {
    let mut out = Vec::new();
    for ep in endpoints {
        let owned_by_resource = ep
            .owner_refs
            .iter()
            .any(|o| o.kind == owner_kind && o.name == owner_name);
        if !owned_by_resource {
            continue;
        }
        let Some(service) = services.get(ep.spec.service_name.as_str()) else {
            continue;
        };
        let Some(scheme) = protocol.uses_http(service) else {
            continue;
        };
        let mut url = format!("{scheme}://{}:{}", ep.spec.address, ep.spec.port);
        if let (Some(path), Some(model)) = (project_path, app_model) {
            if let Some(launch_url) = model
                .try_get_project_with_path(path)
                .and_then(|p| p.effective_launch_profile().cloned())
                .and_then(|profile| profile.launch_url)
            {
                url = format!("{url}/{launch_url}");
            }
        }
        out.push(url);
    }
    out
}

/// Compute `expected_endpoints_count` from a resource's declared producer
/// service names (§4.2 "Expected endpoints count"). Returns `None` ("unknown")
/// if any declared service is missing from the current service table.
pub fn compute_expected_endpoints_count(
    declared_service_names: &[String],
    services: &HashMap<&str, &crate::primitive::Service>,
    protocol: &dyn ProtocolPredicate,
) -> Option<usize> {
    let mut count = 0usize;
    for name in declared_service_names {
        let service = services.get(name.as_str())?;
        if protocol.uses_http(service).is_some() {
            count += 1;
        }
    }
    Some(count)
}

/// Project a raw environment source list into view models, sorted ascending
/// by name (§4.2 "Environment projection").
///
/// `from_spec` is true iff the entry's name appears (by exact match) in
/// `spec_source`. Callers implementing the container enrichment-cache-absent
/// path per §9 open question 3 pass the same slice for both arguments,
/// which makes every entry trivially `from_spec = true` — preserved as-is.
pub fn project_environment(
    source: &[EnvVar],
    spec_source: &[EnvVar],
) -> Vec<EnvironmentVariableViewModel> {
    let mut out: Vec<_> = source
        .iter()
        .filter(|e| !e.name.is_empty())
        .map(|e| {
            let from_spec = spec_source.iter().any(|s| s.name == e.name);
            EnvironmentVariableViewModel {
                name: e.name.clone(),
                value: e.value.clone(),
                from_spec,
            }
        })
        .collect();
    out.sort_by(|a, b| a.name.cmp(&b.name));
    out
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
