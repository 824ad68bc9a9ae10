// SPDX-License-Identifier: MIT

//! Handlers: executable and project (§4.2). A project is an executable
//! carrying the project-classification annotation; both share the same
//! join logic and differ only in which view-model variant they emit.

use super::{HandlerContext, ReEmit};
use fv_core::{
    compute_endpoints, compute_expected_endpoints_count, parse_service_producer, project_environment,
    state_label, Change, ChangeType, Executable, ExecutableViewModel, Kind, LogSource, ProjectViewModel,
    ResourceBase, WatchEventType,
};
use fv_store::RawStore;

#[derive(Debug)]
pub enum ExecutableOutcome {
    Executable(Option<Change<ExecutableViewModel>>),
    Project(Option<Change<ProjectViewModel>>),
}

impl ExecutableOutcome {
    /// Re-expressed as a [`ReEmit`], tagging which per-kind stream it
    /// belongs to (§4.4).
    pub fn as_re_emit(&self) -> Option<ReEmit> {
        match self {
            ExecutableOutcome::Executable(Some(c)) => Some(ReEmit::Executable(c.clone())),
            ExecutableOutcome::Project(Some(c)) => Some(ReEmit::Project(c.clone())),
            _ => None,
        }
    }
}

pub fn handle(
    store: &mut RawStore,
    event: WatchEventType,
    name: &str,
    object: Executable,
    ctx: &HandlerContext<'_>,
) -> ExecutableOutcome {
    let is_project = object.is_project();

    let changed = match store.executables.apply(event, name, object.clone()) {
        Ok(changed) => changed,
        Err(err) => {
            tracing::error!(error = %crate::error::EngineError::from(err), executable = name, "dropping malformed executable event");
            return empty(is_project);
        }
    };
    if !changed {
        return empty(is_project);
    }

    if matches!(event, WatchEventType::Deleted) {
        store.associated_services.remove(Kind::Executable, name);
        return build_change(is_project, ChangeType::Deleted, &object, store, ctx);
    }

    let service_names = parse_service_producer(&object.annotations).unwrap_or_default();
    store
        .associated_services
        .set(Kind::Executable, name, service_names);

    let change_type = match event {
        WatchEventType::Added => ChangeType::Added,
        WatchEventType::Modified => ChangeType::Modified,
        WatchEventType::Deleted => ChangeType::Deleted,
    };
    build_change(is_project, change_type, &object, store, ctx)
}

fn empty(is_project: bool) -> ExecutableOutcome {
    if is_project {
        ExecutableOutcome::Project(None)
    } else {
        ExecutableOutcome::Executable(None)
    }
}

pub(crate) fn build_change(
    is_project: bool,
    change_type: ChangeType,
    object: &Executable,
    store: &RawStore,
    ctx: &HandlerContext<'_>,
) -> ExecutableOutcome {
    let base = build_base(object, is_project, store, ctx);
    if is_project {
        let vm = ProjectViewModel {
            base,
            pid: object.status.pid,
            exe_path: object.exe_path.clone(),
            working_dir: object.working_dir.clone(),
            args: object.args.clone(),
            project_path: object.project_path().unwrap_or_default().to_string(),
        };
        ExecutableOutcome::Project(Some(Change::new(change_type, vm)))
    } else {
        let vm = ExecutableViewModel {
            base,
            pid: object.status.pid,
            exe_path: object.exe_path.clone(),
            working_dir: object.working_dir.clone(),
            args: object.args.clone(),
        };
        ExecutableOutcome::Executable(Some(Change::new(change_type, vm)))
    }
}

fn build_base(object: &Executable, is_project: bool, store: &RawStore, ctx: &HandlerContext<'_>) -> ResourceBase {
    let services = store.services_by_name();
    let endpoint_refs = store.endpoint_refs();
    let declared_services = parse_service_producer(&object.annotations).unwrap_or_default();
    let project_path = object.project_path();

    let endpoints = compute_endpoints(
        Kind::Executable,
        &object.name,
        &endpoint_refs,
        &services,
        ctx.protocol,
        if is_project { project_path } else { None },
        if is_project { Some(ctx.app_model) } else { None },
    );
    let expected_endpoints_count =
        compute_expected_endpoints_count(&declared_services, &services, ctx.protocol);

    let effective_env = object.status.effective_env.clone().unwrap_or_default();
    let environment = project_environment(&effective_env, &object.env_spec);

    ResourceBase {
        name: object.name.clone(),
        uid: object.uid.clone(),
        namespaced_name: object.name.clone(),
        created_at: object.created_at,
        state: state_label(object.status.state),
        expected_endpoints_count,
        endpoints,
        environment,
        log_source: LogSource::File {
            stdout_path: object.status.stdout_path.clone(),
            stderr_path: object.status.stderr_path.clone(),
        },
    }
}

#[cfg(test)]
#[path = "executable_tests.rs"]
mod tests;
