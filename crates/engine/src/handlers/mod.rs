// SPDX-License-Identifier: MIT

//! Per-kind reconcile handlers (§4.2).

pub mod container;
pub mod endpoint;
pub mod executable;
pub mod service;

use fv_core::{
    ApplicationModel, Change, ContainerViewModel, ExecutableViewModel, ProjectViewModel,
    ProtocolPredicate, ResourceView,
};

/// External collaborators every handler needs; bundled so handler
/// signatures stay short as the handler count grows.
pub struct HandlerContext<'a> {
    pub protocol: &'a dyn ProtocolPredicate,
    pub app_model: &'a dyn ApplicationModel,
}

/// A single re-emitted view model produced by a handler, tagged by which
/// per-kind fan-out stream it belongs to (§3 invariant 5, §4.4).
#[derive(Debug, Clone)]
pub enum ReEmit {
    Container(Change<ContainerViewModel>),
    Executable(Change<ExecutableViewModel>),
    Project(Change<ProjectViewModel>),
}

impl ReEmit {
    pub fn as_resource_view_change(&self) -> Change<ResourceView> {
        match self {
            ReEmit::Container(c) => Change::new(c.change_type, ResourceView::from(c.value.clone())),
            ReEmit::Executable(c) => Change::new(c.change_type, ResourceView::from(c.value.clone())),
            ReEmit::Project(c) => Change::new(c.change_type, ResourceView::from(c.value.clone())),
        }
    }
}
