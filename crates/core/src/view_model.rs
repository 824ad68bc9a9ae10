// SPDX-License-Identifier: MIT

//! Derived view models emitted to subscribers (§3).
//!
//! Re-expressed from the source's class hierarchy as a tagged enum with a
//! shared base record, per §9's "Polymorphism over resource kinds" note.

use crate::id::Uid;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnvironmentVariableViewModel {
    pub name: String,
    pub value: Option<String>,
    pub from_spec: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum LogSource {
    Docker { runtime_id: Option<String> },
    File {
        stdout_path: Option<String>,
        stderr_path: Option<String>,
    },
}

/// Fields common to every resource kind's view model.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResourceBase {
    pub name: String,
    pub uid: Uid,
    pub namespaced_name: String,
    pub created_at: DateTime<Utc>,
    pub state: String,
    /// `None` means "unknown" (rendered by the dashboard as "Starting") — see
    /// §4.2 "Expected endpoints count".
    pub expected_endpoints_count: Option<usize>,
    pub endpoints: Vec<String>,
    pub environment: Vec<EnvironmentVariableViewModel>,
    pub log_source: LogSource,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerViewModel {
    pub base: ResourceBase,
    pub container_id: Option<String>,
    pub image: String,
    pub ports: Vec<crate::primitive::PortSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecutableViewModel {
    pub base: ResourceBase,
    pub pid: Option<u32>,
    pub exe_path: String,
    pub working_dir: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProjectViewModel {
    pub base: ResourceBase,
    pub pid: Option<u32>,
    pub exe_path: String,
    pub working_dir: String,
    pub args: Vec<String>,
    pub project_path: String,
}

/// A tagged union over the three view-model kinds, carried by the aggregate
/// stream (§3 invariant 5); per-kind streams carry the refined case directly.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ResourceView {
    Container(ContainerViewModel),
    Executable(ExecutableViewModel),
    Project(ProjectViewModel),
}

impl ResourceView {
    pub fn base(&self) -> &ResourceBase {
        match self {
            ResourceView::Container(v) => &v.base,
            ResourceView::Executable(v) => &v.base,
            ResourceView::Project(v) => &v.base,
        }
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }
}

impl From<ContainerViewModel> for ResourceView {
    fn from(v: ContainerViewModel) -> Self {
        ResourceView::Container(v)
    }
}

impl From<ExecutableViewModel> for ResourceView {
    fn from(v: ExecutableViewModel) -> Self {
        ResourceView::Executable(v)
    }
}

impl From<ProjectViewModel> for ResourceView {
    fn from(v: ProjectViewModel) -> Self {
        ResourceView::Project(v)
    }
}

/// Discriminant used to key the aggregate current-state map (§4.4): the
/// aggregate fan-out processor merges three kind-specific streams whose
/// primitive names are only guaranteed unique *within* a kind, so entries
/// are keyed by `(ViewKind, name)` rather than name alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ViewKind {
    Container,
    Executable,
    Project,
}

impl ResourceView {
    pub fn view_kind(&self) -> ViewKind {
        match self {
            ResourceView::Container(_) => ViewKind::Container,
            ResourceView::Executable(_) => ViewKind::Executable,
            ResourceView::Project(_) => ViewKind::Project,
        }
    }
}

/// A view model's identity within its fan-out processor's current-state map.
pub trait Keyed {
    type Key: std::hash::Hash + Eq + Clone;
    fn key(&self) -> Self::Key;
}

impl Keyed for ContainerViewModel {
    type Key = String;
    fn key(&self) -> String {
        self.base.name.clone()
    }
}

impl Keyed for ExecutableViewModel {
    type Key = String;
    fn key(&self) -> String {
        self.base.name.clone()
    }
}

impl Keyed for ProjectViewModel {
    type Key = String;
    fn key(&self) -> String {
        self.base.name.clone()
    }
}

impl Keyed for ResourceView {
    type Key = (ViewKind, String);
    fn key(&self) -> (ViewKind, String) {
        (self.view_kind(), self.name().to_string())
    }
}

/// The kind of change carried by a [`Change`] (§4.4); mirrors the watch API's
/// `Added|Modified|Deleted` plus an `Other` catch-all the fan-out processor
/// ignores when updating its current-state map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChangeType {
    Added,
    Modified,
    Deleted,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Change<V> {
    pub change_type: ChangeType,
    pub value: V,
}

impl<V> Change<V> {
    pub fn new(change_type: ChangeType, value: V) -> Self {
        Self { change_type, value }
    }
}

#[cfg(test)]
#[path = "view_model_tests.rs"]
mod tests;
