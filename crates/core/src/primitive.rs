// SPDX-License-Identifier: MIT

//! Primitive orchestrator objects (§3).
//!
//! These mirror what the orchestrator's watch API reports verbatim; the
//! reconciler joins and projects them into view models (see [`crate::view_model`]).

use crate::id::{RuntimeId, Uid};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// The four primitive kinds the engine watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Kind {
    Container,
    Executable,
    Endpoint,
    Service,
}

/// The event types the orchestrator's watch API reports for a primitive
/// (§4.1). `Bookmark` and `Error` are consumed and dropped by the watch
/// multiplexer before anything reaches the merged channel (§4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WatchEventType {
    Added,
    Modified,
    Deleted,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Kind::Container => "Container",
            Kind::Executable => "Executable",
            Kind::Endpoint => "Endpoint",
            Kind::Service => "Service",
        };
        write!(f, "{s}")
    }
}

/// A single `NAME=VALUE` style environment variable as declared in a spec
/// (as opposed to one reported at runtime — see [`EnvironmentVariableViewModel`]
/// in [`crate::view_model`]).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: Option<String>,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<Option<String>>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A port exposed by a container.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PortSpec {
    pub container_port: u16,
    pub host_port: Option<u16>,
}

/// A reference to the primitive that owns another primitive (e.g. an endpoint's
/// owning container or executable).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OwnerRef {
    pub kind: Kind,
    pub name: String,
}

/// Opaque string-keyed annotations carried by executables.
pub type Annotations = HashMap<String, String>;

/// Coarse lifecycle state for a primitive's runtime status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RuntimeState {
    Starting,
    Running,
    Exited,
    FailedToStart,
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContainerStatus {
    pub runtime_id: Option<RuntimeId>,
    pub state: Option<RuntimeState>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Container {
    pub name: String,
    pub uid: Uid,
    pub created_at: DateTime<Utc>,
    pub image: String,
    pub ports: Vec<PortSpec>,
    pub env_spec: Vec<EnvVar>,
    pub annotations: Annotations,
    pub owner_refs: Vec<OwnerRef>,
    pub status: ContainerStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecutableStatus {
    pub effective_env: Option<Vec<EnvVar>>,
    pub stdout_path: Option<String>,
    pub stderr_path: Option<String>,
    pub pid: Option<u32>,
    pub state: Option<RuntimeState>,
}

/// Annotation key whose presence classifies an [`Executable`] as a project.
pub const ANNOTATION_CSHARP_PROJECT_PATH: &str = "csharp-project-path";

/// Annotation key carrying the JSON-encoded `ServiceProducer` list.
pub const ANNOTATION_SERVICE_PRODUCER: &str = "ServiceProducer";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Executable {
    pub name: String,
    pub uid: Uid,
    pub created_at: DateTime<Utc>,
    pub exe_path: String,
    pub working_dir: String,
    pub args: Vec<String>,
    pub env_spec: Vec<EnvVar>,
    pub annotations: Annotations,
    pub owner_refs: Vec<OwnerRef>,
    pub status: ExecutableStatus,
}

impl Executable {
    /// True iff this executable carries the project-classification annotation (§3).
    pub fn is_project(&self) -> bool {
        self.annotations.contains_key(ANNOTATION_CSHARP_PROJECT_PATH)
    }

    pub fn project_path(&self) -> Option<&str> {
        self.annotations
            .get(ANNOTATION_CSHARP_PROJECT_PATH)
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EndpointSpec {
    pub service_name: String,
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Endpoint {
    pub name: String,
    pub owner_refs: Vec<OwnerRef>,
    pub spec: EndpointSpec,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceSpec {
    pub protocol: String,
    pub annotations: Annotations,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Service {
    pub name: String,
    pub spec: ServiceSpec,
}

/// A tagged union over the four primitive kinds, as delivered by the
/// watch multiplexer into the merged channel.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Primitive {
    Container(Container),
    Executable(Executable),
    Endpoint(Endpoint),
    Service(Service),
}

impl Primitive {
    pub fn kind(&self) -> Kind {
        match self {
            Primitive::Container(_) => Kind::Container,
            Primitive::Executable(_) => Kind::Executable,
            Primitive::Endpoint(_) => Kind::Endpoint,
            Primitive::Service(_) => Kind::Service,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Primitive::Container(c) => &c.name,
            Primitive::Executable(e) => &e.name,
            Primitive::Endpoint(e) => &e.name,
            Primitive::Service(s) => &s.name,
        }
    }
}

#[cfg(test)]
#[path = "primitive_tests.rs"]
mod tests;
