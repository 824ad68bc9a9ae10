// SPDX-License-Identifier: MIT

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-core: primitive objects, view models, and pure conversions for the
//! fleet view-model reconciliation engine.

pub mod annotations;
pub mod convert;
pub mod id;
pub mod primitive;
pub mod traits;
pub mod view_model;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use annotations::{parse_service_producer, AnnotationError};
pub use convert::{compute_endpoints, compute_expected_endpoints_count, project_environment, state_label};
pub use id::{RuntimeId, Uid};
pub use primitive::{
    Annotations, Container, ContainerStatus, Endpoint, EndpointSpec, EnvVar, Executable,
    ExecutableStatus, Kind, OwnerRef, PortSpec, Primitive, RuntimeState, Service, ServiceSpec,
    WatchEventType, ANNOTATION_CSHARP_PROJECT_PATH, ANNOTATION_SERVICE_PRODUCER,
};
pub use traits::{ApplicationModel, LaunchProfile, ProjectInfo, ProtocolPredicate};
pub use view_model::{
    Change, ChangeType, ContainerViewModel, EnvironmentVariableViewModel, ExecutableViewModel,
    Keyed, LogSource, ProjectViewModel, ResourceBase, ResourceView, ViewKind,
};
