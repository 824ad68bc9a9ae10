// SPDX-License-Identifier: MIT

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::id::{RuntimeId, Uid};
use crate::primitive::*;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;

fn epoch(seconds: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_opt(seconds, 0).single().expect("valid timestamp")
}

pub fn sample_container(name: &str) -> Container {
    Container {
        name: name.to_string(),
        uid: Uid::new(format!("uid-{name}")),
        created_at: epoch(1_700_000_000),
        image: "postgres:16".to_string(),
        ports: vec![],
        env_spec: vec![],
        annotations: HashMap::new(),
        owner_refs: vec![],
        status: ContainerStatus::default(),
    }
}

pub fn sample_container_with_runtime_id(name: &str, runtime_id: &str) -> Container {
    Container {
        status: ContainerStatus {
            runtime_id: Some(RuntimeId::new(runtime_id)),
            state: Some(RuntimeState::Running),
        },
        ..sample_container(name)
    }
}

/// Attach a `ServiceProducer` annotation declaring `service_names` to a container.
pub fn with_service_producer(mut container: Container, service_names: &[&str]) -> Container {
    container.annotations.insert(
        ANNOTATION_SERVICE_PRODUCER.to_string(),
        service_producer_annotation(service_names),
    );
    container
}

/// Attach a `ServiceProducer` annotation declaring `service_names` to an executable.
pub fn with_service_producer_executable(mut exe: Executable, service_names: &[&str]) -> Executable {
    exe.annotations.insert(
        ANNOTATION_SERVICE_PRODUCER.to_string(),
        service_producer_annotation(service_names),
    );
    exe
}

pub fn sample_executable(name: &str) -> Executable {
    Executable {
        name: name.to_string(),
        uid: Uid::new(format!("uid-{name}")),
        created_at: epoch(1_700_000_000),
        exe_path: format!("/usr/bin/{name}"),
        working_dir: "/work".to_string(),
        args: vec![],
        env_spec: vec![],
        annotations: HashMap::new(),
        owner_refs: vec![],
        status: ExecutableStatus::default(),
    }
}

pub fn sample_project(name: &str, project_path: &str) -> Executable {
    let mut exe = sample_executable(name);
    exe.annotations.insert(
        ANNOTATION_CSHARP_PROJECT_PATH.to_string(),
        project_path.to_string(),
    );
    exe
}

pub fn sample_endpoint(name: &str, owner: OwnerRef, service_name: &str, port: u16) -> Endpoint {
    Endpoint {
        name: name.to_string(),
        owner_refs: vec![owner],
        spec: EndpointSpec {
            service_name: service_name.to_string(),
            address: "127.0.0.1".to_string(),
            port,
        },
    }
}

pub fn sample_service(name: &str, protocol: &str) -> Service {
    Service {
        name: name.to_string(),
        spec: ServiceSpec {
            protocol: protocol.to_string(),
            annotations: HashMap::new(),
        },
    }
}

/// Build a `ServiceProducer` annotation value from a list of service names.
pub fn service_producer_annotation(service_names: &[&str]) -> String {
    let entries: Vec<serde_json::Value> = service_names
        .iter()
        .map(|n| serde_json::json!({ "service_name": n }))
        .collect();
    serde_json::Value::Array(entries).to_string()
}
