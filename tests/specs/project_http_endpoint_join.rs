// SPDX-License-Identifier: MIT

//! Scenario 1 (§8): project + HTTP service + endpoint join.

use crate::prelude::{drain, settle};
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::primitive::{EndpointSpec, OwnerRef};
use fv_core::test_support::{sample_project, sample_service};
use fv_core::{Endpoint, Kind};
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn project_with_http_endpoint_emits_joined_url_and_expected_count() {
    let client = FakeWatchClient::new();
    let protocol = FakeProtocolPredicate::new();
    protocol.mark_http("api-http");

    let mut api = sample_project("api", "/x/api.csproj");
    api.annotations.insert(
        fv_core::ANNOTATION_SERVICE_PRODUCER.to_string(),
        fv_core::test_support::service_producer_annotation(&["api-http"]),
    );
    client.push_executable(RawWatchEvent::Added(api));
    client.push_service(RawWatchEvent::Added(sample_service("api-http", "http")));
    client.push_endpoint(RawWatchEvent::Added(Endpoint {
        name: "api-ep".to_string(),
        owner_refs: vec![OwnerRef {
            kind: Kind::Executable,
            name: "api".to_string(),
        }],
        spec: EndpointSpec {
            service_name: "api-http".to_string(),
            address: "127.0.0.1".to_string(),
            port: 5123,
        },
    }));

    let svc = ViewModelService::new(
        Arc::new(client),
        Arc::new(protocol),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(FakeProcessRunner::new()),
        "app",
        EngineConfig::default(),
    );
    let mut monitor = svc.get_projects();
    settle().await;
    let changes = drain(&mut monitor).await;

    let last = changes.last().expect("at least one project emission expected");
    assert_eq!(last.value.base.endpoints, vec!["http://127.0.0.1:5123".to_string()]);
    assert_eq!(last.value.base.expected_endpoints_count, Some(1));

    svc.dispose().await;
}
