// SPDX-License-Identifier: MIT

//! Scenario 3 (§8): service re-emission.

use crate::prelude::{drain, settle};
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::primitive::OwnerRef;
use fv_core::test_support::{sample_container, sample_endpoint, sample_service, with_service_producer};
use fv_core::Kind;
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn service_switching_to_http_re_emits_only_its_owning_container() {
    let client = Arc::new(FakeWatchClient::new());
    let web = with_service_producer(sample_container("web"), &["web-http"]);
    client.push_container(RawWatchEvent::Added(web));
    client.push_service(RawWatchEvent::Added(sample_service("web-http", "tcp")));
    client.push_endpoint(RawWatchEvent::Added(sample_endpoint(
        "web-ep",
        OwnerRef {
            kind: Kind::Container,
            name: "web".to_string(),
        },
        "web-http",
        8080,
    )));

    let protocol = FakeProtocolPredicate::new();
    let svc = ViewModelService::new(
        client.clone(),
        Arc::new(protocol.clone()),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(FakeProcessRunner::new()),
        "app",
        EngineConfig::default(),
    );
    let mut containers = svc.get_containers();
    settle().await;
    let initial = drain(&mut containers).await;
    assert!(
        initial.last().unwrap().value.base.endpoints.is_empty(),
        "tcp service must not produce an endpoint URL yet"
    );

    protocol.mark_http("web-http");
    client.push_service(RawWatchEvent::Modified(sample_service("web-http", "http")));
    settle().await;

    let changes = drain(&mut containers).await;
    assert_eq!(changes.len(), 1, "only the owning container should be re-emitted");
    assert_eq!(
        changes[0].value.base.endpoints,
        vec!["http://127.0.0.1:8080".to_string()]
    );

    svc.dispose().await;
}
