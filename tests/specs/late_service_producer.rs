// SPDX-License-Identifier: MIT

//! Scenario 4 (§8): late service producer.

use crate::prelude::{drain, settle};
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::test_support::{sample_executable, sample_service};
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn expected_count_is_null_until_every_declared_service_exists() {
    let client = Arc::new(FakeWatchClient::new());
    let mut api = sample_executable("api");
    api.annotations.insert(
        fv_core::ANNOTATION_SERVICE_PRODUCER.to_string(),
        fv_core::test_support::service_producer_annotation(&["a", "b"]),
    );
    client.push_executable(RawWatchEvent::Added(api));
    client.push_service(RawWatchEvent::Added(sample_service("a", "http")));

    let protocol = FakeProtocolPredicate::new();
    protocol.mark_http("a");
    protocol.mark_http("b");

    let svc = ViewModelService::new(
        client.clone(),
        Arc::new(protocol),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(FakeProcessRunner::new()),
        "app",
        EngineConfig::default(),
    );
    let mut executables = svc.get_executables();
    settle().await;
    let initial = drain(&mut executables).await;
    assert_eq!(initial.last().unwrap().value.base.expected_endpoints_count, None);

    client.push_service(RawWatchEvent::Added(sample_service("b", "http")));
    settle().await;
    let changes = drain(&mut executables).await;
    assert_eq!(changes.last().unwrap().value.base.expected_endpoints_count, Some(2));

    svc.dispose().await;
}
