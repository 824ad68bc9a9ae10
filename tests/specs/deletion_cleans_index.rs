// SPDX-License-Identifier: MIT

//! Scenario 5 (§8): deletion cleans the associated-services index.

use crate::prelude::{drain, settle};
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::test_support::{sample_executable, sample_service, with_service_producer_executable};
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn deleting_the_owner_stops_further_service_re_emissions() {
    let client = Arc::new(FakeWatchClient::new());
    let api = with_service_producer_executable(sample_executable("api"), &["a", "b"]);
    client.push_executable(RawWatchEvent::Added(api.clone()));
    client.push_service(RawWatchEvent::Added(sample_service("a", "http")));
    client.push_service(RawWatchEvent::Added(sample_service("b", "http")));

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
    drain(&mut executables).await;

    client.push_executable(RawWatchEvent::Deleted(api));
    settle().await;
    let deletion_changes = drain(&mut executables).await;
    assert!(!deletion_changes.is_empty());

    client.push_service(RawWatchEvent::Modified(sample_service("a", "http")));
    settle().await;
    let after_delete = drain(&mut executables).await;
    assert!(
        after_delete.is_empty(),
        "service change must not re-emit a deleted owner"
    );

    svc.dispose().await;
}
