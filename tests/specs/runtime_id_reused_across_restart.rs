// SPDX-License-Identifier: MIT

//! Scenario 6 (§8): non-null runtime id reused across restarts.

use crate::prelude::settle;
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::test_support::sample_container_with_runtime_id;
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn restart_with_same_runtime_id_does_not_reschedule_enrichment() {
    let client = Arc::new(FakeWatchClient::new());
    client.push_container(RawWatchEvent::Added(sample_container_with_runtime_id("db", "abc")));

    let process_runner = FakeProcessRunner::new();
    process_runner.script_json_env("abc", &["LANG=C"]);

    let svc = ViewModelService::new(
        client.clone(),
        Arc::new(FakeProtocolPredicate::new()),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(process_runner.clone()),
        "app",
        EngineConfig::default(),
    );
    settle().await;
    settle().await;

    client.push_container(RawWatchEvent::Deleted(sample_container_with_runtime_id("db", "abc")));
    client.push_container(RawWatchEvent::Added(sample_container_with_runtime_id("db", "abc")));
    settle().await;

    assert_eq!(
        process_runner.calls().len(),
        1,
        "the same runtime id must only ever be enriched once"
    );

    svc.dispose().await;
}
