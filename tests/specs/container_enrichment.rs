// SPDX-License-Identifier: MIT

//! Scenario 2 (§8): container enrichment.

use crate::prelude::{drain, settle};
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate, FakeWatchClient, RawWatchEvent};
use fv_core::test_support::sample_container_with_runtime_id;
use fv_core::EnvVar;
use fv_engine::{EngineConfig, ViewModelService};
use std::sync::Arc;

#[tokio::test]
async fn enrichment_adds_runtime_env_sorted_with_from_spec_flags() {
    let client = FakeWatchClient::new();
    let mut db = sample_container_with_runtime_id("db", "abc");
    db.env_spec = vec![EnvVar::new("POSTGRES_PASSWORD", Some("secret".to_string()))];
    client.push_container(RawWatchEvent::Added(db));

    let process_runner = FakeProcessRunner::new();
    process_runner.script_json_env("abc", &["PATH=/usr/bin", "POSTGRES_PASSWORD=secret", "LANG=C"]);

    let svc = ViewModelService::new(
        Arc::new(client),
        Arc::new(FakeProtocolPredicate::new()),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(process_runner),
        "app",
        EngineConfig::default(),
    );
    let mut monitor = svc.get_containers();
    settle().await;
    let changes = drain(&mut monitor).await;

    assert_eq!(changes.len(), 2, "expected a spec-env emission then an enrichment re-emit");

    let first_env = &changes[0].value.base.environment;
    assert_eq!(first_env.len(), 1);
    assert_eq!(first_env[0].name, "POSTGRES_PASSWORD");

    let second_env = &changes[1].value.base.environment;
    let names: Vec<&str> = second_env.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["LANG", "PATH", "POSTGRES_PASSWORD"]);
    for entry in second_env {
        assert_eq!(entry.from_spec, entry.name == "POSTGRES_PASSWORD");
    }

    svc.dispose().await;
}
