// SPDX-License-Identifier: MIT

use super::*;
use fv_adapters::{FakeApplicationModel, FakeProcessRunner, FakeProtocolPredicate};
use fv_core::test_support::sample_container_with_runtime_id;
use tokio::time::{timeout, Duration};
use tokio_stream::StreamExt;

fn spawn_reconciler(
    process_runner: FakeProcessRunner,
) -> (Fanouts, mpsc::UnboundedSender<WatchMessage>, JoinHandle<Vec<JoinHandle<()>>>) {
    let fanouts = Fanouts::new(8);
    let (tx, rx) = mpsc::unbounded_channel();
    let reconciler = Reconciler::new(
        Arc::new(FakeProtocolPredicate::new()),
        Arc::new(FakeApplicationModel::new()),
        Arc::new(process_runner),
        fanouts.clone(),
        EngineConfig::default(),
        CancellationToken::new(),
        tx.clone(),
    );
    let handle = tokio::spawn(reconciler.run(rx));
    (fanouts, tx, handle)
}

#[tokio::test]
async fn container_added_reaches_both_per_kind_and_aggregate_streams() {
    let (fanouts, tx, handle) = spawn_reconciler(FakeProcessRunner::new());
    let mut containers = fanouts.containers.subscribe();
    let mut aggregate = fanouts.aggregate.subscribe();

    tx.send(WatchMessage::Container {
        event: fv_core::WatchEventType::Added,
        name: "db".to_string(),
        object: Some(sample_container_with_runtime_id("db", "rt-1")),
    })
    .expect("send should succeed");

    let change = timeout(Duration::from_secs(1), containers.stream.next())
        .await
        .expect("should not time out")
        .expect("container change should arrive");
    assert_eq!(change.value.base.name, "db");

    let agg_change = timeout(Duration::from_secs(1), aggregate.stream.next())
        .await
        .expect("should not time out")
        .expect("aggregate change should arrive");
    assert_eq!(agg_change.value.name(), "db");

    drop(tx);
    let enrichment_tasks = timeout(Duration::from_secs(1), handle).await.expect("reconciler should stop").expect("task should not panic");
    for task in enrichment_tasks {
        let _ = task.await;
    }
}

#[tokio::test]
async fn scheduled_enrichment_re_emits_container_with_harvested_env() {
    let runner = FakeProcessRunner::new();
    runner.script_json_env("rt-1", &["LANG=C"]);
    let (fanouts, tx, handle) = spawn_reconciler(runner);
    let mut containers = fanouts.containers.subscribe();

    tx.send(WatchMessage::Container {
        event: fv_core::WatchEventType::Added,
        name: "db".to_string(),
        object: Some(sample_container_with_runtime_id("db", "rt-1")),
    })
    .expect("send should succeed");

    let first = timeout(Duration::from_secs(1), containers.stream.next())
        .await
        .expect("should not time out")
        .expect("initial container change should arrive");
    assert!(first.value.base.environment.is_empty());

    let second = timeout(Duration::from_secs(1), containers.stream.next())
        .await
        .expect("should not time out")
        .expect("enrichment re-emit should arrive");
    assert_eq!(second.value.base.environment[0].name, "LANG");

    drop(tx);
    let enrichment_tasks = timeout(Duration::from_secs(1), handle).await.expect("reconciler should stop").expect("task should not panic");
    for task in enrichment_tasks {
        let _ = task.await;
    }
}
