// SPDX-License-Identifier: MIT

use super::*;
use fv_adapters::{FakeApplicationModel, FakeProtocolPredicate};
use fv_core::test_support::{sample_executable, sample_project};
use fv_store::RawStore;

fn ctx<'a>(protocol: &'a FakeProtocolPredicate, app_model: &'a FakeApplicationModel) -> HandlerContext<'a> {
    HandlerContext {
        protocol,
        app_model,
    }
}

#[test]
fn plain_executable_emits_executable_variant() {
    let mut store = RawStore::new();
    let protocol = FakeProtocolPredicate::new();
    let app_model = FakeApplicationModel::new();

    let outcome = handle(
        &mut store,
        WatchEventType::Added,
        "api",
        sample_executable("api"),
        &ctx(&protocol, &app_model),
    );

    match outcome {
        ExecutableOutcome::Executable(Some(change)) => {
            assert_eq!(change.change_type, ChangeType::Added);
            assert_eq!(change.value.base.name, "api");
        }
        other => panic!("expected Executable variant, got {other:?}"),
    }
}

#[test]
fn project_executable_emits_project_variant_with_path() {
    let mut store = RawStore::new();
    let protocol = FakeProtocolPredicate::new();
    let app_model = FakeApplicationModel::new();

    let outcome = handle(
        &mut store,
        WatchEventType::Added,
        "webapp",
        sample_project("webapp", "/src/WebApp"),
        &ctx(&protocol, &app_model),
    );

    match outcome {
        ExecutableOutcome::Project(Some(change)) => {
            assert_eq!(change.value.project_path, "/src/WebApp");
        }
        other => panic!("expected Project variant, got {other:?}"),
    }
}

#[test]
fn project_with_launch_url_appends_to_endpoint() {
    let mut store = RawStore::new();
    let protocol = FakeProtocolPredicate::new();
    protocol.mark_http("webapp-http");
    let app_model = FakeApplicationModel::new();
    app_model.register_with_launch_url("/src/WebApp", "swagger");

    use fv_core::primitive::{EndpointSpec, OwnerRef};
    use fv_core::{Endpoint, Kind};
    store
        .endpoints
        .apply(
            WatchEventType::Added,
            "webapp-ep",
            Endpoint {
                name: "webapp-ep".to_string(),
                owner_refs: vec![OwnerRef {
                    kind: Kind::Executable,
                    name: "webapp".to_string(),
                }],
                spec: EndpointSpec {
                    service_name: "webapp-http".to_string(),
                    address: "127.0.0.1".to_string(),
                    port: 5000,
                },
            },
        )
        .expect("apply should succeed");
    store
        .services
        .apply(
            WatchEventType::Added,
            "webapp-http",
            fv_core::test_support::sample_service("webapp-http", "http"),
        )
        .expect("apply should succeed");

    let outcome = handle(
        &mut store,
        WatchEventType::Added,
        "webapp",
        sample_project("webapp", "/src/WebApp"),
        &ctx(&protocol, &app_model),
    );

    match outcome {
        ExecutableOutcome::Project(Some(change)) => {
            assert_eq!(change.value.base.endpoints, vec!["http://127.0.0.1:5000/swagger".to_string()]);
        }
        other => panic!("expected Project variant, got {other:?}"),
    }
}

#[test]
fn deleting_executable_removes_associated_services_row() {
    use fv_core::test_support::with_service_producer_executable;
    let mut store = RawStore::new();
    let protocol = FakeProtocolPredicate::new();
    let app_model = FakeApplicationModel::new();
    let exe = with_service_producer_executable(sample_executable("api"), &["api-http"]);

    handle(
        &mut store,
        WatchEventType::Added,
        "api",
        exe.clone(),
        &ctx(&protocol, &app_model),
    );
    assert_eq!(store.associated_services.owners_of("api-http").len(), 1);

    handle(&mut store, WatchEventType::Deleted, "api", exe, &ctx(&protocol, &app_model));
    assert!(store.associated_services.owners_of("api-http").is_empty());
}
