//
//  cloudfoundry-client
//  tests/application_operations.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use std::time::Duration;

use cloudfoundry_client::operations::{
    CopySourceApplicationRequest, DeleteApplicationRequest, OperationError,
    RestageApplicationRequest,
};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

use common::*;

fn application(status: &str, extra: serde_json::Value) -> String {
    let mut entity = json!({ "name": "web", "state": "STARTED", "package_state": status });
    if let (Some(entity), Some(extra)) = (entity.as_object_mut(), extra.as_object()) {
        entity.extend(extra.clone());
    }
    resource("web-id", entity).to_string()
}

async fn mock_bindings(server: &mut ServerGuard, bindings: Vec<serde_json::Value>) -> Mock {
    server
        .mock("GET", "/v2/apps/web-id/service_bindings")
        .with_header("content-type", "application/json")
        .with_body(page(bindings))
        .expect(1)
        .create_async()
        .await
}

fn instances(states: &[&str]) -> String {
    let map: serde_json::Map<String, serde_json::Value> = states
        .iter()
        .enumerate()
        .map(|(index, state)| (index.to_string(), json!({ "state": state, "since": 1403140717.98 })))
        .collect();
    serde_json::Value::Object(map).to_string()
}

async fn mock_restage(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/v2/apps/web-id/restage")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(application("PENDING", json!({})))
        .expect(1)
        .create_async()
        .await
}

async fn mock_staged(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/v2/apps/web-id")
        .with_header("content-type", "application/json")
        .with_body(application("STAGED", json!({})))
        .create_async()
        .await
}

#[tokio::test]
async fn delete_with_routes_deletes_each_route_first() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    server
        .mock("GET", "/v2/apps/web-id/routes")
        .with_header("content-type", "application/json")
        .with_body(page(vec![
            resource("route-1", json!({ "host": "web" })),
            resource("route-2", json!({ "host": "web-admin" })),
        ]))
        .create_async()
        .await;

    let mut route_deletions = Vec::new();
    for route in ["route-1", "route-2"] {
        route_deletions.push(
            server
                .mock("DELETE", format!("/v2/routes/{}", route).as_str())
                .match_query(Matcher::UrlEncoded("async".into(), "true".into()))
                .with_status(202)
                .with_header("content-type", "application/json")
                .with_body(job(&format!("{}-job", route), "queued"))
                .expect(1)
                .create_async()
                .await,
        );
    }
    let (_first, first_queries) =
        mock_job(&mut server, "route-1-job", vec![job("route-1-job", "finished")]).await;
    let (_second, second_queries) =
        mock_job(&mut server, "route-2-job", vec![job("route-2-job", "finished")]).await;
    let bindings = mock_bindings(&mut server, Vec::new()).await;
    let delete_app = server
        .mock("DELETE", "/v2/apps/web-id")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    operations(&server)
        .applications()
        .delete(&DeleteApplicationRequest::new("web").with_delete_routes(true))
        .await
        .unwrap();

    for mock in &route_deletions {
        mock.assert_async().await;
    }
    bindings.assert_async().await;
    delete_app.assert_async().await;
    assert_eq!(hits(&first_queries), 1);
    assert_eq!(hits(&second_queries), 1);
}

#[tokio::test]
async fn delete_keeps_routes_by_default() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    let routes = server
        .mock("GET", "/v2/apps/web-id/routes")
        .expect(0)
        .create_async()
        .await;
    mock_bindings(&mut server, Vec::new()).await;
    let delete_app = server
        .mock("DELETE", "/v2/apps/web-id")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    operations(&server)
        .applications()
        .delete(&DeleteApplicationRequest::new("web"))
        .await
        .unwrap();

    routes.assert_async().await;
    delete_app.assert_async().await;
}

#[tokio::test]
async fn delete_removes_service_bindings_first() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    let bindings = mock_bindings(
        &mut server,
        vec![
            resource("binding-1", json!({ "app_guid": "web-id", "service_instance_guid": "db-id" })),
            resource("binding-2", json!({ "app_guid": "web-id", "service_instance_guid": "cache-id" })),
        ],
    )
    .await;

    let mut binding_deletions = Vec::new();
    let mut binding_queries = Vec::new();
    for binding in ["binding-1", "binding-2"] {
        let job_id = format!("{}-job", binding);
        binding_deletions.push(
            server
                .mock("DELETE", format!("/v2/service_bindings/{}", binding).as_str())
                .match_query(Matcher::UrlEncoded("async".into(), "true".into()))
                .with_status(202)
                .with_header("content-type", "application/json")
                .with_body(job(&job_id, "queued"))
                .expect(1)
                .create_async()
                .await,
        );
        let (mock, queries) = mock_job(
            &mut server,
            &job_id,
            vec![job(&job_id, "running"), job(&job_id, "finished")],
        )
        .await;
        binding_queries.push((mock, queries));
    }
    let delete_app = server
        .mock("DELETE", "/v2/apps/web-id")
        .with_status(204)
        .expect(1)
        .create_async()
        .await;

    operations(&server)
        .applications()
        .delete(&DeleteApplicationRequest::new("web"))
        .await
        .unwrap();

    bindings.assert_async().await;
    for mock in &binding_deletions {
        mock.assert_async().await;
    }
    for (_, queries) in &binding_queries {
        assert_eq!(hits(queries), 2);
    }
    delete_app.assert_async().await;
}

#[tokio::test]
async fn failed_unbinding_keeps_the_application() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    mock_bindings(
        &mut server,
        vec![resource("binding-1", json!({ "app_guid": "web-id", "service_instance_guid": "db-id" }))],
    )
    .await;
    server
        .mock("DELETE", "/v2/service_bindings/binding-1")
        .match_query(Matcher::Any)
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(job("binding-1-job", "queued"))
        .create_async()
        .await;
    mock_job(&mut server, "binding-1-job", vec![failed_job("binding-1-job")]).await;
    let delete_app = server
        .mock("DELETE", "/v2/apps/web-id")
        .expect(0)
        .create_async()
        .await;

    let error = operations(&server)
        .applications()
        .delete(&DeleteApplicationRequest::new("web"))
        .await
        .unwrap_err();

    assert!(error.is_job_failure());
    delete_app.assert_async().await;
}

#[tokio::test]
async fn copy_source_waits_for_copy_job() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    mock_application(&mut server, "web-next", "web-next-id").await;
    let copy = server
        .mock("POST", "/v2/apps/web-next-id/copy_bits")
        .match_body(Matcher::Json(json!({ "source_app_guid": "web-id" })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(job("copy-job", "queued"))
        .expect(1)
        .create_async()
        .await;
    let (_job, queries) = mock_job(
        &mut server,
        "copy-job",
        vec![job("copy-job", "running"), job("copy-job", "finished")],
    )
    .await;

    operations(&server)
        .applications()
        .copy_source(&CopySourceApplicationRequest::new("web", "web-next"))
        .await
        .unwrap();

    copy.assert_async().await;
    assert_eq!(hits(&queries), 2);
}

#[tokio::test]
async fn restage_polls_until_staged() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    server
        .mock("POST", "/v2/apps/web-id/restage")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(application("PENDING", json!({})))
        .expect(1)
        .create_async()
        .await;
    let (responses, responder) = sequence(vec![
        application("PENDING", json!({})),
        application("PENDING", json!({})),
        application("STAGED", json!({})),
    ]);
    server
        .mock("GET", "/v2/apps/web-id")
        .with_header("content-type", "application/json")
        .with_body_from_request(responder)
        .create_async()
        .await;
    let (starts, responder) = sequence(vec![
        instances(&["STARTING", "STARTING"]),
        instances(&["STARTING", "RUNNING"]),
    ]);
    server
        .mock("GET", "/v2/apps/web-id/instances")
        .with_header("content-type", "application/json")
        .with_body_from_request(responder)
        .create_async()
        .await;

    operations(&server)
        .applications()
        .restage(&RestageApplicationRequest::new("web"))
        .await
        .unwrap();

    assert_eq!(hits(&responses), 3);
    assert_eq!(hits(&starts), 2);
}

#[tokio::test]
async fn restage_reports_crashed_start() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    mock_restage(&mut server).await;
    mock_staged(&mut server).await;
    server
        .mock("GET", "/v2/apps/web-id/instances")
        .with_header("content-type", "application/json")
        .with_body(instances(&["STARTING", "CRASHED"]))
        .expect(1)
        .create_async()
        .await;

    let error = operations(&server)
        .applications()
        .restage(&RestageApplicationRequest::new("web"))
        .await
        .unwrap_err();

    assert!(matches!(error, OperationError::StartupFailed { .. }));
    assert_eq!(error.to_string(), "Application web failed during start");
}

#[tokio::test]
async fn restage_honours_startup_timeout() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    mock_restage(&mut server).await;
    mock_staged(&mut server).await;
    server
        .mock("GET", "/v2/apps/web-id/instances")
        .with_header("content-type", "application/json")
        .with_body(instances(&["STARTING"]))
        .create_async()
        .await;

    let error = operations(&server)
        .applications()
        .restage(&RestageApplicationRequest::new("web").with_startup_timeout(Duration::from_millis(100)))
        .await
        .unwrap_err();

    assert!(error.is_timeout());
    assert!(error.to_string().starts_with("Start of application web timed out"));
}

#[tokio::test]
async fn restage_reports_staging_failure() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    server
        .mock("POST", "/v2/apps/web-id/restage")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(application("PENDING", json!({})))
        .create_async()
        .await;
    server
        .mock("GET", "/v2/apps/web-id")
        .with_header("content-type", "application/json")
        .with_body(application(
            "FAILED",
            json!({
                "staging_failed_reason": "BuildpackCompileFailed",
                "staging_failed_description": "App staging failed in the buildpack compile phase"
            }),
        ))
        .create_async()
        .await;

    let error = operations(&server)
        .applications()
        .restage(&RestageApplicationRequest::new("web"))
        .await
        .unwrap_err();

    assert!(matches!(error, OperationError::StagingFailed { .. }));
    assert_eq!(
        error.to_string(),
        "Application web failed during staging: App staging failed in the buildpack compile phase"
    );
}

#[tokio::test]
async fn restage_honours_staging_timeout() {
    let mut server = mockito::Server::new_async().await;
    mock_target(&mut server).await;
    mock_application(&mut server, "web", "web-id").await;
    server
        .mock("POST", "/v2/apps/web-id/restage")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(application("PENDING", json!({})))
        .create_async()
        .await;
    server
        .mock("GET", "/v2/apps/web-id")
        .with_header("content-type", "application/json")
        .with_body(application("PENDING", json!({})))
        .create_async()
        .await;

    let error = operations(&server)
        .applications()
        .restage(&RestageApplicationRequest::new("web").with_staging_timeout(Duration::from_millis(100)))
        .await
        .unwrap_err();

    assert!(error.is_timeout());
    assert!(error.to_string().starts_with("Staging of application web timed out"));
}
