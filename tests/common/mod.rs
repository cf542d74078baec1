//
//  cloudfoundry-client
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use cloudfoundry_client::api::CloudFoundryClient;
use cloudfoundry_client::auth::AuthCredential;
use cloudfoundry_client::operations::{CloudFoundryOperations, PollConfig};
use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};

pub const ORG: &str = "test-organization";
pub const ORG_ID: &str = "test-organization-id";
pub const SPACE: &str = "test-space";
pub const SPACE_ID: &str = "test-space-id";

/// Short interval so real-time tests stay fast.
pub fn poll_config() -> PollConfig {
    PollConfig::new(Duration::from_millis(10), Duration::from_secs(5))
}

pub fn client(server: &ServerGuard) -> CloudFoundryClient {
    CloudFoundryClient::new(&server.url())
        .unwrap()
        .with_auth(AuthCredential::bearer("test-token"))
}

pub fn operations(server: &ServerGuard) -> CloudFoundryOperations {
    CloudFoundryOperations::builder(client(server))
        .organization(ORG)
        .space(SPACE)
        .poll_config(poll_config())
        .build()
}

/// A v2 resource envelope.
pub fn resource(id: &str, entity: Value) -> Value {
    json!({
        "metadata": {
            "guid": id,
            "url": format!("/v2/resources/{}", id),
            "created_at": "2016-06-08T16:41:23Z"
        },
        "entity": entity
    })
}

/// A single-page v2 list response.
pub fn page(resources: Vec<Value>) -> String {
    json!({
        "total_results": resources.len(),
        "total_pages": 1,
        "prev_url": null,
        "next_url": null,
        "resources": resources
    })
    .to_string()
}

pub fn job(id: &str, status: &str) -> String {
    resource(id, json!({ "guid": id, "status": status })).to_string()
}

pub fn failed_job(id: &str) -> String {
    resource(
        id,
        json!({
            "guid": id,
            "status": "failed",
            "error_details": {
                "code": 1,
                "description": "test-error-details-description",
                "error_code": "test-error-details-errorCode"
            }
        }),
    )
    .to_string()
}

/// Serves `bodies` in order, repeating the last one, and counts requests.
pub fn sequence(bodies: Vec<String>) -> (Arc<AtomicUsize>, impl Fn(&mockito::Request) -> Vec<u8>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let responder = move |_: &mockito::Request| {
        let index = counter.fetch_add(1, Ordering::SeqCst);
        bodies[index.min(bodies.len() - 1)].clone().into_bytes()
    };
    (hits, responder)
}

pub async fn mock_organization(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/v2/organizations")
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", ORG)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(ORG_ID, json!({ "name": ORG, "status": "active" }))]))
        .create_async()
        .await
}

pub async fn mock_space(server: &mut ServerGuard, name: &str, id: &str) -> Mock {
    server
        .mock("GET", format!("/v2/organizations/{}/spaces", ORG_ID).as_str())
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", name)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(
            id,
            json!({ "name": name, "organization_guid": ORG_ID }),
        )]))
        .create_async()
        .await
}

pub async fn mock_target(server: &mut ServerGuard) -> (Mock, Mock) {
    let organization = mock_organization(server).await;
    let space = mock_space(server, SPACE, SPACE_ID).await;
    (organization, space)
}

pub async fn mock_application(server: &mut ServerGuard, name: &str, id: &str) -> Mock {
    server
        .mock("GET", format!("/v2/spaces/{}/apps", SPACE_ID).as_str())
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", name)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(
            id,
            json!({ "name": name, "state": "STARTED", "package_state": "STAGED", "space_guid": SPACE_ID }),
        )]))
        .create_async()
        .await
}

/// Mocks `GET /v2/jobs/{id}` serving `bodies` in order; returns the hit counter.
pub async fn mock_job(server: &mut ServerGuard, id: &str, bodies: Vec<String>) -> (Mock, Arc<AtomicUsize>) {
    let (hits, responder) = sequence(bodies);
    let mock = server
        .mock("GET", format!("/v2/jobs/{}", id).as_str())
        .with_header("content-type", "application/json")
        .with_body_from_request(responder)
        .create_async()
        .await;
    (mock, hits)
}

pub fn hits(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
