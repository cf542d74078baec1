//
//  cloudfoundry-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use std::path::Path;
use std::process::Command;

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use mockito::{Matcher, ServerGuard};
use predicates::prelude::*;
use serde_json::json;

use common::*;

/// `cf` with an isolated config file and no inherited target.
fn cf(config: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("cf"));
    cmd.env("CF_CONFIG", config)
        .env_remove("CF_API")
        .env_remove("CF_TOKEN")
        .env_remove("CF_ORG")
        .env_remove("CF_SPACE")
        .env_remove("CF_POLL_INTERVAL")
        .env_remove("CF_TIMEOUT")
        .env_remove("CF_DEBUG");
    cmd
}

fn mock_space_deletion(server: &mut ServerGuard, job_bodies: Vec<String>) {
    server
        .mock("GET", "/v2/organizations")
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", ORG)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(ORG_ID, json!({ "name": ORG }))]))
        .create();
    server
        .mock("GET", format!("/v2/organizations/{}/spaces", ORG_ID).as_str())
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", SPACE)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(SPACE_ID, json!({ "name": SPACE }))]))
        .create();
    server
        .mock("DELETE", format!("/v2/spaces/{}", SPACE_ID).as_str())
        .match_query(Matcher::Any)
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(job("test-job-id", "queued"))
        .create();

    let (_, responder) = sequence(job_bodies);
    server
        .mock("GET", "/v2/jobs/test-job-id")
        .with_header("content-type", "application/json")
        .with_body_from_request(responder)
        .create();
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    cf(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Drive Cloud Foundry from the command line"));
}

#[test]
fn test_version() {
    let dir = tempfile::tempdir().unwrap();
    cf(&dir.path().join("config.toml"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cf version"));
}

#[test]
fn test_missing_api_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    cf(&dir.path().join("config.toml"))
        .args(["space", "delete", "test-space"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No API endpoint set"));
}

#[test]
fn test_missing_org_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    cf(&dir.path().join("config.toml"))
        .args(["--api", "https://api.example.com", "space", "delete", "test-space"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No organization targeted"));
}

#[test]
fn test_config_set_and_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");

    cf(&config)
        .args(["config", "set", "poll_interval", "5"])
        .assert()
        .success();
    cf(&config)
        .args(["config", "get", "poll_interval"])
        .assert()
        .success()
        .stdout("5\n");
    cf(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    let saved = std::fs::read_to_string(&config).unwrap();
    assert!(saved.contains("interval_secs = 5"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    cf(&dir.path().join("config.toml"))
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key 'colour'"));
}

#[test]
fn test_space_delete_success() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    mock_space_deletion(
        &mut server,
        vec![job("test-job-id", "running"), job("test-job-id", "finished")],
    );

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "--token", "test-token", "-o", ORG])
        .args(["--poll-interval", "0.01", "space", "delete", SPACE])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted space test-space"));
}

#[test]
fn test_space_delete_job_failure_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    mock_space_deletion(
        &mut server,
        vec![job("test-job-id", "running"), failed_job("test-job-id")],
    );

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "-o", ORG, "--poll-interval", "0.01"])
        .args(["space", "delete", SPACE])
        .assert()
        .code(17)
        .stderr(predicate::str::contains(
            "test-error-details-description test-error-details-errorCode(1)",
        ));
}

#[test]
fn test_space_delete_timeout_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    mock_space_deletion(&mut server, vec![job("test-job-id", "running")]);

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "-o", ORG])
        .args(["--poll-interval", "0.05", "--timeout", "0.3"])
        .args(["space", "delete", SPACE])
        .assert()
        .code(18)
        .stderr(predicate::str::contains("timed out"));
}

#[test]
fn test_space_delete_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    mock_space_deletion(&mut server, vec![job("test-job-id", "finished")]);

    let output = cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "-o", ORG, "--json"])
        .args(["space", "delete", SPACE])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], json!(true));
    assert_eq!(value["space"], json!(SPACE));
}

#[test]
fn test_job_wait_timeout_warns_job_may_still_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v2/jobs/test-job-id")
        .with_header("content-type", "application/json")
        .with_body(job("test-job-id", "running"))
        .create();

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str()])
        .args(["--poll-interval", "0.05", "--timeout", "0.3"])
        .args(["job", "wait", "test-job-id"])
        .assert()
        .code(18)
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("Job test-job-id may still be running"));
}

#[test]
fn test_zero_poll_interval_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();

    cf(&dir.path().join("config.toml"))
        .args(["--api", "https://api.example.com", "-o", ORG])
        .args(["--poll-interval", "0"])
        .args(["space", "delete", SPACE])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a positive number of seconds"));
}

#[test]
fn test_org_delete_success() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v2/organizations")
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", ORG)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(ORG_ID, json!({ "name": ORG }))]))
        .create();
    server
        .mock("DELETE", format!("/v2/organizations/{}", ORG_ID).as_str())
        .match_query(Matcher::UrlEncoded("async".into(), "true".into()))
        .with_status(202)
        .with_header("content-type", "application/json")
        .with_body(job("org-job", "queued"))
        .create();
    server
        .mock("GET", "/v2/jobs/org-job")
        .with_header("content-type", "application/json")
        .with_body(job("org-job", "finished"))
        .create();

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "--poll-interval", "0.05"])
        .args(["org", "delete", ORG])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted organization {}", ORG)));
}

#[test]
fn test_route_delete_missing_route_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    server
        .mock("GET", "/v2/organizations")
        .match_query(Matcher::UrlEncoded("q".into(), format!("name:{}", ORG)))
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource(ORG_ID, json!({ "name": ORG }))]))
        .create();
    server
        .mock("GET", format!("/v2/organizations/{}/private_domains", ORG_ID).as_str())
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(page(vec![resource("domain-id", json!({ "name": "apps.example.com" }))]))
        .create();
    server
        .mock("GET", "/v2/routes")
        .match_query(Matcher::Any)
        .with_header("content-type", "application/json")
        .with_body(page(Vec::new()))
        .create();

    cf(&dir.path().join("config.toml"))
        .args(["--api", server.url().as_str(), "-o", ORG])
        .args(["route", "delete", "apps.example.com", "--hostname", "web"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Route web.apps.example.com does not exist"));
}
