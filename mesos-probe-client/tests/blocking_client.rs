// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Tests for the blocking client, called from plain threads with the mock
//! master running on a shared multi-thread runtime.

use std::time::Duration;

use mesos_probe_client::{ClientConfig, ClientError, ClusterStateClient};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_json, body_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("failed to build runtime")
}

fn mount(runtime: &Runtime, server: &MockServer, mock: Mock) {
    runtime.block_on(mock.mount(server));
}

#[test]
fn test_fetch_state_blocks_until_done() {
    let runtime = runtime();
    let server = runtime.block_on(MockServer::start());
    mount(
        &runtime,
        &server,
        Mock::given(method("GET"))
            .and(path("/state"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "version": "1.9.0",
                "slaves": [{"id": "agent-1", "resources": {"cpus": 2.0}}],
                "frameworks": [{"id": "fw-1", "name": "marathon"}]
            })))
            .expect(1),
    );

    let client = ClusterStateClient::new(runtime.handle().clone(), server.uri());
    let state = client.fetch_state().unwrap();

    assert_eq!(state.version, "1.9.0");
    assert_eq!(state.git_tag, None);
    assert_eq!(state.agent("agent-1").and_then(|a| a.resources.scalar("cpus")), Some(2.0));
    assert_eq!(state.framework("fw-1").map(|f| f.name.as_str()), Some("marathon"));
}

#[test]
fn test_framework_ids_match_fetch_frameworks() {
    let runtime = runtime();
    let server = runtime.block_on(MockServer::start());
    mount(
        &runtime,
        &server,
        Mock::given(method("GET"))
            .and(path("/frameworks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "frameworks": [{"id": "b", "name": "b"}, {"id": "a", "name": "a"}],
                "completed_frameworks": [{"id": "c", "name": "c"}]
            }))),
    );

    let client = ClusterStateClient::new(runtime.handle().clone(), server.uri());
    let frameworks = client.fetch_frameworks().unwrap();

    assert_eq!(client.framework_ids().unwrap(), frameworks.ids());
    assert_eq!(client.framework_ids().unwrap(), vec!["b", "a"]);
    assert_eq!(client.completed_framework_ids().unwrap(), vec!["c"]);
}

#[test]
fn test_write_calls() {
    let runtime = runtime();
    let server = runtime.block_on(MockServer::start());
    mount(
        &runtime,
        &server,
        Mock::given(method("POST"))
            .and(path("/teardown"))
            .and(body_string("frameworkId=fw-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1),
    );
    mount(
        &runtime,
        &server,
        Mock::given(method("POST"))
            .and(path("/api/v1"))
            .and(body_json(json!({
                "type": "DRAIN_AGENT",
                "drain_agent": {
                    "agent_id": {"value": "agent-1"},
                    "mark_gone": {"value": false}
                }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1),
    );
    mount(
        &runtime,
        &server,
        Mock::given(method("POST"))
            .and(path("/api/v1"))
            .and(body_json(json!({
                "type": "MARK_AGENT_GONE",
                "mark_agent_gone": {"agent_id": {"value": "agent-1"}}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1),
    );

    let config = ClientConfig::new(server.uri()).with_wait_time(Duration::from_secs(5));
    let client = ClusterStateClient::from_config(runtime.handle().clone(), &config);

    assert!(client.teardown("fw-1").unwrap().is_success());
    assert!(client.drain_agent("agent-1", None, false).unwrap().is_success());
    assert!(client.mark_agent_gone("agent-1").unwrap().is_success());
}

#[test]
fn test_timeout_is_distinct_error() {
    let runtime = runtime();
    let server = runtime.block_on(MockServer::start());
    mount(
        &runtime,
        &server,
        Mock::given(method("GET"))
            .and(path("/frameworks"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"frameworks": []}))
                    .set_delay(Duration::from_secs(2)),
            ),
    );

    let client = ClusterStateClient::new(runtime.handle().clone(), server.uri())
        .with_wait_time(Duration::from_millis(100));
    let err = client.fetch_frameworks().unwrap_err();

    assert!(matches!(err, ClientError::Timeout(_)));
    assert_eq!(client.wait_time(), Duration::from_millis(100));
}

#[test]
fn test_not_found_surfaces_status() {
    let runtime = runtime();
    let server = runtime.block_on(MockServer::start());

    let client = ClusterStateClient::new(runtime.handle().clone(), server.uri());
    let err = client.fetch_state().unwrap_err();

    assert!(err.is_not_found());
}
