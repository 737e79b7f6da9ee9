//! Integration tests for the `diagram-plugin-example` binary entry point.
//!
//! Each test spawns the binary with a request on stdin, mirroring how a host
//! editor invokes the plugin.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use serde_json::{Value, json};

fn response_for(input: &str) -> Value {
    let mut command = cargo_bin_cmd!("diagram-plugin-example");
    let output = command.write_stdin(input).assert().success();
    serde_json::from_slice(&output.get_output().stdout).expect("stdout is one JSON document")
}

#[test]
fn initialize_request_advertises_example_type() {
    let response = response_for(r#"{"initialize":{}}"#);
    let entries = response
        .pointer("/initialize/capabilities/diagrams/availabilities")
        .and_then(Value::as_array)
        .expect("availabilities");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].pointer("/type/id"), Some(&json!("example")));
    assert_eq!(entries[0].get("available"), Some(&json!(true)));
}

#[test]
fn onchange_request_renders_example_graph() {
    let response = response_for(r#"{"onchange":{}}"#);
    let diagrams = response
        .pointer("/onchange/renderDiagram")
        .and_then(Value::as_array)
        .expect("rendered diagrams");
    assert_eq!(diagrams.len(), 1);
    assert_eq!(
        diagrams[0].get("content"),
        Some(&json!({
            "nodes": [{"key": "a"}, {"key": "b"}],
            "edges": [{"key": "a->b", "from": "a", "to": "b"}]
        }))
    );
}

#[test]
fn empty_envelope_yields_error_response() {
    let response = response_for("{}");
    assert_eq!(
        response,
        json!({"error": {"message": "unknown request type"}})
    );
}

#[test]
fn empty_input_exits_with_failure() {
    let mut command = cargo_bin_cmd!("diagram-plugin-example");
    command
        .write_stdin("")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("plugin request was empty"));
}

#[test]
fn malformed_input_exits_with_failure() {
    let mut command = cargo_bin_cmd!("diagram-plugin-example");
    command
        .write_stdin("not valid json")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("invalid plugin request JSON"));
}
