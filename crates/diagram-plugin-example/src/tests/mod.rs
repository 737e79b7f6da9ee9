//! Unit and behavioural tests for the reference plugin.


use std::ffi::OsString;
use std::io::{self, Cursor, Read, Write};
use std::process::ExitCode;

use diagram_plugin_protocol::handler::{DiagramProvider, RenderError};
use diagram_plugin_protocol::{Availability, Change, Context, Diagram, DiagramDescriptor};
use mockall::mock;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;

mock! {
    Provider {}
    impl DiagramProvider for Provider {
        fn availabilities(&self) -> Vec<Availability>;
        fn render<'a>(
            &self,
            change: Option<&'a Change>,
            context: Option<&'a Context>,
        ) -> Result<Vec<Diagram>, RenderError>;
    }
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdin closed"))
    }
}

struct FailingWriter;

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn exchange(input: &str) -> Result<Value, TransportError> {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut stdout = Vec::new();
    run_with_provider(&mut stdin, &mut stdout, false, &ExampleProvider)?;
    Ok(serde_json::from_slice(&stdout).expect("response is JSON"))
}

fn run_process(input: &str, stdin_is_terminal: bool) -> (ExitCode, String, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let exit = run(
        [OsString::from("diagram-plugin-example")],
        &mut stdin,
        &mut stdout,
        &mut stderr,
        stdin_is_terminal,
    );
    (
        exit,
        String::from_utf8(stdout).expect("stdout utf8"),
        String::from_utf8(stderr).expect("stderr utf8"),
    )
}

// ---------------------------------------------------------------------------
// Reference provider
// ---------------------------------------------------------------------------

#[test]
fn initialize_advertises_the_example_type() {
    let response = exchange(r#"{"initialize":{}}"#).expect("exchange succeeds");
    assert_eq!(
        response,
        json!({
            "initialize": {
                "capabilities": {
                    "diagrams": {
                        "availabilities": [
                            {"type": {"id": "example", "name": "Example"}, "available": true}
                        ]
                    }
                }
            }
        })
    );
}

#[test]
fn onchange_renders_the_two_node_graph() {
    let response = exchange(r#"{"onchange":{}}"#).expect("exchange succeeds");
    assert_eq!(
        response,
        json!({
            "onchange": {
                "renderDiagram": [{
                    "type": {"id": "example", "name": "Example"},
                    "content": {
                        "nodes": [{"key": "a"}, {"key": "b"}],
                        "edges": [{"key": "a->b", "from": "a", "to": "b"}]
                    }
                }]
            }
        })
    );
}

#[test]
fn provider_ignores_change_details() {
    let with_change = exchange(
        r#"{"onchange":{"change":{"action":"DELETE_FILE","source":"CUSTOM","filePath":"gone.sysl"},
            "context":{"module":"{}","settings":{"anything":[1]}}}}"#,
    )
    .expect("exchange succeeds");
    let without = exchange(r#"{"onchange":{}}"#).expect("exchange succeeds");
    assert_eq!(with_change, without);
}

#[test]
fn request_without_operation_is_answered_with_error() {
    let response = exchange("{}").expect("exchange succeeds");
    assert_eq!(
        response,
        json!({"error": {"message": "unknown request type"}})
    );
}

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[rstest]
#[case::empty("")]
#[case::whitespace("\n")]
fn blank_input_is_a_transport_failure(#[case] input: &str) {
    let err = exchange(input).expect_err("blank input must fail");
    assert!(matches!(err, TransportError::Codec(CodecError::EmptyInput)));
}

#[test]
fn malformed_input_is_a_transport_failure() {
    let mut stdout = Vec::new();
    let err = run_with_provider(
        &mut Cursor::new(b"not valid json".to_vec()),
        &mut stdout,
        false,
        &ExampleProvider,
    )
    .expect_err("malformed input must fail");
    assert!(matches!(err, TransportError::Codec(CodecError::Decode { .. })));
    assert!(stdout.is_empty(), "no response may be written");
}

#[test]
fn terminal_input_is_refused_before_reading() {
    let provider = MockProvider::new();
    let mut stdout = Vec::new();
    let err = run_with_provider(&mut FailingReader, &mut stdout, true, &provider)
        .expect_err("terminal input must be refused");
    assert!(matches!(err, TransportError::InteractiveInput));
    assert!(err.to_string().contains("pipe a JSON request"));
    assert!(stdout.is_empty());
}

#[test]
fn read_failure_is_reported() {
    let err = run_with_provider(&mut FailingReader, &mut Vec::new(), false, &ExampleProvider)
        .expect_err("read must fail");
    assert!(matches!(err, TransportError::Read { .. }));
    assert!(err.to_string().contains("stdin closed"));
}

#[test]
fn write_failure_is_reported() {
    let err = run_with_provider(
        &mut Cursor::new(br#"{"initialize":{}}"#.to_vec()),
        &mut FailingWriter,
        false,
        &ExampleProvider,
    )
    .expect_err("write must fail");
    assert!(matches!(err, TransportError::Write { .. }));
}

#[test]
fn response_is_written_without_trailing_newline() {
    let mut stdout = Vec::new();
    run_with_provider(
        &mut Cursor::new(br#"{"initialize":{}}"#.to_vec()),
        &mut stdout,
        false,
        &ExampleProvider,
    )
    .expect("exchange succeeds");
    assert_eq!(stdout.last(), Some(&b'}'));
}

#[test]
fn provider_failure_still_writes_a_response() {
    let mut provider = MockProvider::new();
    provider
        .expect_availabilities()
        .returning(|| vec![Availability::available(DiagramDescriptor::new("x"))]);
    provider
        .expect_render()
        .once()
        .returning(|_, _| Err(RenderError::failed("boom")));

    let mut stdout = Vec::new();
    run_with_provider(
        &mut Cursor::new(br#"{"onchange":{}}"#.to_vec()),
        &mut stdout,
        false,
        &provider,
    )
    .expect("soft failures complete the exchange");
    let response: Value = serde_json::from_slice(&stdout).expect("response is JSON");
    assert_eq!(
        response,
        json!({"error": {"message": "failed to render diagrams: boom"}})
    );
}

// ---------------------------------------------------------------------------
// Process entry
// ---------------------------------------------------------------------------

#[test]
fn run_succeeds_for_a_valid_request() {
    let (exit, stdout, stderr) = run_process(r#"{"initialize":{}}"#, false);
    assert_eq!(exit, ExitCode::SUCCESS);
    assert!(stdout.starts_with(r#"{"initialize":"#), "stdout: {stdout}");
    assert!(stderr.is_empty(), "stderr: {stderr}");
}

#[test]
fn run_succeeds_for_a_soft_error() {
    let (exit, stdout, _) = run_process("{}", false);
    assert_eq!(exit, ExitCode::SUCCESS);
    assert_eq!(stdout, r#"{"error":{"message":"unknown request type"}}"#);
}

#[rstest]
#[case::empty("", "plugin request was empty")]
#[case::malformed("{", "invalid plugin request JSON")]
fn run_fails_for_transport_errors(#[case] input: &str, #[case] message: &str) {
    let (exit, stdout, stderr) = run_process(input, false);
    assert_eq!(exit, ExitCode::FAILURE);
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(stderr.contains(message), "stderr: {stderr}");
}

#[test]
fn run_refuses_terminal_input() {
    let (exit, stdout, stderr) = run_process(r#"{"initialize":{}}"#, true);
    assert_eq!(exit, ExitCode::FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("pipe a JSON request"), "stderr: {stderr}");
}
