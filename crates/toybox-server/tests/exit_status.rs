//! Process-level tests: the `toybox-server` binary's exit status and stdout.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

/// Run the binary with `input` on stdin and wait for it to exit.
fn run_binary(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_toybox-server"))
        .arg("--log-level")
        .arg("error")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn toybox-server");

    let mut stdin = child.stdin.take().expect("stdin");
    stdin.write_all(input).expect("write stdin");
    drop(stdin);

    child.wait_with_output().expect("wait for toybox-server")
}

fn stdout_lines(output: &Output) -> Vec<Value> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn test_clean_eof_exits_zero() {
    let input = concat!(
        r#"{"id":1,"operation":"squareRoot","arguments":{"n":9}}"#,
        "\n",
        r#"{"id":2,"operation":"doesNotExist","arguments":{}}"#,
        "\n",
    );
    let output = run_binary(input.as_bytes());

    assert!(output.status.success(), "status: {:?}", output.status);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], json!({ "id": 1, "result": 3 }));
    assert_eq!(lines[1]["error"], "UnknownOperation: doesNotExist");
}

#[test]
fn test_empty_input_exits_zero() {
    let output = run_binary(b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_truncated_frame_exits_non_zero() {
    let input = concat!(
        r#"{"id":1,"operation":"greet","arguments":{"name":"Ada"}}"#,
        "\n",
        r#"{"id":2"#,
    );
    let output = run_binary(input.as_bytes());

    assert!(!output.status.success(), "status: {:?}", output.status);
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], json!({ "id": 1, "result": "Hello, Ada!" }));
    assert!(String::from_utf8_lossy(&output.stderr).contains("TransportError"));
}
