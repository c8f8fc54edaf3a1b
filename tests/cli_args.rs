//! Integration tests for the userfetch binary
//!
//! Runs the compiled binary against argument errors and a local wiremock server.

use std::process::{Command, Output};

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_userfetch"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute userfetch")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("userfetch"), "Help should mention userfetch");
    assert!(stdout.contains("--base-url"), "Help should mention --base-url");
    assert!(stdout.contains("--max-attempts"), "Help should mention --max-attempts");
}

#[test]
fn test_missing_user_id_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected missing USER_ID to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("USER_ID"), "Should name the missing argument: {}", stderr);
}

#[test]
fn test_invalid_base_url_prints_error_and_exits() {
    let output = run_cli(&["--base-url", "not a url", "1"]);
    assert!(!output.status.success(), "Expected invalid base URL to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid base URL"),
        "Should print error message about the base URL: {}",
        stderr
    );
}

#[test]
fn test_zero_max_attempts_is_rejected() {
    let output = run_cli(&["--max-attempts", "0", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid max attempts"), "stderr: {}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_repeated_ids_print_records_and_fetch_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "1",
            "full_name": "Ann Lee",
            "email_address": "ann@x.com"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = run_cli(&["--base-url", &uri, "1", "1"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let record: Value = serde_json::from_str(line).expect("Each line should be JSON");
        assert_eq!(record["id"], "1");
        assert_eq!(record["name"], "Ann Lee");
        assert_eq!(record["email"], "ann@x.com");
        assert!(record["created_at"].is_string());
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unavailable_upstream_exits_with_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let uri = server.uri();
    let output = run_cli(&["--base-url", &uri, "--max-attempts", "2", "9"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("upstream unavailable"), "stderr: {}", stderr);
    assert!(stderr.contains("2 attempt(s)"), "stderr: {}", stderr);
}
