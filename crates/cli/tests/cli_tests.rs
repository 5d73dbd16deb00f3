//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("Task Duration Predictor"),
        "Should show app name"
    );
    assert!(stdout.contains("predict"), "Should show predict command");
    assert!(stdout.contains("feedback"), "Should show feedback command");
    assert!(stdout.contains("metrics"), "Should show metrics command");
    assert!(stdout.contains("status"), "Should show status command");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("tp"), "Should show binary name");
}

/// Test predict subcommand help
#[test]
fn test_predict_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "predict", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Predict help should succeed");
    assert!(stdout.contains("CATEGORY"), "Should show category argument");
    assert!(stdout.contains("--priority"), "Should show priority option");
    assert!(stdout.contains("--subtasks"), "Should show subtasks option");
    assert!(
        stdout.contains("--deadline-days"),
        "Should show deadline-days option"
    );
}

/// Test feedback subcommand help
#[test]
fn test_feedback_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "feedback", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Feedback help should succeed");
    assert!(stdout.contains("--actual"), "Should show actual option");
    assert!(
        stdout.contains("--predicted"),
        "Should show predicted option"
    );
}

/// Test format option
#[test]
fn test_format_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("table"), "Should show table format");
    assert!(stdout.contains("json"), "Should show json format");
}

/// Test api-url option
#[test]
fn test_api_url_option() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--api-url"), "Should show api-url option");
    assert!(stdout.contains("TP_API_URL"), "Should show env var");
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test missing required argument error handling
#[test]
fn test_missing_argument() {
    let output = Command::new("cargo")
        .args(["run", "-p", "tp-cli", "--", "feedback"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing arguments should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("required") || stderr.contains("error"),
        "Should show error about missing argument"
    );
}
