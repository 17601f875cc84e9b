//! Tests for the `password-validation` binary

mod common;
use common::{run_password_validation, stdout_of};

const LENGTH_MSG: &str = "Password must be at least 12 characters.";
const UPPER_MSG: &str = "Password must contain at least one uppercase letter.";
const SYMBOL_MSG: &str = "Password must contain at least one symbol.";

// ============================================================================
// TEXT OUTPUT
// ============================================================================

#[test]
fn test_valid_password_prints_nothing() {
    let output = run_password_validation(&["LongEnoughPassw0rd!"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_short_password_reports_every_rule() {
    let output = run_password_validation(&["short"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_of(&output),
        format!("{}\n{}\n{}\n", LENGTH_MSG, UPPER_MSG, SYMBOL_MSG)
    );
}

#[test]
fn test_only_triggered_rules_are_printed() {
    let output = run_password_validation(&["alllowercase123"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), format!("{}\n{}\n", UPPER_MSG, SYMBOL_MSG));
}

#[test]
fn test_empty_password_fails_every_rule() {
    let output = run_password_validation(&[""]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output).lines().count(), 3);
}

#[test]
fn test_missing_argument() {
    let output = run_password_validation(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "No password provided.\n");
}

#[test]
fn test_leading_dash_password() {
    let output = run_password_validation(&["-Leading-pass-w0rd"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_non_ascii_uppercase_satisfies_uppercase_rule() {
    let output = run_password_validation(&["Ésterházy-long"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_double_dash_passes_flag_like_password() {
    let output = run_password_validation(&["--", "--format"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), format!("{}\n{}\n", LENGTH_MSG, UPPER_MSG));
}

// ============================================================================
// JSON OUTPUT
// ============================================================================

#[test]
fn test_json_report_for_invalid_password() {
    let output = run_password_validation(&["--format", "json", "alllowercase123"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["policy"]["min_length"], 12);

    let rules: Vec<&str> = report["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["rule"].as_str().unwrap())
        .collect();
    assert_eq!(rules, vec!["missing_uppercase", "missing_symbol"]);
}

#[test]
fn test_json_report_for_valid_password() {
    let output = run_password_validation(&["LongEnoughPassw0rd!", "--format", "json"]);

    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["valid"], true);
    assert!(report["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_json_format_keeps_missing_argument_message() {
    let output = run_password_validation(&["--format", "json"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "No password provided.\n");
}

// ============================================================================
// UTILITY FLAGS
// ============================================================================

#[test]
fn test_completions_do_not_need_password() {
    let output = run_password_validation(&["--completions", "zsh"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("password-validation"));
}

#[test]
fn test_password_is_never_logged() {
    let output = std::process::Command::new(common::password_validation_binary())
        .arg("SuperSecret-Value1")
        .env("RUST_LOG", "debug")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validating password of 18 character(s)"));
    assert!(!stderr.contains("SuperSecret-Value1"));
}
