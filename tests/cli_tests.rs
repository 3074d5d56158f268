//! Integration tests for the html2exe binary
//!
//! These run the built binary against temp directories and check exit codes
//! and stdout.

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn html2exe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_html2exe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run html2exe")
}

fn site() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        dir.path().join("index.html"),
        r#"<script src="https://cdn.example.com/lib.js"></script>"#,
    )
    .unwrap();
    fs::write(dir.path().join("app.ts"), "export {}").unwrap();
    dir
}

#[test]
fn test_recommend_json_for_folder() {
    let dir = site();
    let output = html2exe(&["recommend", dir.path().to_str().unwrap(), "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"{"packaging":"single-file","optimization":"production","offline":true,"console":false}"#
    );
}

#[test]
fn test_recommend_json_for_url() {
    let output = html2exe(&["recommend", "https://example.com", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        r#"{"packaging":"single-file","optimization":"portable","offline":true,"console":false}"#
    );
}

#[test]
fn test_flag_beats_config_file_override() {
    let dir = site();
    let config = dir.path().join("options.json");
    fs::write(&config, r#"{"overrides": {"console": true, "packaging": "directory"}}"#).unwrap();

    let output = html2exe(&[
        "recommend",
        dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
        "--console",
        "false",
        "--json",
    ]);
    assert!(output.status.success());

    let preset: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(preset["packaging"], "directory");
    assert_eq!(preset["console"], false);
}

#[test]
fn test_explain_lists_rules() {
    let dir = site();
    let output = html2exe(&["recommend", dir.path().to_str().unwrap(), "--explain"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(dev-artifacts)"));
    assert!(stdout.contains("(external-references)"));
    assert!(stdout.contains("(console-hidden)"));
}

#[test]
fn test_missing_folder_fails() {
    let output = html2exe(&["recommend", "/no/such/html2exe/site"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("/no/such/html2exe/site"));
}

#[test]
fn test_failure_reported_once_on_stderr() {
    let output = html2exe(&["recommend", "/no/such/html2exe/site"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert_eq!(lines.len(), 1, "unexpected stderr: {}", stderr);
    assert!(lines[0].starts_with("✗ "));
}

#[test]
fn test_analyze_json_for_url_is_null() {
    let output = html2exe(&["analyze", "https://example.com", "--json"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[test]
fn test_analyze_text_output() {
    let dir = site();
    let output = html2exe(&["analyze", dir.path().to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Files:           2"));
    assert!(stdout.contains("app.ts"));
    assert!(stdout.contains("External refs:   yes"));
}

#[test]
fn test_rules_in_priority_order() {
    let output = html2exe(&["rules"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let url = stdout.find("url-source").unwrap();
    let large = stdout.find("large-folder").unwrap();
    let small = stdout.find("small-folder").unwrap();
    assert!(url < large && large < small);
}

#[test]
fn test_validate_config() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{"selector": {"large_project_bytes": 1024}}"#).unwrap();
    fs::write(&bad, r#"{"selector": {"dev_artifact_extensions": []}}"#).unwrap();

    assert!(html2exe(&["validate", good.to_str().unwrap()]).status.success());
    assert_eq!(html2exe(&["validate", bad.to_str().unwrap()]).status.code(), Some(1));
}

#[test]
fn test_invalid_url_fails() {
    let output = html2exe(&["recommend", "http://"]);
    assert_eq!(output.status.code(), Some(1));
}
