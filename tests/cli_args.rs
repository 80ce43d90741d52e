//! Tests for CLI argument parsing.
//!
//! These run the built binary without a terminal, so they only cover
//! paths that exit before the UI starts.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn textsheet_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_textsheet"))
}

#[test]
fn test_help_lists_options() {
    let output = textsheet_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--text"));
    assert!(stdout.contains("--tick-rate-ms"));
    assert!(stdout.contains("--print"));
}

#[test]
fn test_version_flag() {
    let output = textsheet_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("nope.toml");

    let output = textsheet_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn test_invalid_tick_rate_exits_with_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "").expect("Failed to write config");

    let output = textsheet_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--tick-rate-ms")
        .arg("0")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("tick_rate_ms"));
}

#[test]
fn test_unknown_flag_is_rejected() {
    let output = textsheet_cmd()
        .arg("--bogus")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}
