//! Smoke tests for the keypad-calc binary

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keypad_calc() -> Command {
    let mut cmd = Command::cargo_bin("keypad-calc").expect("keypad-calc binary should exist");
    cmd.env_remove("KEYPAD_CALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    keypad_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("repl"))
        .stdout(predicate::str::contains("keys"));
}

#[test]
fn test_no_args_fails() {
    keypad_calc().assert().failure();
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_addition() {
    keypad_calc()
        .args(["--color", "never", "run", "1+2="])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_run_division_by_zero_resets() {
    keypad_calc()
        .args(["--color", "never", "run", "5/0="])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn test_run_percent() {
    keypad_calc()
        .args(["--color", "never", "run", "8%"])
        .assert()
        .success()
        .stdout("0.08\n");
}

#[test]
fn test_run_steps() {
    keypad_calc()
        .args(["--color", "never", "run", "--steps", "9-4="])
        .assert()
        .success()
        .stdout(predicate::str::contains("  -  9-"))
        .stdout(predicate::str::ends_with("5\n"));
}

#[test]
fn test_run_unknown_key_fails() {
    keypad_calc()
        .args(["run", "1+y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown key"));
}

#[test]
fn test_run_fraction_digits_flag() {
    keypad_calc()
        .args(["--color", "never", "--fraction-digits", "3", "run", "1/3="])
        .assert()
        .success()
        .stdout("0.333\n");
}

#[test]
fn test_run_fraction_digits_out_of_range() {
    keypad_calc()
        .args(["--fraction-digits", "40", "run", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

// ============================================================================
// Config file
// ============================================================================

#[test]
fn test_config_file_fraction_digits() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("keypad-calc.yaml");
    fs::write(&path, "color: Never\nengine:\n  fraction_digits: 2\n").unwrap();

    keypad_calc()
        .arg("--config")
        .arg(&path)
        .args(["run", "2/3="])
        .assert()
        .success()
        .stdout("0.67\n");
}

#[test]
fn test_config_file_missing() {
    keypad_calc()
        .args(["--config", "/nonexistent/keypad-calc.yaml", "run", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

// ============================================================================
// repl and keys
// ============================================================================

#[test]
fn test_repl_session() {
    keypad_calc()
        .args(["--color", "never", "repl"])
        .write_stdin("6\nx7\n=\nq\n")
        .assert()
        .success()
        .stdout("6\n6×7\n42\n");
}

#[test]
fn test_keys_lists_bindings() {
    keypad_calc()
        .args(["--color", "never", "keys"])
        .assert()
        .success()
        .stdout(predicate::str::contains("decimal point"))
        .stdout(predicate::str::contains("toggle sign"));
}
