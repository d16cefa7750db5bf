//! Integration tests for the Substrscan CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Test CLI binary exists and responds to --help
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("longest repeated substring"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("substrscan"));
}

/// Test invalid subcommand shows error
#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

/// Test exact visualization output for a literal input
#[test]
fn test_scan_literal_text_output() {
    let expected = concat!(
        "String to scan: aa\n",
        "_ \n",
        "aa\n",
        " *\n",
        " _\n",
        "aa\n",
        "* \n",
    );

    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.args(["scan", "--text", "aa"])
        .assert()
        .success()
        .stdout(predicate::eq(expected));
}

/// Test the default input is the generated Fibonacci word
#[test]
fn test_scan_generated_word() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.args(["scan", "--generations", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("String to scan: ba\n"));
}

/// Test JSON report shape
#[test]
fn test_scan_json_report() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    let assert = cmd
        .args(["scan", "--text", "abab", "--format", "json"])
        .assert()
        .success();

    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(report["text"], "abab");
    assert_eq!(report["table"]["lengths"][0], 2);
    assert_eq!(report["table"]["positions"][0], 2);
    assert_eq!(report["statistics"]["positions_scanned"], 4);
}

/// Test file input with a temporary fixture
#[test]
fn test_scan_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("input.txt");
    fs::write(&input, "abab\n").unwrap();

    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.args(["scan", "--file"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("String to scan: abab\n"));
}

/// Test missing input file fails with context
#[test]
fn test_scan_missing_file() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.args(["scan", "--file", "no-such-input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

/// Test sequential and forced-parallel runs agree byte for byte
#[test]
fn test_mode_equivalence() {
    let mut sequential = Command::cargo_bin("substrscan").unwrap();
    let sequential_out = sequential
        .args(["scan", "--mode", "sequential"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let mut parallel = Command::cargo_bin("substrscan").unwrap();
    let parallel_out = parallel
        .args(["scan", "--mode", "parallel", "--chunk-size", "5"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential_out, parallel_out);
}

/// Test statistics block
#[test]
fn test_scan_stats() {
    let mut cmd = Command::cargo_bin("substrscan").unwrap();
    cmd.args(["scan", "--text", "abab", "--stats", "--no-render"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Scan Statistics"))
        .stdout(predicate::str::contains("Positions scanned:"));
}
