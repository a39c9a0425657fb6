// Integration tests for the gitaudit CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify flag
// handling, exit codes, and stderr output. End-to-end analysis runs
// over real repositories live in cli_atdd.rs.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the gitaudit binary.
fn gitaudit() -> Command {
    Command::cargo_bin("gitaudit").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    gitaudit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitaudit"));
}

#[test]
fn cli_help_flag() {
    gitaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Git history integrity"));
}

#[test]
fn analyze_rejects_unknown_format() {
    gitaudit()
        .args(["analyze", ".", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn analyze_rejects_output_dir_combined_with_json() {
    // --output-dir already decides both file paths
    gitaudit()
        .args([
            "analyze",
            ".",
            "--output-dir",
            "/tmp/out",
            "--json",
            "/tmp/report.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn analyze_missing_path_exits_with_runtime_failure() {
    gitaudit()
        .args(["analyze", "/definitely/not/a/path"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    gitaudit()
        .args(["analyze", ".", "--quiet", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
