//! End-to-end tests for the `subsearch` binary: argument handling, exit
//! codes, and the all-failures path.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;

const CMD_TIMEOUT: Duration = Duration::from_secs(30);

fn subsearch_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("subsearch"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("NO_COLOR", "1");
    cmd
}

fn wordlist(lines: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create wordlist");
    file.write_all(lines.as_bytes())
        .expect("failed to write wordlist");
    file
}

#[test]
fn missing_arguments_exit_one_with_usage() {
    subsearch_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_wordlist_flag_exits_one() {
    subsearch_cmd()
        .arg("--domain")
        .arg("example.com")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--wordlist"));
}

#[test]
fn unreadable_wordlist_exits_one_with_diagnostic() {
    subsearch_cmd()
        .args(["-d", "example.com", "-w", "/definitely/not/a/wordlist.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wordlist"));
}

#[test]
fn invalid_domain_exits_one_before_probing() {
    let words = wordlist("www\n");
    subsearch_cmd()
        .args(["-d", "https://", "-w"])
        .arg(words.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn zero_concurrency_is_a_configuration_error() {
    let words = wordlist("www\n");
    subsearch_cmd()
        .args(["-d", "example.com", "-c", "0", "-w"])
        .arg(words.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn help_exits_zero() {
    subsearch_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("subsearch"));
}

#[test]
#[ignore = "network: run in CI"]
fn all_failing_candidates_exit_zero_with_no_output() {
    // RFC 2606 reserves .invalid, so every probe fails to resolve.
    let words = wordlist("www\napi\n\nmail\n");
    subsearch_cmd()
        .args(["-d", "test.invalid", "-t", "1", "-w"])
        .arg(words.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
#[ignore = "network: run in CI"]
fn json_report_emits_one_object_per_candidate() {
    let words = wordlist("www\napi\n");
    let assert = subsearch_cmd()
        .args(["-d", "test.invalid", "-t", "1", "--report", "json", "-w"])
        .arg(words.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2, "one JSON object per non-blank line");
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["status"], -1);
        assert!(
            value["target"]
                .as_str()
                .unwrap()
                .ends_with(".test.invalid")
        );
    }
}
