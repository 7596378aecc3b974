//! End-to-end tests for the `wordfreq` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn write_corpus(dir: &Path) {
    fs::write(dir.join("a.txt"), "Cat cat, dog!\n").unwrap();
    fs::write(dir.join("b.txt"), "Dog bird bird bird\n").unwrap();
}

#[test]
fn batch_mode_prints_ranked_table() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    let assert = cmd.arg(dir.path()).arg("--top").arg("3").assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    assert!(stdout.contains("RANK"));
    assert!(stdout.contains("KEY WORDS"));
    assert!(stdout.contains("FREQUENCY"));

    // Tie between cat and dog breaks lexicographically after bird.
    let bird = stdout.find("bird").unwrap();
    let cat = stdout.find("cat").unwrap();
    let dog = stdout.find("dog").unwrap();
    assert!(bird < cat && cat < dog, "unexpected order:\n{stdout}");
    assert!(stdout.contains("2 files, 7 words"));
}

#[test]
fn empty_directory_prints_header_only() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    let assert = cmd.arg(dir.path()).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();

    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("RANK"));
    // No ranked rows: the header is followed directly by the blank line
    // before the completion message.
    assert_eq!(lines.next().unwrap(), "");
    assert!(stdout.contains("0 files"));
}

#[test]
fn invalid_path_is_diagnosed() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.arg("definitely-not-here")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn repl_exits_on_exit_token() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("concurrent threads are supported"));
}

#[test]
fn repl_processes_path_then_quits() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());
    let input = format!("{}\nquit\n", dir.path().display());

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("RANK"))
        .stdout(predicate::str::contains("bird"));
}

#[test]
fn repl_survives_invalid_path() {
    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    cmd.write_stdin("no-such-path\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid path"));
}

#[test]
fn json_format_reports_ranking() {
    let dir = tempfile::tempdir().unwrap();
    write_corpus(dir.path());

    let mut cmd = Command::cargo_bin("wordfreq").unwrap();
    let assert = cmd
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .assert()
        .success();
    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("Failed to parse JSON output");

    assert_eq!(json["files"], 2);
    assert_eq!(json["total_words"], 7);
    assert_eq!(json["distinct_words"], 3);
    assert_eq!(json["ranking"][0]["word"], "bird");
    assert_eq!(json["ranking"][0]["count"], 3);
    assert_eq!(json["skipped"].as_array().unwrap().len(), 0);
}
