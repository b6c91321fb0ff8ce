//! End-to-end tests for the `jdelta` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("jdelta").unwrap();
    cmd.arg("--no-color");
    cmd
}

fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn help_lists_subcommands() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn identical_documents() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"a": [1, 2], "b": {"c": null}}"#);
    let b = write(&dir, "b.json", br#"{"b": {"c": null}, "a": [1, 2]}"#);

    cli()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("✔ No differences found.\n");
}

#[test]
fn reports_classified_differences() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"a": {"b": 1}, "gone": true, "list": [1, 2, 3]}"#);
    let b = write(&dir, "b.json", br#"{"a": {"b": 2}, "new": true, "list": [1, 2]}"#);

    cli()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("CHANGED $.a.b value differs: 1 → 2"))
        .stdout(predicate::str::contains(format!(
            "REMOVED $.gone present only in {}",
            a.display()
        )))
        .stdout(predicate::str::contains(format!(
            "ADDED   $.new present only in {}",
            b.display()
        )))
        .stdout(predicate::str::contains("LENGTH  $.list list length differs: 3 vs 2"))
        .stdout(predicate::str::contains("REMOVED $.list[2]"));
}

#[test]
fn relaxed_mode_ignores_scalar_order() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", b"[1, 2, 3]");
    let b = write(&dir, "b.json", b"[3, 2, 1]");

    cli()
        .args(["compare", "--relaxed"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found."));

    cli()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("CHANGED $[0]"))
        .stdout(predicate::str::contains("CHANGED $[2]"))
        .stdout(predicate::str::contains("$[1]").not());
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"x": 1}"#);
    let b = write(&dir, "b.json", br#"{"x": [1]}"#);

    let output = cli()
        .args(["--format", "json", "compare"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([
            {"kind": "TYPE", "path": "$.x", "message": "$.x type differs: integer vs array"}
        ])
    );
}

#[test]
fn summary_line() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"a": 1, "b": 2}"#);
    let b = write(&dir, "b.json", br#"{"b": 2, "c": 3}"#);

    cli()
        .args(["compare", "--summary"])
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 differences: 1 REMOVED, 1 ADDED"));
}

#[test]
fn config_file_sets_mode_and_labels() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"tags": ["x", "y"], "old": 1}"#);
    let b = write(&dir, "b.json", br#"{"tags": ["y", "x"]}"#);
    let config = write(
        &dir,
        "jdelta.toml",
        b"[diff]\nmode = \"relaxed\"\nleft_label = \"expected\"\n",
    );

    cli()
        .arg("--config")
        .arg(&config)
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .success()
        .stdout("REMOVED $.old present only in expected\n");
}

#[test]
fn windows1252_input() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", b"{\"navn\": \"S\xF8ren\"}");
    let b = write(&dir, "b.json", "{\"navn\": \"Søren\"}".as_bytes());

    cli()
        .args(["compare", "--encoding", "windows1252"])
        .arg(&a)
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found."));

    // Same text, different encodings on disk.
    cli()
        .args(["compare"])
        .arg(&a)
        .arg(&b)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not valid utf8"));
}

#[test]
fn missing_file_exits_1() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", b"{}");

    cli()
        .arg("compare")
        .arg(&a)
        .arg(dir.path().join("missing.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot read"))
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn parse_error_exits_2() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", b"{}");
    let b = write(&dir, "b.json", b"{\"a\": 1,, }");

    cli()
        .arg("compare")
        .arg(&a)
        .arg(&b)
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("parse error"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn depth_limit_exits_3() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"a": {"b": {"c": 1}}}"#);

    cli()
        .args(["compare", "--max-depth", "2"])
        .arg(&a)
        .arg(&a)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("maximum depth 2 exceeded at $.a.b.c"));
}

#[test]
fn default_depth_limit_applies_to_deep_files() {
    let dir = TempDir::new().unwrap();
    let deep = |n: usize| format!("{}1{}", "[".repeat(n), "]".repeat(n));
    let shallow = write(&dir, "shallow.json", deep(300).as_bytes());
    let a = write(&dir, "a.json", deep(600).as_bytes());

    cli()
        .arg("compare")
        .arg(&shallow)
        .arg(&shallow)
        .assert()
        .success()
        .stdout(predicate::str::contains("No differences found."));

    cli()
        .arg("compare")
        .arg(&a)
        .arg(&a)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("maximum depth 512 exceeded"));
}

#[test]
fn check_command() {
    let dir = TempDir::new().unwrap();
    let a = write(&dir, "a.json", br#"{"a": [[1]]}"#);
    let bad = write(&dir, "bad.json", b"[1,");

    cli()
        .arg("check")
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("(object, depth 3)"));

    cli()
        .arg("check")
        .arg(&a)
        .arg(&bad)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("bad.json"));
}
