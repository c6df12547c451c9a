// (C) Copyright 2019-2020 Hewlett Packard Enterprise Development LP

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(content: &str) -> TempDir {
  let dir = tempfile::tempdir().unwrap();
  fs::write(dir.path().join("Dockerfile"), content).unwrap();

  dir
}

fn summary() -> Command {
  Command::cargo_bin("dockerfile-summary").unwrap()
}

#[test]
fn reads_dockerfile_in_current_dir() {
  let dir = fixture("# base\nFROM ubuntu\nUSER 1000:1000\n");

  let output = summary()
    .current_dir(dir.path())
    .assert()
    .success()
    .get_output()
    .stdout
    .clone();

  let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
  assert_eq!(value, serde_json::json!({
    "comments": ["base"],
    "commands": {
      "from_commands": [{
        "image": "ubuntu",
        "registry": "Docker Hub",
        "tag": "latest",
        "local_name": null
      }],
      "user_commands": [{ "user": "1000", "group": "1000" }]
    }
  }));
}

#[test]
fn compact_json() {
  let dir = fixture("FROM alpine:3.19\n");

  summary()
    .arg(dir.path().join("Dockerfile"))
    .arg("--compact")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""tag":"3.19""#))
    .stdout(predicate::str::contains("\n  ").not());
}

#[test]
fn yaml_output() {
  let dir = fixture("FROM node:18 AS builder\n");

  summary()
    .arg(dir.path().join("Dockerfile"))
    .args(&["--format", "yaml"])
    .assert()
    .success()
    .stdout(predicate::str::contains("local_name: builder"));
}

#[test]
fn reads_stdin() {
  summary()
    .arg("-")
    .write_stdin("USER app:staff\n")
    .assert()
    .success()
    .stdout(predicate::str::contains(r#""group": "staff""#));
}

#[test]
fn syntax_error_exits_nonzero() {
  let dir = fixture("FROM alpine\nRUN echo hello\n");

  summary()
    .current_dir(dir.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("could not parse Dockerfile"));
}

#[test]
fn missing_file() {
  let dir = tempfile::tempdir().unwrap();

  summary()
    .current_dir(dir.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("could not open Dockerfile"));
}
