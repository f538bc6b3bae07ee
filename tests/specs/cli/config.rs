// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sift.toml` configuration.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn config_in_current_directory_sets_output() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "sift.toml", "output = \"json\"\n");

    sift()
        .args(["sort", "{a}"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direction\": \"asc\""));
}

#[test]
fn flag_overrides_config_output() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "sift.toml", "output = \"json\"\n");

    sift()
        .args(["sort", "{a}", "-o", "text"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("{a} ASC\n");
}

#[test]
fn config_flag_points_at_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "custom.toml", "max_depth = 2\n");

    sift()
        .args(["check", "((({a} EQ 1)))", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("nested too deeply"))
        .stderr(predicate::str::contains("maximum nesting depth is 2"));

    sift()
        .args(["check", "((({a} EQ 1)))"])
        .assert()
        .success()
        .stdout("((({a} EQ 1)))\n");
}

#[test]
fn config_disables_dot_notation() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "sift.toml", "dot_notation = false\n");
    let input = write_file(&temp, "people.jsonl", PEOPLE);

    let output = sift()
        .args(["match", r#"{team.name} EQ "core""#, "-i"])
        .arg(&input)
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(names(&output.stdout), vec!["dee"]);
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "sift.toml", "output = \"yaml\"\n");

    sift()
        .args(["sort", "{a}"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: config error"));
}

#[test]
fn missing_config_flag_file_is_reported() {
    let temp = TempDir::new().unwrap();

    sift()
        .args(["sort", "{a}", "--config", "missing.toml"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing.toml"));
}
