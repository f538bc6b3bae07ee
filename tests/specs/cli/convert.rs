// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sift convert`.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

const NATIVE: &str = r#"{
  "logic": "and",
  "filters": [
    {"logic": "or", "filters": [
      {"property": "a", "op": "eq", "value": 1},
      {"property": "b", "op": "eq", "value": 2}
    ]},
    {"property": "c", "op": "eq", "value": 3}
  ]
}"#;

const LEGACY: &str = r#"{
  "logic": "or",
  "filters": [
    {"field": "status", "operator": "neq", "value": "done"},
    {"field": "owner", "operator": "isnull"}
  ]
}"#;

#[test]
fn convert_native_tree_from_file() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "filter.json", NATIVE);

    sift()
        .arg("convert")
        .arg(&path)
        .assert()
        .success()
        .stdout("({a} EQ 1 OR {b} EQ 2) AND {c} EQ 3\n");
}

#[test]
fn convert_legacy_tree_from_stdin() {
    sift()
        .arg("convert")
        .write_stdin(LEGACY)
        .assert()
        .success()
        .stdout("{status} NEQ \"done\" OR {owner} ISNULL\n");
}

#[test]
fn convert_dash_reads_stdin() {
    sift()
        .args(["convert", "-"])
        .write_stdin(r#"{"property": "x", "op": "gte", "value": 5}"#)
        .assert()
        .success()
        .stdout("{x} GTE 5\n");
}

#[test]
fn converted_text_parses_back_to_same_tree() {
    let text = sift().arg("convert").write_stdin(NATIVE).output().unwrap();
    let text = String::from_utf8(text.stdout).unwrap();

    let output = sift()
        .arg("tree")
        .arg(text.trim_end())
        .output()
        .unwrap();
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let original: serde_json::Value = serde_json::from_str(NATIVE).unwrap();
    assert_eq!(tree, original);
}

#[test]
fn convert_rejects_unknown_operator() {
    sift()
        .arg("convert")
        .write_stdin(r#"{"filters": [{"property": "a", "op": "near", "value": 1}]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid operator 'near'"))
        .stderr(predicate::str::contains("hint: valid operators are"));
}

#[test]
fn convert_rejects_bad_json() {
    sift()
        .arg("convert")
        .write_stdin("{\"logic\": ")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: json error"));
}

#[test]
fn convert_missing_file() {
    let temp = TempDir::new().unwrap();
    sift()
        .args(["convert", "nope.json"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open nope.json"));
}
