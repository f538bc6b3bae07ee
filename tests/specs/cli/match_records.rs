// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sift match`.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

fn match_people(temp: &TempDir, args: &[&str]) -> Vec<String> {
    let path = write_file(temp, "people.jsonl", PEOPLE);
    let output = sift()
        .arg("match")
        .args(args)
        .arg("--input")
        .arg(&path)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );
    names(&output.stdout)
}

#[parameterized(
    numbers = { "{age} >= 28", vec!["ann", "cy", "dee"] },
    nested = { r#"{team.name} EQ "core""#, vec!["ann", "cy"] },
    membership = { r#"{name} IN ["bob", "dee", "zed"]"#, vec!["bob", "dee"] },
    contains_array = { r#"{tags} CONTAINS "lead""#, vec!["ann", "cy"] },
    null_tags = { "{tags} ISEMPTY", vec!["dee"] },
    grouped = { r#"({age} < 20 OR {age} > 40) AND {name} STARTSWITH "c""#, vec!["cy"] },
    everything = { "", vec!["ann", "bob", "cy", "dee"] },
)]
fn match_filters_records(filter: &str, expected: Vec<&str>) {
    let temp = TempDir::new().unwrap();
    assert_eq!(match_people(&temp, &[filter]), expected);
}

#[test]
fn match_sorts_and_limits() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        match_people(&temp, &["{age} > 18", "--sort", "{age} desc", "--limit", "2"]),
        vec!["cy", "ann"]
    );
}

#[test]
fn match_sorts_by_nested_property() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        match_people(&temp, &["", "-s", "{team.name} desc, {name} desc"]),
        vec!["bob", "cy", "ann", "dee"]
    );
}

#[test]
fn match_without_dot_notation_reads_dotted_keys() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        match_people(&temp, &[r#"{team.name} EQ "core""#, "--no-dot-notation"]),
        vec!["dee"]
    );
}

#[test]
fn match_reads_json_array_from_stdin() {
    let output = sift()
        .args(["match", "{n} != 2"])
        .write_stdin(r#"[{"name": "one", "n": 1}, {"name": "two", "n": 2}, {"name": "three", "n": 3}]"#)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(names(&output.stdout), vec!["one", "three"]);
}

#[test]
fn match_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "people.jsonl", PEOPLE);
    let output = sift()
        .args(["match", "{age} < 30", "-o", "json", "-i"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total"], 4);
    assert_eq!(json["matched"], 2);
    assert_eq!(json["filter"], "{age} LT 30");
    assert_eq!(json["records"][0]["name"], "bob");
    assert_eq!(json["records"][1]["name"], "dee");
    assert!(json.get("sort").is_none());
}

#[test]
fn match_binds_template_arguments() {
    let temp = TempDir::new().unwrap();
    assert_eq!(
        match_people(&temp, &["{name} EQ ? OR {age} EQ ?", "--arg", "bob", "--arg", "45"]),
        vec!["bob", "cy"]
    );
}

#[test]
fn match_bad_record_line() {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "bad.jsonl", "{\"a\": 1}\n{\"a\": \n");
    sift()
        .args(["match", "{a} EQ 1", "-i"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: line 2: "));
}

#[test]
fn match_bad_filter_fails_before_reading_input() {
    sift()
        .args(["match", "{a} EQ 'x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single quote"));
}

#[test]
fn match_bad_sort_shows_caret() {
    sift()
        .args(["match", "", "--sort", "{a}, desc"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid or unexpected sort token"))
        .stderr(predicate::str::contains("\n  {a}, desc\n       ^\n"));
}
