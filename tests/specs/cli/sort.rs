// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sift sort`.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

#[parameterized(
    mixed = { "{test} desc, {moose}, {rest} desc", "{test} DESC, {moose} ASC, {rest} DESC\n" },
    trailing_comma = { "{a} asc,", "{a} ASC\n" },
    escaped = { r"{a\}b} desc", "{a\\}b} DESC\n" },
    no_comma = { "{a} {b} desc", "{a} ASC, {b} DESC\n" },
    repeated_order = { "{a} asc desc", "{a} DESC\n" },
)]
fn sort_prints_canonical_list(text: &str, expected: &str) {
    sift()
        .args(["sort", text])
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn sort_json_output() {
    let output = sift()
        .args(["sort", "{a} desc, {b}", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"property": "a", "direction": "desc"},
            {"property": "b", "direction": "asc"}
        ])
    );
}

#[parameterized(
    order_first = { "desc {a}", 0 },
    order_after_comma = { "{a}, desc", 5 },
    bare_word = { "name", 0 },
)]
fn sort_errors_point_at_token(text: &str, index: usize) {
    sift()
        .args(["sort", text])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with(format!("error: syntax error at index {index}")))
        .stderr(predicate::str::contains(format!("\n  {}^\n", " ".repeat(index))));
}
