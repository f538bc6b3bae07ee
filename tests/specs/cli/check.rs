// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for `sift check` and `sift tree`.

#![allow(clippy::unwrap_used)]

mod common;
use common::*;
use yare::parameterized;

// =============================================================================
// check
// =============================================================================

#[parameterized(
    keywords = { "{status} eq open and {n} > 2", "{status} EQ \"open\" AND {n} GT 2\n" },
    precedence = { "{a} EQ 1 OR {b} EQ 2 AND {c} EQ 3", "({a} EQ 1 OR {b} EQ 2) AND {c} EQ 3\n" },
    array = { "{x} IN [A134,3774,true,\"true\",false,\"FALSE\"]", "{x} IN [\"A134\",3774,true,\"true\",false,\"FALSE\"]\n" },
    unary = { "{tags} isnotempty", "{tags} ISNOTEMPTY\n" },
    escaped_property = { r"{a\}b} EQ 1", "{a\\}b} EQ 1\n" },
)]
fn check_prints_canonical_filter(filter: &str, expected: &str) {
    sift()
        .arg("check")
        .arg(filter)
        .assert()
        .success()
        .stdout(expected.to_string());
}

#[test]
fn check_output_parses_to_itself() {
    let first = sift()
        .arg("check")
        .arg("({a} startswith 'x' OR {b} ~~ y) and {c} != null")
        .output()
        .unwrap();
    assert!(first.status.success());
    let canonical = String::from_utf8(first.stdout).unwrap();

    sift()
        .arg("check")
        .arg(canonical.trim_end())
        .assert()
        .success()
        .stdout(canonical);
}

#[test]
fn check_unterminated_quote_shows_caret() {
    sift()
        .arg("check")
        .arg(r#"{test0} EQ 1 OR {test1} EQ ""#)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error: syntax error at index 27"))
        .stderr(predicate::str::contains("double quote"))
        .stderr(predicate::str::contains(format!("\n  {}^\n", " ".repeat(27))));
}

#[test]
fn check_mismatched_group_fails() {
    sift()
        .arg("check")
        .arg("({a} EQ 1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("mismatched parenthesis"));
}

#[test]
fn check_binds_template_arguments() {
    sift()
        .args(["check", "{name} EQ ? AND {n} IN [?, ?]"])
        .args(["--arg", r#"x" OR {admin} EQ true"#])
        .args(["-a", "1", "-a", "two"])
        .assert()
        .success()
        .stdout("{name} EQ \"x\\\" OR {admin} EQ true\" AND {n} IN [1,\"two\"]\n");
}

#[test]
fn check_template_argument_count_must_match() {
    sift()
        .args(["check", "{a} EQ ?"])
        .assert()
        .success();
    sift()
        .args(["check", "{a} EQ ? AND {b} EQ ?", "--arg", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expects 2 argument(s) but 1 were given"));
}

#[test]
fn verbose_logs_to_stderr() {
    sift()
        .args(["check", "{a} EQ 1", "--verbose"])
        .assert()
        .success()
        .stdout("{a} EQ 1\n")
        .stderr(predicate::str::contains("DEBUG"));
}

// =============================================================================
// tree
// =============================================================================

#[test]
fn tree_prints_json() {
    let output = sift()
        .args(["tree", "{a} EQ 1 OR {b} ISNULL"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "logic": "or",
            "filters": [
                {"property": "a", "op": "eq", "value": 1},
                {"property": "b", "op": "isnull"}
            ]
        })
    );
}

#[test]
fn tree_of_blank_filter_is_null() {
    sift().args(["tree", " "]).assert().success().stdout("null\n");
}
