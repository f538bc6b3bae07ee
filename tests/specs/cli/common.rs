// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn sift() -> Command {
    let mut cmd = cargo_bin_cmd!("sift");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to `name` inside `temp` and returns its path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// A small JSON lines file of people used by the match specs.
pub const PEOPLE: &str = r#"{"name": "ann", "age": 31, "team": {"name": "core"}, "tags": ["lead"]}
{"name": "bob", "age": 17, "team": {"name": "web"}, "tags": []}
{"name": "cy", "age": 45, "team": {"name": "core"}, "tags": ["ops", "lead"]}
{"name": "dee", "age": 28, "team.name": "core", "tags": null}
"#;

/// Names of the records printed as JSON lines.
pub fn names(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| {
            let record: serde_json::Value = serde_json::from_str(line).unwrap();
            record["name"].as_str().unwrap().to_string()
        })
        .collect()
}
