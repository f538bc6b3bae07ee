// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reading JSON records from files or stdin.
//!
//! Input is either one JSON array of records or JSON lines (one record per
//! line, blank lines ignored). The shape is decided by the first non-blank
//! character.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};

use serde_json::Value as JsonValue;

use crate::error::{Error, Result};

/// Opens `path` for reading, or stdin when `path` is `None` or `-`.
pub fn open(path: Option<&str>) -> Result<Box<dyn BufRead>> {
    match path {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::Open {
                path: path.to_string(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Reads all of `reader` as a string.
pub fn read_to_string(mut reader: impl Read) -> Result<String> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(content)
}

/// Reads every record from `reader`.
pub fn read(reader: impl Read) -> Result<Vec<JsonValue>> {
    let content = read_to_string(reader)?;
    if content.trim_start().starts_with('[') {
        let records: Vec<JsonValue> = serde_json::from_str(&content)?;
        tracing::debug!(count = records.len(), "read json array");
        return Ok(records);
    }

    let mut records = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| Error::RecordLine {
            line: line_num + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    tracing::debug!(count = records.len(), "read json lines");
    Ok(records)
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
