// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordering of JSON records by a sort list.

use std::cmp::Ordering;

use serde_json::Value as JsonValue;

use crate::filter::resolve;

use super::{Direction, Sort};

/// Compares two records key by key.
///
/// Values of different kinds order as missing < null < boolean < number <
/// string < array < object. `Desc` reverses a key's order.
pub fn compare(a: &JsonValue, b: &JsonValue, sorts: &[Sort], dot_notation: bool) -> Ordering {
    for sort in sorts {
        let left = resolve(a, &sort.property, dot_notation);
        let right = resolve(b, &sort.property, dot_notation);
        let ordering = match sort.direction {
            Direction::Asc => compare_values(left, right),
            Direction::Desc => compare_values(left, right).reverse(),
        };
        if ordering.is_ne() {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Sorts records in place; records with equal keys keep their order.
pub fn sort_records(records: &mut [JsonValue], sorts: &[Sort], dot_notation: bool) {
    if sorts.is_empty() {
        return;
    }
    records.sort_by(|a, b| compare(a, b, sorts, dot_notation));
}

fn rank(value: Option<&JsonValue>) -> u8 {
    match value {
        None => 0,
        Some(JsonValue::Null) => 1,
        Some(JsonValue::Bool(_)) => 2,
        Some(JsonValue::Number(_)) => 3,
        Some(JsonValue::String(_)) => 4,
        Some(JsonValue::Array(_)) => 5,
        Some(JsonValue::Object(_)) => 6,
    }
}

fn compare_values(a: Option<&JsonValue>, b: Option<&JsonValue>) -> Ordering {
    match (a, b) {
        (Some(JsonValue::Bool(x)), Some(JsonValue::Bool(y))) => x.cmp(y),
        (Some(JsonValue::Number(x)), Some(JsonValue::Number(y))) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
        (Some(JsonValue::String(x)), Some(JsonValue::String(y))) => x.cmp(y),
        (Some(JsonValue::Array(xs)), Some(JsonValue::Array(ys))) => xs
            .iter()
            .zip(ys)
            .map(|(x, y)| compare_values(Some(x), Some(y)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| xs.len().cmp(&ys.len())),
        _ => rank(a).cmp(&rank(b)),
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
