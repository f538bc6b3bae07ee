// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of filters against JSON records.
//!
//! Evaluation is permissive: type mismatches resolve to a defined boolean
//! and never fail. Comparison rules follow the usual dynamic-language
//! conventions records are typically written against:
//!
//! - `EQ` is strict: `1` never equals `"1"`.
//! - `NEQ` is loose: `null` equals a missing property, `"1"` equals `1`.
//! - Relational operators compare two strings lexicographically and
//!   everything else numerically; anything that is not a number is never
//!   less or greater.
//! - A date literal matches record strings holding ISO-8601 date-times.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::{Error, Result};
use crate::value::{format_date, format_number, parse_date, Value};

use super::op::{Logic, Operator};
use super::tree::{Condition, Filter, LogicalGroup, Node};

impl Filter {
    /// True when every record satisfies the filter.
    ///
    /// No records never match; a filter without conditions matches any
    /// record.
    pub fn test(&self, records: &[JsonValue]) -> bool {
        if records.is_empty() {
            return false;
        }
        records.iter().all(|record| self.matches(record))
    }

    /// Like [`Filter::test`] for any serializable records.
    pub fn test_serialize<T: Serialize>(&self, records: &[T]) -> Result<bool> {
        let records = records
            .iter()
            .map(|record| {
                serde_json::to_value(record)
                    .map_err(|e| Error::InvalidValue(format!("record is not serializable: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self.test(&records))
    }

    /// True when one record satisfies the filter.
    pub fn matches(&self, record: &JsonValue) -> bool {
        match self.tree() {
            Some(tree) => tree.matches(record, self.options().dot_notation),
            None => true,
        }
    }
}

impl LogicalGroup {
    /// Evaluates the group against `record`.
    ///
    /// Groups without conditions contribute nothing to their parent; an
    /// empty group on its own matches.
    pub fn matches(&self, record: &JsonValue, dot_notation: bool) -> bool {
        struct Frame<'a> {
            group: &'a LogicalGroup,
            next: usize,
            result: Option<bool>,
        }

        let mut stack = vec![Frame {
            group: self,
            next: 0,
            result: None,
        }];

        while let Some(frame) = stack.last_mut() {
            let group = frame.group;
            if decided(group.logic, frame.result) {
                frame.next = group.filters.len();
            }

            match group.filters.get(frame.next) {
                Some(Node::Condition(condition)) => {
                    frame.next += 1;
                    let outcome = condition.matches(record, dot_notation);
                    frame.result = Some(combine(group.logic, frame.result, outcome));
                }
                Some(Node::Group(inner)) => {
                    frame.next += 1;
                    stack.push(Frame {
                        group: inner,
                        next: 0,
                        result: None,
                    });
                }
                None => {
                    let outcome = frame.result;
                    stack.pop();
                    let Some(parent) = stack.last_mut() else {
                        return outcome.unwrap_or(true);
                    };
                    if let Some(outcome) = outcome {
                        parent.result = Some(combine(parent.group.logic, parent.result, outcome));
                    }
                }
            }
        }
        true
    }
}

fn combine(logic: Logic, acc: Option<bool>, outcome: bool) -> bool {
    match logic {
        Logic::And => acc.unwrap_or(true) && outcome,
        Logic::Or => acc.unwrap_or(false) || outcome,
    }
}

/// Whether the remaining children can no longer change the result.
fn decided(logic: Logic, acc: Option<bool>) -> bool {
    matches!(
        (logic, acc),
        (Logic::And, Some(false)) | (Logic::Or, Some(true))
    )
}

impl Condition {
    /// Tests this condition against the property it names in `record`.
    pub fn matches(&self, record: &JsonValue, dot_notation: bool) -> bool {
        let model = match resolve(record, &self.property, dot_notation) {
            Some(json) => Operand::from_json(json),
            None => Operand::Undefined,
        };
        let value = match &self.value {
            Some(value) => Operand::from_value(value),
            None => Operand::Undefined,
        };
        apply(self.op, model, value)
    }
}

/// Looks up `property` in `record`, walking dotted segments when enabled.
pub(crate) fn resolve<'a>(
    record: &'a JsonValue,
    property: &str,
    dot_notation: bool,
) -> Option<&'a JsonValue> {
    if !dot_notation {
        return record.as_object()?.get(property);
    }
    property
        .split('.')
        .try_fold(record, |current, segment| match current {
            JsonValue::Object(map) => map.get(segment),
            JsonValue::Array(items) => items.get(segment.parse::<usize>().ok()?),
            _ => None,
        })
}

fn apply(op: Operator, model: Operand<'_>, value: Operand<'_>) -> bool {
    match op {
        Operator::Equals => strict_eq(&model, &value),
        Operator::NotEquals => !loose_eq(&model, &value),
        Operator::IsNull => matches!(model, Operand::Null),
        Operator::IsNotNull => !matches!(model, Operand::Null),
        Operator::LessThan => relate(&model, &value).is_some_and(Ordering::is_lt),
        Operator::LessThanOrEqual => relate(&model, &value).is_some_and(Ordering::is_le),
        Operator::GreaterThan => relate(&model, &value).is_some_and(Ordering::is_gt),
        Operator::GreaterThanOrEqual => relate(&model, &value).is_some_and(Ordering::is_ge),
        Operator::StartsWith => text_or_empty(&model).starts_with(&*text_or_empty(&value)),
        Operator::EndsWith => text_or_empty(&model).ends_with(&*text_or_empty(&value)),
        Operator::Contains => text_or_empty(&model).contains(&*text_or_empty(&value)),
        Operator::DoesNotContain => !text_or_empty(&model).contains(&*text_or_empty(&value)),
        Operator::IsEmpty => is_empty(&model),
        Operator::IsNotEmpty => !is_empty(&model),
        Operator::In => contains(&value, &model).unwrap_or(false),
        Operator::NotIn => contains(&value, &model).map_or(true, |found| !found),
    }
}

/// Either side of a comparison, with record JSON and literals unified.
#[derive(Debug, Clone, PartialEq)]
enum Operand<'a> {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(Cow<'a, str>),
    Date(DateTime<Utc>),
    Array(Vec<Operand<'a>>),
    Object,
}

impl<'a> Operand<'a> {
    fn from_json(json: &'a JsonValue) -> Self {
        match json {
            JsonValue::Null => Operand::Null,
            JsonValue::Bool(b) => Operand::Bool(*b),
            JsonValue::Number(n) => Operand::Number(n.as_f64().unwrap_or(f64::NAN)),
            JsonValue::String(s) => Operand::Str(Cow::Borrowed(s)),
            JsonValue::Array(items) => {
                Operand::Array(items.iter().map(Operand::from_json).collect())
            }
            JsonValue::Object(_) => Operand::Object,
        }
    }

    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::Undefined => Operand::Undefined,
            Value::Null => Operand::Null,
            Value::Bool(b) => Operand::Bool(*b),
            Value::Number(n) => Operand::Number(*n),
            Value::String(s) => Operand::Str(Cow::Borrowed(s)),
            Value::Date(d) => Operand::Date(*d),
            Value::Array(items) => Operand::Array(items.iter().map(Operand::from_value).collect()),
        }
    }

    fn is_nullish(&self) -> bool {
        matches!(self, Operand::Undefined | Operand::Null)
    }
}

/// Reads a string as a date when the other side is a date.
fn promote<'a, 'b>(
    a: &'b Operand<'a>,
    b: &'b Operand<'a>,
) -> (Cow<'b, Operand<'a>>, Cow<'b, Operand<'a>>) {
    let as_date = |s: &str| parse_date(s).map(Operand::Date);
    match (a, b) {
        (Operand::Date(_), Operand::Str(s)) => match as_date(s) {
            Some(date) => (Cow::Borrowed(a), Cow::Owned(date)),
            None => (Cow::Borrowed(a), Cow::Borrowed(b)),
        },
        (Operand::Str(s), Operand::Date(_)) => match as_date(s) {
            Some(date) => (Cow::Owned(date), Cow::Borrowed(b)),
            None => (Cow::Borrowed(a), Cow::Borrowed(b)),
        },
        _ => (Cow::Borrowed(a), Cow::Borrowed(b)),
    }
}

fn strict_eq(a: &Operand<'_>, b: &Operand<'_>) -> bool {
    let (a, b) = promote(a, b);
    match (&*a, &*b) {
        (Operand::Undefined, Operand::Undefined) | (Operand::Null, Operand::Null) => true,
        (Operand::Bool(x), Operand::Bool(y)) => x == y,
        (Operand::Number(x), Operand::Number(y)) => x == y,
        (Operand::Str(x), Operand::Str(y)) => x == y,
        (Operand::Date(x), Operand::Date(y)) => x == y,
        (Operand::Array(xs), Operand::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| strict_eq(x, y))
        }
        _ => false,
    }
}

fn loose_eq(a: &Operand<'_>, b: &Operand<'_>) -> bool {
    let (a, b) = promote(a, b);
    let (a, b) = (&*a, &*b);
    if a.is_nullish() || b.is_nullish() {
        return a.is_nullish() && b.is_nullish();
    }
    match (a, b) {
        (Operand::Object, _) | (_, Operand::Object) => false,
        (Operand::Array(_), Operand::Array(_)) => strict_eq(a, b),
        (Operand::Bool(_), _) | (_, Operand::Bool(_)) => {
            if std::mem::discriminant(a) == std::mem::discriminant(b) {
                strict_eq(a, b)
            } else {
                to_number(a) == to_number(b)
            }
        }
        (Operand::Array(_), _) | (_, Operand::Array(_)) => loose_eq(&primitive(a), &primitive(b)),
        (Operand::Str(x), Operand::Str(y)) => x == y,
        (Operand::Date(x), Operand::Date(y)) => x == y,
        _ => to_number(a) == to_number(b),
    }
}

fn relate(a: &Operand<'_>, b: &Operand<'_>) -> Option<Ordering> {
    let (a, b) = promote(a, b);
    let (a, b) = (primitive(&a), primitive(&b));
    match (&a, &b) {
        (Operand::Str(x), Operand::Str(y)) => Some(x.cmp(y)),
        _ => to_number(&a).partial_cmp(&to_number(&b)),
    }
}

/// Arrays and objects compare by their text form.
fn primitive<'a>(operand: &Operand<'a>) -> Operand<'a> {
    match operand {
        Operand::Array(_) | Operand::Object => {
            Operand::Str(Cow::Owned(to_text(operand).into_owned()))
        }
        other => other.clone(),
    }
}

fn to_number(operand: &Operand<'_>) -> f64 {
    match operand {
        Operand::Undefined | Operand::Object => f64::NAN,
        Operand::Null => 0.0,
        Operand::Bool(b) => f64::from(u8::from(*b)),
        Operand::Number(n) => *n,
        Operand::Str(s) => text_to_number(s),
        Operand::Date(d) => d.timestamp_millis() as f64,
        Operand::Array(_) => text_to_number(&to_text(operand)),
    }
}

fn text_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        t if t
            .chars()
            .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) =>
        {
            f64::NAN
        }
        t => t.parse().unwrap_or(f64::NAN),
    }
}

fn to_text<'a>(operand: &Operand<'a>) -> Cow<'a, str> {
    match operand {
        Operand::Undefined => Cow::Borrowed("undefined"),
        Operand::Null => Cow::Borrowed("null"),
        Operand::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Operand::Number(n) => Cow::Owned(format_number(*n)),
        Operand::Str(s) => s.clone(),
        Operand::Date(d) => Cow::Owned(format_date(d)),
        Operand::Array(items) => {
            let parts: Vec<_> = items
                .iter()
                .map(|item| if item.is_nullish() { Cow::Borrowed("") } else { to_text(item) })
                .collect();
            Cow::Owned(parts.join(","))
        }
        Operand::Object => Cow::Borrowed("[object Object]"),
    }
}

fn text_or_empty<'a>(operand: &Operand<'a>) -> Cow<'a, str> {
    if operand.is_nullish() {
        Cow::Borrowed("")
    } else {
        to_text(operand)
    }
}

fn is_empty(operand: &Operand<'_>) -> bool {
    match operand {
        Operand::Undefined | Operand::Null => true,
        Operand::Str(s) => s.is_empty(),
        _ => false,
    }
}

/// Membership of `needle` in an array or string `haystack`; `None` when the
/// haystack is neither.
fn contains(haystack: &Operand<'_>, needle: &Operand<'_>) -> Option<bool> {
    match haystack {
        Operand::Array(items) => Some(items.iter().any(|item| same_value_zero(item, needle))),
        Operand::Str(s) => Some(s.contains(&*to_text(needle))),
        _ => None,
    }
}

/// Strict equality where `NaN` equals itself.
fn same_value_zero(a: &Operand<'_>, b: &Operand<'_>) -> bool {
    match (a, b) {
        (Operand::Number(x), Operand::Number(y)) if x.is_nan() && y.is_nan() => true,
        _ => strict_eq(a, b),
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;
