// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed literal values and coercion of raw value text.
//!
//! Filter strings carry values as plain text (`3774`, `true`, `"A134"`,
//! `[1,2]`). [`coerce`] turns that text into a [`Value`], trying each
//! recognized form in order:
//!
//! 1. number (`-1`, `.5`, `42.0`)
//! 2. boolean (`true`, `FALSE`)
//! 3. `null` / `undefined`
//! 4. ISO-8601 date-time (`2024-01-01T10:00Z`)
//! 5. quoted string (`"a"`, `'b'`)
//! 6. array (`[a, "b", 3]`)
//! 7. anything else is kept as the original string

use std::fmt;
use std::sync::LazyLock;

use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeZone, Utc,
};
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Delimiter, Error, Result, SyntaxError};

static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^-?\d*(\.\d+)?$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,9}))?)?(Z|[+-]\d{2}:\d{2})?$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// A typed literal carried by a condition.
///
/// `Undefined` and `Null` are distinct: `Undefined` is the absence of a value
/// (a missing record property), `Null` an explicit null.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
}

impl Value {
    /// Returns true for `Undefined` and `Null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Converts a JSON value into a literal.
    ///
    /// Objects have no literal form and are rejected.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        Ok(match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(n) => Value::Number(n),
                None => return Err(Error::InvalidValue(format!("number {n} is out of range"))),
            },
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .iter()
                    .map(Value::from_json)
                    .collect::<Result<Vec<_>>>()?,
            ),
            serde_json::Value::Object(_) => {
                return Err(Error::InvalidValue(
                    "objects cannot be used as condition values".to_string(),
                ))
            }
        })
    }
}

/// Coerce raw value text into a typed [`Value`].
///
/// Syntax errors carry an index relative to `raw`.
pub fn coerce(raw: &str) -> Result<Value> {
    if NUMBER_RE.is_match(raw) {
        if let Ok(n) = raw.parse::<f64>() {
            if n.is_finite() {
                return Ok(Value::Number(n));
            }
        }
    }

    match raw.to_ascii_lowercase().as_str() {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        "null" => return Ok(Value::Null),
        "undefined" => return Ok(Value::Undefined),
        _ => {}
    }

    if let Some(date) = parse_date(raw) {
        return Ok(Value::Date(date));
    }

    match raw.chars().next() {
        Some(quote @ ('"' | '\'')) => coerce_quoted(raw, quote),
        Some('[') => coerce_array(raw),
        _ => Ok(Value::String(raw.to_string())),
    }
}

/// Parse an ISO-8601 date-time.
///
/// Accepts `YYYY-MM-DDThh:mm[:ss[.fff]][Z|±hh:mm]`. A missing zone is read
/// as UTC. Returns `None` for text that does not match or is not a real
/// calendar date.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let caps = DATE_RE.captures(s)?;
    let num = |i: usize| -> Option<u32> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(2)?, num(3)?)?;
    let nanos = match caps.get(7) {
        Some(m) => format!("{:0<9}", m.as_str()).parse().ok()?,
        None => 0,
    };
    let time = NaiveTime::from_hms_nano_opt(num(4)?, num(5)?, num(6)?, nanos)?;
    let naive = NaiveDateTime::new(date, time);

    match caps.get(8).map(|m| m.as_str()) {
        None | Some("Z") => Some(Utc.from_utc_datetime(&naive)),
        Some(zone) => {
            let sign = if zone.starts_with('-') { -1 } else { 1 };
            let hours: i32 = zone.get(1..3)?.parse().ok()?;
            let minutes: i32 = zone.get(4..6)?.parse().ok()?;
            let offset = FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))?;
            let local = offset.from_local_datetime(&naive).single()?;
            Some(local.with_timezone(&Utc))
        }
    }
}

fn coerce_quoted(raw: &str, quote: char) -> Result<Value> {
    let mut escaped = false;
    for (i, c) in raw.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            if i + c.len_utf8() != raw.len() {
                return Err(Error::syntax(i + 1, SyntaxError::UnexpectedValue));
            }
            return Ok(Value::String(unescape(&raw[1..i])));
        }
    }
    Err(Error::syntax(
        0,
        SyntaxError::ValueNotClosed(Delimiter::for_quote(quote)),
    ))
}

fn coerce_array(raw: &str) -> Result<Value> {
    let mut items = Vec::new();
    let mut current = String::new();
    let mut current_start = 1;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut depth = 0usize;
    let mut seen_comma = false;

    for (i, c) in raw.char_indices().skip(1) {
        if let Some(q) = quote {
            current.push(c);
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }

        match c {
            ']' if depth == 0 => {
                if i + 1 != raw.len() {
                    return Err(Error::syntax(i + 1, SyntaxError::UnexpectedValue));
                }
                if seen_comma || !current.is_empty() {
                    items.push(array_element(&current, current_start)?);
                }
                return Ok(Value::Array(items));
            }
            ',' if depth == 0 => {
                items.push(array_element(&current, current_start)?);
                current.clear();
                seen_comma = true;
            }
            c if c.is_whitespace() && current.is_empty() => {}
            _ => {
                if current.is_empty() {
                    current_start = i;
                }
                match c {
                    '"' | '\'' => quote = Some(c),
                    '[' => depth += 1,
                    ']' => depth -= 1,
                    _ => {}
                }
                current.push(c);
            }
        }
    }

    Err(Error::syntax(
        0,
        SyntaxError::ValueNotClosed(Delimiter::Bracket),
    ))
}

fn array_element(text: &str, start: usize) -> Result<Value> {
    let text = text.trim_end();
    if text.is_empty() {
        return Ok(Value::Null);
    }
    coerce(text).map_err(|e| e.offset(start))
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next @ ('"' | '\'' | '\\')) = chars.peek() {
                out.push(next);
                chars.next();
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Escape a string for use inside a double-quoted value.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Format a number the way it is written in filter text: integral values
/// have no fractional part and negative zero prints as `0`.
pub(crate) fn format_number(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        format!("{n}")
    }
}

pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Canonical filter-text form of a value.
///
/// A date prints as a quoted ISO-8601 string. Quoted text always coerces to
/// [`Value::String`], so the printed text is stable across a reparse but a
/// [`Value::Date`] comes back as a string holding the same instant.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "\"{}\"", escape_string(s)),
            Value::Date(d) => write!(f, "\"{}\"", format_date(d)),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Undefined | Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
                    serializer.serialize_i64(*n as i64)
                } else {
                    serializer.serialize_f64(*n)
                }
            }
            Value::String(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.serialize_str(&format_date(d)),
            Value::Array(items) => items.serialize(serializer),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
