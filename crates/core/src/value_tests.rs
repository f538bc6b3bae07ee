// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn date(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> Value {
    Value::Date(Utc.with_ymd_and_hms(y, m, d, h, mi, s).unwrap())
}

// ─────────────────────────────────────────────────────────────────────────────
// Scalars
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    integer = { "3774", 3774.0 },
    negative = { "-12", -12.0 },
    decimal = { "1.25", 1.25 },
    leading_dot = { ".5", 0.5 },
    negative_leading_dot = { "-.5", -0.5 },
    leading_zeros = { "007", 7.0 },
)]
fn coerce_number(raw: &str, expected: f64) {
    assert_eq!(coerce(raw).unwrap(), Value::Number(expected));
}

#[parameterized(
    empty = { "" },
    minus = { "-" },
    trailing_dot = { "5." },
    exponent = { "1e5" },
    alphanumeric = { "A134" },
)]
fn coerce_non_number_falls_back_to_string(raw: &str) {
    assert_eq!(coerce(raw).unwrap(), Value::String(raw.to_string()));
}

#[parameterized(
    true_lower = { "true", Value::Bool(true) },
    true_upper = { "TRUE", Value::Bool(true) },
    false_mixed = { "False", Value::Bool(false) },
    null_lower = { "null", Value::Null },
    null_upper = { "NULL", Value::Null },
    undefined = { "undefined", Value::Undefined },
    undefined_mixed = { "UnDefined", Value::Undefined },
)]
fn coerce_keywords(raw: &str, expected: Value) {
    assert_eq!(coerce(raw).unwrap(), expected);
}

// ─────────────────────────────────────────────────────────────────────────────
// Dates
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    minutes_only = { "2024-01-02T03:04", date(2024, 1, 2, 3, 4, 0) },
    seconds = { "2024-01-02T03:04:05", date(2024, 1, 2, 3, 4, 5) },
    zulu = { "2024-01-02T03:04:05Z", date(2024, 1, 2, 3, 4, 5) },
    positive_offset = { "2024-01-02T03:04:05+02:00", date(2024, 1, 2, 1, 4, 5) },
    negative_offset = { "2024-01-02T03:04-01:30", date(2024, 1, 2, 4, 34, 0) },
)]
fn coerce_date(raw: &str, expected: Value) {
    assert_eq!(coerce(raw).unwrap(), expected);
}

#[test]
fn coerce_date_with_milliseconds() {
    let value = coerce("2024-01-02T03:04:05.250Z").unwrap();
    let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap()
        + chrono::Duration::milliseconds(250);
    assert_eq!(value, Value::Date(expected));
}

#[parameterized(
    date_only = { "2024-01-02" },
    bad_month = { "2024-13-02T03:04" },
    bad_day = { "2024-02-30T03:04" },
    space_separator = { "2024-01-02 03:04" },
)]
fn coerce_non_date_is_string(raw: &str) {
    assert_eq!(coerce(raw).unwrap(), Value::String(raw.to_string()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Quoted strings
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    empty_double = { r#""""#, "" },
    empty_single = { "''", "" },
    double = { r#""hello world""#, "hello world" },
    single = { "'hello'", "hello" },
    keyword_stays_string = { r#""true""#, "true" },
    number_stays_string = { r#""42""#, "42" },
    escaped_double = { r#""say \"hi\"""#, r#"say "hi""# },
    escaped_single = { r"'it\'s'", "it's" },
    escaped_backslash = { r#""a\\b""#, r"a\b" },
    unknown_escape_kept = { r#""C:\path""#, r"C:\path" },
    other_quote_inside = { r#""it's""#, "it's" },
)]
fn coerce_quoted_string(raw: &str, expected: &str) {
    assert_eq!(coerce(raw).unwrap(), Value::String(expected.to_string()));
}

#[test]
fn coerce_unterminated_double_quote() {
    let err = coerce(r#""abc"#).unwrap_err();
    assert_eq!(
        err,
        Error::syntax(0, SyntaxError::ValueNotClosed(Delimiter::DoubleQuote))
    );
}

#[test]
fn coerce_unterminated_escaped_closer() {
    let err = coerce(r"'abc\'").unwrap_err();
    assert_eq!(
        err,
        Error::syntax(0, SyntaxError::ValueNotClosed(Delimiter::SingleQuote))
    );
}

#[test]
fn coerce_text_after_closing_quote() {
    let err = coerce(r#""ab"cd"#).unwrap_err();
    assert_eq!(err, Error::syntax(4, SyntaxError::UnexpectedValue));
}

// ─────────────────────────────────────────────────────────────────────────────
// Arrays
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn coerce_mixed_array() {
    let value = coerce(r#"[A134,3774,true,"true",false,"FALSE"]"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::String("A134".into()),
            Value::Number(3774.0),
            Value::Bool(true),
            Value::String("true".into()),
            Value::Bool(false),
            Value::String("FALSE".into()),
        ])
    );
}

#[test]
fn coerce_empty_array() {
    assert_eq!(coerce("[]").unwrap(), Value::Array(vec![]));
    assert_eq!(coerce("[  ]").unwrap(), Value::Array(vec![]));
}

#[parameterized(
    leading = { "[,1]", vec![Value::Null, Value::Number(1.0)] },
    trailing = { "[1,]", vec![Value::Number(1.0), Value::Null] },
    middle = { "[1,,2]", vec![Value::Number(1.0), Value::Null, Value::Number(2.0)] },
    only_comma = { "[,]", vec![Value::Null, Value::Null] },
)]
fn coerce_array_empty_slots_are_null(raw: &str, expected: Vec<Value>) {
    assert_eq!(coerce(raw).unwrap(), Value::Array(expected));
}

#[test]
fn coerce_array_trims_whitespace_around_elements() {
    let value = coerce(r#"[ a b , "  c " ,3 ]"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::String("a b".into()),
            Value::String("  c ".into()),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn coerce_array_commas_inside_quotes() {
    let value = coerce(r#"["a,b",'c,d']"#).unwrap();
    assert_eq!(
        value,
        Value::Array(vec![Value::String("a,b".into()), Value::String("c,d".into())])
    );
}

#[test]
fn coerce_nested_array() {
    let value = coerce("[[1,2],3]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![
            Value::Array(vec![Value::Number(1.0), Value::Number(2.0)]),
            Value::Number(3.0),
        ])
    );
}

#[test]
fn coerce_array_with_dates_and_null() {
    let value = coerce("[2024-01-02T03:04Z,null]").unwrap();
    assert_eq!(
        value,
        Value::Array(vec![date(2024, 1, 2, 3, 4, 0), Value::Null])
    );
}

#[test]
fn coerce_unclosed_array() {
    let err = coerce("[1,2").unwrap_err();
    assert_eq!(
        err,
        Error::syntax(0, SyntaxError::ValueNotClosed(Delimiter::Bracket))
    );
}

#[test]
fn coerce_array_element_error_is_rebased() {
    let err = coerce(r#"[1, "abc]"#).unwrap_err();
    // The quote swallows the closing bracket.
    assert_eq!(
        err,
        Error::syntax(0, SyntaxError::ValueNotClosed(Delimiter::Bracket))
    );

    let err = coerce(r#"[1, "a"b]"#).unwrap_err();
    assert_eq!(err, Error::syntax(7, SyntaxError::UnexpectedValue));
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    undefined = { Value::Undefined, "undefined" },
    null = { Value::Null, "null" },
    boolean = { Value::Bool(false), "false" },
    integer = { Value::Number(3774.0), "3774" },
    negative_zero = { Value::Number(-0.0), "0" },
    decimal = { Value::Number(-1.5), "-1.5" },
    string = { Value::String("a \"b\" \\ c".into()), r#""a \"b\" \\ c""# },
    date = { super::date(2024, 1, 2, 3, 4, 5), r#""2024-01-02T03:04:05.000Z""# },
    array = { Value::from(vec![Value::from("x"), Value::Null, Value::from(2)]), r#"["x",null,2]"# },
)]
fn display_value(value: Value, expected: &str) {
    assert_eq!(value.to_string(), expected);
}

#[test]
fn display_then_coerce_is_stable() {
    let value = Value::from(vec![
        Value::from("it's \"quoted\""),
        Value::from(1.5),
        Value::Undefined,
    ]);
    let text = value.to_string();
    assert_eq!(coerce(&text).unwrap().to_string(), text);
}

#[test]
fn displayed_date_reparses_as_string() {
    let text = date(2024, 1, 2, 3, 4, 5).to_string();
    let reparsed = coerce(&text).unwrap();
    assert_eq!(reparsed, Value::String("2024-01-02T03:04:05.000Z".into()));
    assert_eq!(reparsed.to_string(), text);
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn from_json_scalars_and_arrays() {
    let json = serde_json::json!([1, "a", true, null, [2]]);
    assert_eq!(
        Value::from_json(&json).unwrap(),
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("a".into()),
            Value::Bool(true),
            Value::Null,
            Value::Array(vec![Value::Number(2.0)]),
        ])
    );
}

#[test]
fn from_json_rejects_objects() {
    let err = Value::from_json(&serde_json::json!({"a": 1})).unwrap_err();
    assert!(matches!(err, Error::InvalidValue(_)));
}

#[test]
fn serialize_integral_numbers_without_fraction() {
    let json = serde_json::to_string(&Value::from(vec![3.0, 1.5])).unwrap();
    assert_eq!(json, "[3,1.5]");
}

#[test]
fn from_unit_and_option() {
    assert_eq!(Value::from(()), Value::Undefined);
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::String("x".into()));
}
