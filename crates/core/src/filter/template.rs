// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Safe construction of filter text from untrusted values.
//!
//! ```
//! use sift_core::filter::template::bind;
//! use sift_core::Value;
//!
//! let text = bind("{name} EQ ? AND {tags} IN [?, ?]", &[
//!     Value::from(r#"Robert"); drop"#),
//!     Value::from("a"),
//!     Value::from(2),
//! ])?;
//! assert_eq!(text, r#"{name} EQ "Robert\"); drop" AND {tags} IN ["a", 2]"#);
//! # Ok::<(), sift_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::value::Value;

/// Replaces each `?` placeholder with the canonical text of the matching
/// argument.
///
/// Placeholders inside quoted text or `{property}` braces are left alone.
/// Strings are always emitted double-quoted and escaped, so an argument can
/// never change the structure of the filter.
pub fn bind(template: &str, args: &[Value]) -> Result<String> {
    let slots = placeholders(template);
    if slots.len() != args.len() {
        return Err(Error::TemplateArguments {
            expected: slots.len(),
            given: args.len(),
        });
    }

    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut last = 0;
    for (slot, arg) in slots.iter().zip(args) {
        out.push_str(&template[last..*slot]);
        out.push_str(&arg.to_string());
        last = slot + 1;
    }
    out.push_str(&template[last..]);
    Ok(out)
}

/// Byte offsets of the `?` placeholders in `template`.
fn placeholders(template: &str) -> Vec<usize> {
    let mut slots = Vec::new();
    let mut quote: Option<char> = None;
    let mut in_property = false;
    let mut escaped = false;

    for (i, c) in template.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if quote.is_some() || in_property => escaped = true,
            c if quote == Some(c) => quote = None,
            _ if quote.is_some() => {}
            '}' if in_property => in_property = false,
            _ if in_property => {}
            '{' => in_property = true,
            '"' | '\'' => quote = Some(c),
            '?' => slots.push(i),
            _ => {}
        }
    }
    slots
}

/// Escapes braces and backslashes so `name` can be written as `{name}`.
pub fn escape_property(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if matches!(c, '{' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
