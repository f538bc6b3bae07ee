// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer and parser for sort text.

use crate::error::{Error, Result, SyntaxError};
use crate::filter::is_word_char;

use super::{Direction, Sort};

/// The kind of a sort token, with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortTokenKind {
    /// `{name}`, with escapes already removed.
    Property(String),
    /// `ASC` or `DESC`.
    Order(Direction),
    /// `,`
    Separator,
}

/// A sort token and the byte range `start..end` it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortToken {
    pub kind: SortTokenKind,
    pub start: usize,
    pub end: usize,
}

/// Tokenize sort text.
pub fn tokenize(input: &str) -> Result<Vec<SortToken>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];
        let trimmed = rest.trim_start();
        pos += rest.len() - trimmed.len();
        let Some(c) = trimmed.chars().next() else {
            break;
        };

        let (kind, len) = match c {
            ',' => (SortTokenKind::Separator, 1),
            '{' => {
                let (name, len) = scan_property(trimmed)
                    .ok_or_else(|| Error::syntax(pos, SyntaxError::PropertyNotClosed))?;
                (SortTokenKind::Property(name), len)
            }
            _ => match match_order(trimmed) {
                Some((direction, len)) => (SortTokenKind::Order(direction), len),
                None => return Err(Error::syntax(pos, SyntaxError::UnexpectedSortToken)),
            },
        };
        tokens.push(SortToken {
            kind,
            start: pos,
            end: pos + len,
        });
        pos += len;
    }

    tracing::trace!(tokens = tokens.len(), "tokenized sort");
    Ok(tokens)
}

/// Reads `{name}` at the start of `input`; returns the name and byte length.
fn scan_property(input: &str) -> Option<(String, usize)> {
    let mut name = String::new();
    let mut chars = input.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                (_, next @ ('{' | '}' | '\\')) => name.push(next),
                (_, next) => {
                    name.push('\\');
                    name.push(next);
                }
            },
            '}' => return Some((name, i + 1)),
            _ => name.push(c),
        }
    }
    None
}

fn match_order(input: &str) -> Option<(Direction, usize)> {
    [("DESC", Direction::Desc), ("ASC", Direction::Asc)]
        .into_iter()
        .find_map(|(word, direction)| {
            let head = input.get(..word.len())?;
            let bounded = !input[word.len()..].starts_with(is_word_char);
            (head.eq_ignore_ascii_case(word) && bounded).then_some((direction, word.len()))
        })
}

/// Parse sort text into an ordered list of keys.
///
/// Blank text yields an empty list. Stray commas are ignored. A property
/// closes the key before it even without a comma, and a later order token
/// overrides an earlier one. An order with no open key is an error.
///
/// # Examples
///
/// ```
/// use sift_core::sort::{parse, Sort};
///
/// let sorts = parse("{test} desc, {moose}, {rest} desc")?;
/// assert_eq!(sorts, vec![Sort::desc("test"), Sort::asc("moose"), Sort::desc("rest")]);
/// # Ok::<(), sift_core::Error>(())
/// ```
pub fn parse(text: &str) -> Result<Vec<Sort>> {
    let mut sorts = Vec::new();
    let mut open: Option<Sort> = None;

    for token in tokenize(text)? {
        match token.kind {
            SortTokenKind::Property(property) => {
                if let Some(sort) = open.replace(Sort::asc(property)) {
                    sorts.push(sort);
                }
            }
            SortTokenKind::Order(direction) => match &mut open {
                Some(sort) => sort.direction = direction,
                None => return Err(Error::syntax(token.start, SyntaxError::UnexpectedSortToken)),
            },
            SortTokenKind::Separator => sorts.extend(open.take()),
        }
    }
    sorts.extend(open);

    tracing::debug!(keys = sorts.len(), "parsed sort");
    Ok(sorts)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
