// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for filter text.
//!
//! Builds a [`Filter`] from the token stream through [`Filter::add`], so a
//! parsed tree is identical to the one the builder calls would produce.

use std::str::FromStr;

use crate::error::{Error, Result, SyntaxError};
use crate::value::coerce;

use super::op::Logic;
use super::token::{tokenize_with, Token, TokenKind};
use super::tree::{Condition, Filter, FilterOptions};

impl Filter {
    /// Parse filter text with default options.
    ///
    /// Returns `Ok(None)` when the text is empty or only whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use sift_core::filter::Filter;
    ///
    /// let filter = Filter::parse("{a} EQ 1 OR {b} EQ 2 AND {c} EQ 3")?.unwrap_or_default();
    /// assert_eq!(filter.to_string(), "({a} EQ 1 OR {b} EQ 2) AND {c} EQ 3");
    /// # Ok::<(), sift_core::Error>(())
    /// ```
    pub fn parse(text: &str) -> Result<Option<Filter>> {
        Self::parse_with(text, FilterOptions::default())
    }

    pub fn parse_with(text: &str, options: FilterOptions) -> Result<Option<Filter>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let tokens = tokenize_with(text, options.max_depth)?;
        let filter = parse_tokens(&tokens, options)?;
        tracing::debug!(depth = filter.depth(), "parsed filter");
        Ok(Some(filter))
    }
}

/// Blank text parses to an empty filter.
impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Filter::parse(s)?.unwrap_or_default())
    }
}

/// Build a filter from an already tokenized stream.
pub fn parse_tokens(tokens: &[Token], options: FilterOptions) -> Result<Filter> {
    parse_span(tokens, options, 1)
}

/// Parses the tokens of one group level. `level` is 1 for the root.
fn parse_span(tokens: &[Token], options: FilterOptions, level: usize) -> Result<Filter> {
    if level > options.max_depth {
        return Err(Error::TooDeep {
            max: options.max_depth,
        });
    }

    let dominant = dominant_logic(tokens);
    let mut filter = Filter::with_options(options);
    let mut pending: Option<Logic> = None;
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        match &token.kind {
            TokenKind::GroupLogic(logic) => {
                pending = Some(*logic);
                i += 1;
            }
            TokenKind::GroupStart => {
                let end = matching_end(tokens, i)?;
                let inner = parse_span(&tokens[i + 1..end], options, level + 1)?;
                filter.add(pending.take().unwrap_or(dominant), inner)?;
                i = end + 1;
            }
            TokenKind::ConditionProperty(property) => {
                let (condition, consumed) = parse_condition(property, token, &tokens[i + 1..])?;
                filter.add(pending.take().unwrap_or(dominant), condition)?;
                i += 1 + consumed;
            }
            TokenKind::GroupEnd => {
                return Err(Error::syntax(token.start, SyntaxError::GroupMismatch));
            }
            TokenKind::ConditionOp(_) | TokenKind::ConditionValue { .. } => {
                return Err(Error::syntax(token.start, SyntaxError::UnexpectedValue));
            }
        }
    }

    Ok(filter)
}

/// The first logic token outside nested groups, AND when there is none.
fn dominant_logic(tokens: &[Token]) -> Logic {
    let mut depth = 0usize;
    for token in tokens {
        match token.kind {
            TokenKind::GroupStart => depth += 1,
            TokenKind::GroupEnd => depth = depth.saturating_sub(1),
            TokenKind::GroupLogic(logic) if depth == 0 => return logic,
            _ => {}
        }
    }
    Logic::And
}

/// Index of the `GroupEnd` closing the `GroupStart` at `start`.
fn matching_end(tokens: &[Token], start: usize) -> Result<usize> {
    let mut depth = 0usize;
    for (i, token) in tokens.iter().enumerate().skip(start) {
        match token.kind {
            TokenKind::GroupStart => depth += 1,
            TokenKind::GroupEnd => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
            }
            _ => {}
        }
    }
    Err(Error::syntax(
        tokens[start].start,
        SyntaxError::GroupMismatch,
    ))
}

/// Reads the operator and optional value following a property token.
///
/// Returns the condition and how many tokens after the property it used.
fn parse_condition(
    property: &str,
    property_token: &Token,
    rest: &[Token],
) -> Result<(Condition, usize)> {
    let Some(TokenKind::ConditionOp(op)) = rest.first().map(|t| &t.kind) else {
        return Err(Error::syntax(
            property_token.start,
            SyntaxError::PropertyWithoutOperator,
        ));
    };

    let (value, consumed) = match rest.get(1) {
        Some(Token {
            kind: TokenKind::ConditionValue { .. },
            ..
        }) if op.is_unary() => (None, 2),
        Some(Token {
            kind: TokenKind::ConditionValue { raw, .. },
            start,
            ..
        }) => {
            let value = coerce(raw).map_err(|e| e.offset(*start))?;
            (Some(value), 2)
        }
        _ => (None, 1),
    };

    Ok((
        Condition {
            property: property.to_string(),
            op: *op,
            value,
        },
        consumed,
    ))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
