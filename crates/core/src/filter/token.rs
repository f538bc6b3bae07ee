// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lexer for filter text.
//!
//! Turns a string such as
//!
//! ```text
//! ({status} EQ "open" OR {priority} >= 3) AND {tags} IN [bug,"ux"]
//! ```
//!
//! into a flat list of [`Token`]s. Indices are byte offsets into the input.

use crate::error::{Delimiter, Error, Result, SyntaxError};

use super::op::{is_word_char, Logic, Operator};
use super::DEFAULT_MAX_DEPTH;

/// How a value token was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueStyle {
    Naked,
    DoubleQuoted,
    SingleQuoted,
    Array,
}

/// The kind of a token, with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `(`
    GroupStart,
    /// `)`
    GroupEnd,
    /// `AND`, `OR`, `&&`, `||`
    GroupLogic(Logic),
    /// `{name}`, with escapes already removed.
    ConditionProperty(String),
    /// Any operator spelling.
    ConditionOp(Operator),
    /// Raw value text including its quotes or brackets.
    ConditionValue { raw: String, style: ValueStyle },
}

/// A token and the byte range `start..end` it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// Tokenize filter text with the default nesting limit.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    tokenize_with(input, DEFAULT_MAX_DEPTH)
}

/// Tokenize filter text, rejecting group nesting that would exceed
/// `max_depth` tree levels.
pub fn tokenize_with(input: &str, max_depth: usize) -> Result<Vec<Token>> {
    let tokens = Lexer {
        input,
        pos: 0,
        tokens: Vec::new(),
        open_groups: Vec::new(),
        max_depth,
    }
    .run()?;
    tracing::trace!(tokens = tokens.len(), "tokenized filter");
    Ok(tokens)
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    tokens: Vec<Token>,
    open_groups: Vec<usize>,
    max_depth: usize,
}

impl Lexer<'_> {
    fn run(mut self) -> Result<Vec<Token>> {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else { break };

            match c {
                '(' => {
                    if self.open_groups.len() + 1 >= self.max_depth {
                        return Err(Error::TooDeep {
                            max: self.max_depth,
                        });
                    }
                    self.open_groups.push(self.pos);
                    self.push(TokenKind::GroupStart, self.pos, self.pos + 1);
                }
                ')' => {
                    if self.open_groups.pop().is_none() {
                        return Err(Error::syntax(self.pos, SyntaxError::GroupMismatch));
                    }
                    self.push(TokenKind::GroupEnd, self.pos, self.pos + 1);
                }
                '{' => {
                    let start = self.pos;
                    self.lex_property()?;
                    self.lex_operator(start)?;
                }
                _ => match self.match_logic() {
                    Some((logic, len)) => {
                        self.push(TokenKind::GroupLogic(logic), self.pos, self.pos + len);
                    }
                    None => return Err(Error::syntax(self.pos, SyntaxError::UnexpectedValue)),
                },
            }
        }

        if let Some(&start) = self.open_groups.last() {
            return Err(Error::syntax(start, SyntaxError::GroupMismatch));
        }
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn rest(&self) -> &str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos += skipped;
    }

    /// Records a token and moves past it.
    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token { kind, start, end });
        self.pos = end;
    }

    fn match_logic(&self) -> Option<(Logic, usize)> {
        let rest = self.rest();
        if rest.starts_with("&&") {
            return Some((Logic::And, 2));
        }
        if rest.starts_with("||") {
            return Some((Logic::Or, 2));
        }
        [("AND", Logic::And), ("OR", Logic::Or)]
            .into_iter()
            .find_map(|(word, logic)| {
                let head = rest.get(..word.len())?;
                let bounded = !rest[word.len()..].starts_with(is_word_char);
                (head.eq_ignore_ascii_case(word) && bounded).then_some((logic, word.len()))
            })
    }

    /// Lexes `{name}` starting at the current `{`.
    fn lex_property(&mut self) -> Result<()> {
        let input = self.input;
        let start = self.pos;
        let mut name = String::new();
        let mut chars = input[start + 1..].char_indices();

        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some((_, next @ ('{' | '}' | '\\'))) => name.push(next),
                    Some((_, next)) => {
                        name.push('\\');
                        name.push(next);
                    }
                    None => break,
                },
                '}' => {
                    let end = start + 1 + i + 1;
                    self.push(TokenKind::ConditionProperty(name), start, end);
                    return Ok(());
                }
                _ => name.push(c),
            }
        }

        Err(Error::syntax(start, SyntaxError::PropertyNotClosed))
    }

    /// Lexes the operator that must follow a property, then its value.
    fn lex_operator(&mut self, property_start: usize) -> Result<()> {
        self.skip_whitespace();
        let Some((op, len)) = Operator::match_prefix(self.rest()) else {
            return Err(Error::syntax(
                property_start,
                SyntaxError::PropertyWithoutOperator,
            ));
        };
        self.push(TokenKind::ConditionOp(op), self.pos, self.pos + len);

        self.lex_value()
    }

    /// Lexes the value after an operator, if there is one. Unary operators
    /// still consume a value token; the parser drops it.
    fn lex_value(&mut self) -> Result<()> {
        self.skip_whitespace();
        let Some(c) = self.peek() else {
            return Ok(());
        };
        if matches!(c, '(' | ')' | '{') || self.match_logic().is_some() {
            return Ok(());
        }

        let start = self.pos;
        let (end, style) = match c {
            '"' => (self.scan_quoted(start, '"')?, ValueStyle::DoubleQuoted),
            '\'' => (self.scan_quoted(start, '\'')?, ValueStyle::SingleQuoted),
            '[' => (self.scan_array(start)?, ValueStyle::Array),
            _ => (self.scan_naked(start)?, ValueStyle::Naked),
        };
        let raw = self.input[start..end].to_string();
        self.push(TokenKind::ConditionValue { raw, style }, start, end);
        Ok(())
    }

    fn scan_quoted(&self, start: usize, quote: char) -> Result<usize> {
        let mut escaped = false;
        for (i, c) in self.input[start + 1..].char_indices() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                return Ok(start + 1 + i + 1);
            }
        }
        Err(Error::syntax(
            start,
            SyntaxError::ValueNotClosed(Delimiter::for_quote(quote)),
        ))
    }

    fn scan_array(&self, start: usize) -> Result<usize> {
        let mut quote: Option<char> = None;
        let mut escaped = false;
        let mut depth = 0usize;

        for (i, c) in self.input[start + 1..].char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match (quote, c) {
                (_, '\\') => escaped = true,
                (Some(q), c) if c == q => quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => quote = Some(c),
                (None, '[') => depth += 1,
                (None, ']') if depth == 0 => return Ok(start + 1 + i + 1),
                (None, ']') => depth -= 1,
                (None, _) => {}
            }
        }

        Err(Error::syntax(
            start,
            SyntaxError::ValueNotClosed(Delimiter::Bracket),
        ))
    }

    fn scan_naked(&self, start: usize) -> Result<usize> {
        let mut escaped = false;
        for (i, c) in self.input[start..].char_indices() {
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '"' | '\'' => {
                    return Err(Error::syntax(start + i, SyntaxError::QuoteNotOpened(c)));
                }
                c if c.is_whitespace() || matches!(c, '(' | ')' | '[' | ']') => {
                    return Ok(start + i);
                }
                _ => {}
            }
        }
        Ok(self.input.len())
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
