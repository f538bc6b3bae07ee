// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for sift-core operations.

use std::fmt;

use thiserror::Error;

/// All possible errors that can occur while building, parsing or converting
/// filters and sorts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("syntax error at index {index}: {kind}")]
    Syntax { index: usize, kind: SyntaxError },

    #[error("filter is nested too deeply\n  hint: the maximum nesting depth is {max}")]
    TooDeep { max: usize },

    #[error("missing logic argument\n  hint: valid logic operators are: and, or")]
    MissingLogic,

    #[error("invalid logic '{0}'\n  hint: valid logic operators are: and, or")]
    InvalidLogic(String),

    #[error("missing property argument")]
    MissingProperty,

    #[error("missing operator argument")]
    MissingOperator,

    #[error("invalid operator '{0}'\n  hint: valid operators are: {ops}", ops = crate::filter::Operator::valid_names())]
    InvalidOperator(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("invalid filter tree: {0}")]
    InvalidTree(String),

    #[error("template expects {expected} argument(s) but {given} were given")]
    TemplateArguments { expected: usize, given: usize },
}

impl Error {
    pub(crate) fn syntax(index: usize, kind: SyntaxError) -> Self {
        Error::Syntax { index, kind }
    }

    /// Shifts the index of a syntax error by `offset`.
    ///
    /// Value coercion reports positions relative to the value text; the
    /// parser rebases them onto the whole filter string.
    pub(crate) fn offset(self, offset: usize) -> Self {
        match self {
            Error::Syntax { index, kind } => Error::Syntax {
                index: index + offset,
                kind,
            },
            other => other,
        }
    }

    /// Byte index of a syntax error, if this is one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::Syntax { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Categories of lexical and grammatical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("value is not closed properly, missing closing {0}")]
    ValueNotClosed(Delimiter),

    #[error("quote {0} was not opened, escape it with a backslash")]
    QuoteNotOpened(char),

    #[error("property is not closed properly, missing '}}'")]
    PropertyNotClosed,

    #[error("invalid or unexpected value")]
    UnexpectedValue,

    #[error("mismatched parenthesis in group")]
    GroupMismatch,

    #[error("property is not followed by a valid operator")]
    PropertyWithoutOperator,

    #[error("invalid or unexpected sort token")]
    UnexpectedSortToken,
}

/// The closing character a value was waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    DoubleQuote,
    SingleQuote,
    Bracket,
}

impl Delimiter {
    pub(crate) fn for_quote(quote: char) -> Self {
        if quote == '\'' {
            Delimiter::SingleQuote
        } else {
            Delimiter::DoubleQuote
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::DoubleQuote => write!(f, "double quote"),
            Delimiter::SingleQuote => write!(f, "single quote"),
            Delimiter::Bracket => write!(f, "bracket"),
        }
    }
}

/// A specialized Result type for sift-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
