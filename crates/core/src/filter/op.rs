// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logic and comparison operators.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};

/// How the children of a group are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Logic {
    #[default]
    And,
    Or,
}

impl Logic {
    /// Returns the lowercase name used in the JSON tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            Logic::And => "and",
            Logic::Or => "or",
        }
    }

    /// Returns the keyword used in filter text.
    pub fn keyword(&self) -> &'static str {
        match self {
            Logic::And => "AND",
            Logic::Or => "OR",
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

impl FromStr for Logic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "" => Err(Error::MissingLogic),
            "and" | "&&" => Ok(Logic::And),
            "or" | "||" => Ok(Logic::Or),
            _ => Err(Error::InvalidLogic(s.to_string())),
        }
    }
}

impl Serialize for Logic {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Logic {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// Comparison operators a condition can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    IsNull,
    IsNotNull,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    StartsWith,
    EndsWith,
    Contains,
    DoesNotContain,
    IsEmpty,
    IsNotEmpty,
    In,
    NotIn,
}

/// Every accepted spelling of every operator, longest first.
///
/// The tokenizer tries entries in order, so `>=` is matched before `>` and
/// `ISNOTNULL` before `ISNULL`.
pub(crate) const OPERATOR_TOKENS: &[(&str, Operator)] = &[
    ("GREATERTHANOREQUAL", Operator::GreaterThanOrEqual),
    ("LESSTHANOREQUAL", Operator::LessThanOrEqual),
    ("DOESNOTCONTAIN", Operator::DoesNotContain),
    ("GREATERTHAN", Operator::GreaterThan),
    ("ISNOTEMPTY", Operator::IsNotEmpty),
    ("STARTSWITH", Operator::StartsWith),
    ("ISNOTNULL", Operator::IsNotNull),
    ("NOTEQUALS", Operator::NotEquals),
    ("LESSTHAN", Operator::LessThan),
    ("ENDSWITH", Operator::EndsWith),
    ("CONTAINS", Operator::Contains),
    ("ISEMPTY", Operator::IsEmpty),
    ("EQUALS", Operator::Equals),
    ("ISNULL", Operator::IsNull),
    ("NOTIN", Operator::NotIn),
    ("NEQ", Operator::NotEquals),
    ("LTE", Operator::LessThanOrEqual),
    ("GTE", Operator::GreaterThanOrEqual),
    ("NIN", Operator::NotIn),
    ("!~~", Operator::DoesNotContain),
    ("EQ", Operator::Equals),
    ("LT", Operator::LessThan),
    ("GT", Operator::GreaterThan),
    ("IN", Operator::In),
    (">=", Operator::GreaterThanOrEqual),
    ("<=", Operator::LessThanOrEqual),
    ("==", Operator::Equals),
    ("!=", Operator::NotEquals),
    ("~~", Operator::Contains),
    (">", Operator::GreaterThan),
    ("<", Operator::LessThan),
];

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Operator; 16] = [
        Operator::Equals,
        Operator::NotEquals,
        Operator::IsNull,
        Operator::IsNotNull,
        Operator::LessThan,
        Operator::LessThanOrEqual,
        Operator::GreaterThan,
        Operator::GreaterThanOrEqual,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Contains,
        Operator::DoesNotContain,
        Operator::IsEmpty,
        Operator::IsNotEmpty,
        Operator::In,
        Operator::NotIn,
    ];

    /// Returns the short lowercase code used in the JSON tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "eq",
            Operator::NotEquals => "neq",
            Operator::IsNull => "isnull",
            Operator::IsNotNull => "isnotnull",
            Operator::LessThan => "lt",
            Operator::LessThanOrEqual => "lte",
            Operator::GreaterThan => "gt",
            Operator::GreaterThanOrEqual => "gte",
            Operator::StartsWith => "startswith",
            Operator::EndsWith => "endswith",
            Operator::Contains => "contains",
            Operator::DoesNotContain => "doesnotcontain",
            Operator::IsEmpty => "isempty",
            Operator::IsNotEmpty => "isnotempty",
            Operator::In => "in",
            Operator::NotIn => "nin",
        }
    }

    /// Unary operators take no value.
    pub fn is_unary(&self) -> bool {
        matches!(
            self,
            Operator::IsNull | Operator::IsNotNull | Operator::IsEmpty | Operator::IsNotEmpty
        )
    }

    /// Returns valid operator codes for error messages.
    pub fn valid_names() -> &'static str {
        "eq, neq, isnull, isnotnull, lt, lte, gt, gte, startswith, endswith, \
         contains, doesnotcontain, isempty, isnotempty, in, nin"
    }

    /// Match an operator spelling at the start of `input`.
    ///
    /// Returns the operator and the number of bytes it spans. Word spellings
    /// must end at a word boundary so `INSIDE` is not read as `IN`.
    pub(crate) fn match_prefix(input: &str) -> Option<(Operator, usize)> {
        OPERATOR_TOKENS.iter().find_map(|&(token, op)| {
            let head = input.get(..token.len())?;
            if !head.eq_ignore_ascii_case(token) {
                return None;
            }
            let is_word = token.bytes().all(|b| b.is_ascii_alphabetic());
            if is_word && input[token.len()..].starts_with(is_word_char) {
                return None;
            }
            Some((op, token.len()))
        })
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Filter text uses the code upper-cased (`EQ`, `NEQ`, `ISNULL`).
impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::MissingOperator);
        }
        OPERATOR_TOKENS
            .iter()
            .find(|(token, _)| token.eq_ignore_ascii_case(trimmed))
            .map(|&(_, op)| op)
            .ok_or_else(|| Error::InvalidOperator(s.to_string()))
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
#[path = "op_tests.rs"]
mod tests;
