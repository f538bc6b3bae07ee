// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter expressions over JSON records.
//!
//! A filter combines conditions with AND/OR and arbitrary nesting:
//!
//! ```text
//! {property} OP value [AND|OR {property} OP value ...]
//! ```
//!
//! # Operators
//!
//! - `EQ` / `EQUALS` / `==`, `NEQ` / `NOTEQUALS` / `!=`
//! - `LT`, `LTE`, `GT`, `GTE` (`<`, `<=`, `>`, `>=`)
//! - `STARTSWITH`, `ENDSWITH`, `CONTAINS` (`~~`), `DOESNOTCONTAIN` (`!~~`)
//! - `IN`, `NIN` / `NOTIN`
//! - Unary: `ISNULL`, `ISNOTNULL`, `ISEMPTY`, `ISNOTEMPTY`
//!
//! # Values
//!
//! Numbers, `true`/`false`, `null`, `undefined`, ISO-8601 date-times,
//! quoted strings, arrays (`[1, "a", null]`) and bare words.
//!
//! # Examples
//!
//! ```text
//! {status} EQ "open" AND {priority} >= 3
//! ({kind} IN [bug, task] OR {title} ~~ crash) AND {closed} ISNULL
//! {author.name} STARTSWITH 'Al'
//! ```
//!
//! Precedence is left to right: each change of logic wraps everything on
//! its left, so `a AND b OR c` means `(a AND b) OR c`.

mod display;
mod eval;
mod json;
mod op;
mod parser;
pub mod template;
mod token;
mod tree;

/// Default limit on group levels in one filter tree.
pub const DEFAULT_MAX_DEPTH: usize = 32;

pub(crate) use eval::resolve;
pub use json::FilterSource;
pub(crate) use op::is_word_char;
pub use op::{Logic, Operator};
pub use parser::parse_tokens;
pub use token::{tokenize, tokenize_with, Token, TokenKind, ValueStyle};
pub use tree::{Condition, Filter, FilterOptions, LogicalGroup, Node, NodeRef};
