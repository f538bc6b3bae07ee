// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sift-core: filter and sort expressions for JSON records
//!
//! This crate provides the filter language (tokenizer, parser, condition
//! tree, serializer and evaluator), the sort language, and typed literal
//! values shared by both. It does no I/O.
//!
//! ```
//! use serde_json::json;
//! use sift_core::{sort, Filter};
//!
//! let filter: Filter = r#"{status} EQ "open" AND {priority} >= 2"#.parse()?;
//! assert!(filter.test(&[json!({"status": "open", "priority": 3})]));
//!
//! let mut records = vec![json!({"n": 1}), json!({"n": 2})];
//! sort::sort_records(&mut records, &sort::parse("{n} desc")?, true);
//! assert_eq!(records[0]["n"], 2);
//! # Ok::<(), sift_core::Error>(())
//! ```

pub mod error;
pub mod filter;
pub mod sort;
pub mod value;

pub use error::{Delimiter, Error, Result, SyntaxError};
pub use filter::{
    Condition, Filter, FilterOptions, FilterSource, Logic, LogicalGroup, Node, Operator,
};
pub use sort::{Direction, Sort};
pub use value::Value;
