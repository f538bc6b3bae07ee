// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical text and JSON forms of a filter.
//!
//! The text form parses back to the same tree:
//!
//! ```text
//! ({a} EQ 1 OR {b} EQ "x") AND {c} ISNULL
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};
use crate::value::Value;

use super::template::escape_property;
use super::tree::{Condition, Filter, LogicalGroup, Node};

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}} {}", escape_property(&self.property), self.op)?;
        if self.op.is_unary() {
            return Ok(());
        }
        match &self.value {
            Some(value) => write!(f, " {value}"),
            None => write!(f, " {}", Value::Undefined),
        }
    }
}

/// Children joined by the group's logic; nested groups are parenthesized and
/// empty ones left out. The group itself is not wrapped.
impl fmt::Display for LogicalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Frame<'a> {
            group: &'a LogicalGroup,
            next: usize,
            written: bool,
        }

        let mut stack = vec![Frame {
            group: self,
            next: 0,
            written: false,
        }];

        while let Some(frame) = stack.last_mut() {
            let group = frame.group;
            let Some(child) = group.filters.get(frame.next) else {
                stack.pop();
                if !stack.is_empty() {
                    f.write_str(")")?;
                }
                continue;
            };
            frame.next += 1;

            if let Node::Group(inner) = child {
                if inner.is_empty() {
                    continue;
                }
            }
            if frame.written {
                write!(f, " {} ", group.logic)?;
            }
            frame.written = true;

            match child {
                Node::Condition(condition) => write!(f, "{condition}")?,
                Node::Group(inner) => {
                    f.write_str("(")?;
                    stack.push(Frame {
                        group: inner,
                        next: 0,
                        written: false,
                    });
                }
            }
        }
        Ok(())
    }
}

/// The canonical filter text; empty for a filter without conditions.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tree() {
            Some(tree) => write!(f, "{tree}"),
            None => Ok(()),
        }
    }
}

/// Serializes the raw tree, or `null` when there is none.
impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.tree() {
            Some(tree) => tree.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

impl Filter {
    /// The tree as a JSON object: `{"logic": "and", "filters": [...]}`, or
    /// `null` when there is no tree.
    ///
    /// Object keys come back sorted; serialize the filter itself to keep the
    /// `logic, filters` and `property, op, value` field order.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::InvalidTree(e.to_string()))
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
