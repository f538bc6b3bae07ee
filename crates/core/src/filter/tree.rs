// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Condition tree and the builder operations shared by the parser.
//!
//! A [`Filter`] owns at most one root [`LogicalGroup`]. Every way of adding
//! to a filter goes through [`Filter::add`], which applies the precedence
//! rule: a change of logic wraps everything accumulated so far.
//!
//! ```text
//! or(a).or(b).and(c)   =>   (a OR b) AND c
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::value::Value;

use super::op::{Logic, Operator};
use super::DEFAULT_MAX_DEPTH;

/// Options that travel with a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOptions {
    /// Resolve `a.b.c` properties as nested lookups rather than one key.
    pub dot_notation: bool,
    /// Maximum number of group levels in the tree, root included.
    pub max_depth: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            dot_notation: true,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// A leaf testing one property with one operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    pub property: String,
    pub op: Operator,
    #[serde(skip_serializing_if = "is_absent")]
    pub value: Option<Value>,
}

fn is_absent(value: &Option<Value>) -> bool {
    matches!(value, None | Some(Value::Undefined))
}

impl Condition {
    /// Creates a condition. Unary operators discard `value`.
    pub fn new(property: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        let value = if op.is_unary() {
            None
        } else {
            Some(value.into())
        };
        Self {
            property: property.into(),
            op,
            value,
        }
    }

    /// Creates a condition without a value.
    pub fn unary(property: impl Into<String>, op: Operator) -> Self {
        Self {
            property: property.into(),
            op,
            value: None,
        }
    }
}

/// Children combined with one logic operator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogicalGroup {
    pub logic: Logic,
    pub filters: Vec<Node>,
}

/// A group or a condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Node {
    Group(LogicalGroup),
    Condition(Condition),
}

/// A borrowed view of a node, handed to [`LogicalGroup::walk`] callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    Group(&'a LogicalGroup),
    Condition(&'a Condition),
}

impl Node {
    pub fn view(&self) -> NodeRef<'_> {
        match self {
            Node::Group(group) => NodeRef::Group(group),
            Node::Condition(condition) => NodeRef::Condition(condition),
        }
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Node::Condition(condition)
    }
}

impl From<LogicalGroup> for Node {
    fn from(group: LogicalGroup) -> Self {
        Node::Group(group)
    }
}

impl From<Filter> for Node {
    fn from(filter: Filter) -> Self {
        Node::Group(
            filter
                .tree
                .unwrap_or_else(|| LogicalGroup::new(Logic::And)),
        )
    }
}

impl LogicalGroup {
    pub fn new(logic: Logic) -> Self {
        Self {
            logic,
            filters: Vec::new(),
        }
    }

    /// True when no condition exists anywhere below this group.
    pub fn is_empty(&self) -> bool {
        let mut stack = vec![self];
        while let Some(group) = stack.pop() {
            for child in &group.filters {
                match child {
                    Node::Condition(_) => return false,
                    Node::Group(inner) => stack.push(inner),
                }
            }
        }
        true
    }

    /// Number of group levels, this group included.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((group, level)) = stack.pop() {
            deepest = deepest.max(level);
            for child in &group.filters {
                if let Node::Group(inner) = child {
                    stack.push((inner, level + 1));
                }
            }
        }
        deepest
    }

    /// Visits every group and condition once, depth-first and pre-order.
    ///
    /// The callback receives the node, its depth (this group is 0) and the
    /// group containing it.
    pub fn walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a>, usize, Option<&'a LogicalGroup>),
    {
        let mut stack = vec![(NodeRef::Group(self), 0, None)];
        while let Some((node, depth, parent)) = stack.pop() {
            visit(node, depth, parent);
            if let NodeRef::Group(group) = node {
                for child in group.filters.iter().rev() {
                    stack.push((child.view(), depth + 1, Some(group)));
                }
            }
        }
    }
}

/// A filter: an optional condition tree plus evaluation options.
///
/// A filter without a tree has no conditions and matches every record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Filter {
    tree: Option<LogicalGroup>,
    depth: usize,
    options: FilterOptions,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: FilterOptions) -> Self {
        Self {
            tree: None,
            depth: 0,
            options,
        }
    }

    /// Wraps an existing tree, checking it against the default depth limit.
    pub fn from_tree(tree: LogicalGroup) -> Result<Self> {
        Self::from_tree_with(tree, FilterOptions::default())
    }

    pub fn from_tree_with(tree: LogicalGroup, options: FilterOptions) -> Result<Self> {
        let depth = tree.depth();
        if depth > options.max_depth {
            return Err(Error::TooDeep {
                max: options.max_depth,
            });
        }
        Ok(Self {
            tree: Some(tree),
            depth,
            options,
        })
    }

    pub fn tree(&self) -> Option<&LogicalGroup> {
        self.tree.as_ref()
    }

    pub fn into_tree(self) -> Option<LogicalGroup> {
        self.tree
    }

    pub fn options(&self) -> FilterOptions {
        self.options
    }

    /// Turns dot-addressing of properties on or off for evaluation.
    pub fn set_dot_notation(&mut self, enabled: bool) -> &mut Self {
        self.options.dot_notation = enabled;
        self
    }

    /// True when the filter has no conditions anywhere.
    pub fn is_empty(&self) -> bool {
        self.tree.as_ref().map_or(true, LogicalGroup::is_empty)
    }

    /// Number of group levels in the tree (0 when there is no tree).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Adds a node under `logic`.
    ///
    /// - An empty filter gets a root group with `logic`.
    /// - A node under the root's logic is appended as the last child.
    /// - A condition under the other logic wraps the current root:
    ///   `root = logic[old_root, node]`.
    ///
    /// Groups (and whole filters) are always appended to the current root
    /// as a single child under the root's own logic, whatever `logic` says.
    /// They are never flattened; empty ones are ignored.
    pub fn add(&mut self, logic: Logic, node: impl Into<Node>) -> Result<&mut Self> {
        let node = node.into();
        let node_depth = match &node {
            Node::Condition(condition) if condition.property.is_empty() => {
                return Err(Error::MissingProperty);
            }
            Node::Condition(_) => 0,
            Node::Group(group) if group.is_empty() => return Ok(self),
            Node::Group(group) => group.depth(),
        };

        let is_group = matches!(node, Node::Group(_));
        let depth = match &self.tree {
            None => 1 + node_depth,
            Some(root) if is_group || root.logic == logic => self.depth.max(1 + node_depth),
            Some(_) => (self.depth + 1).max(1 + node_depth),
        };
        if depth > self.options.max_depth {
            tracing::debug!(depth, max = self.options.max_depth, "rejecting deep filter");
            return Err(Error::TooDeep {
                max: self.options.max_depth,
            });
        }

        let root = match self.tree.take() {
            None => LogicalGroup {
                logic,
                filters: vec![node],
            },
            Some(mut root) if is_group || root.logic == logic => {
                root.filters.push(node);
                root
            }
            Some(root) => LogicalGroup {
                logic,
                filters: vec![Node::Group(root), node],
            },
        };
        self.tree = Some(root);
        self.depth = depth;
        Ok(self)
    }

    /// Adds `property op value` under AND.
    pub fn and(
        &mut self,
        property: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        self.add(Logic::And, Condition::new(property, op, value))
    }

    /// Adds `property op value` under OR.
    pub fn or(
        &mut self,
        property: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        self.add(Logic::Or, Condition::new(property, op, value))
    }

    /// Adds a condition from textual arguments, as received from request
    /// layers that do not know the typed operators.
    pub fn add_parts(
        &mut self,
        logic: &str,
        property: &str,
        op: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let logic: Logic = logic.parse()?;
        if property.trim().is_empty() {
            return Err(Error::MissingProperty);
        }
        let op: Operator = op.parse()?;
        self.add(logic, Condition::new(property, op, value))
    }

    /// Visits every node of the tree; does nothing for an empty filter.
    pub fn walk<'a, F>(&'a self, visit: F)
    where
        F: FnMut(NodeRef<'a>, usize, Option<&'a LogicalGroup>),
    {
        if let Some(tree) = &self.tree {
            tree.walk(visit);
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
