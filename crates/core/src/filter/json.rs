// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ingestion of filter trees from JSON.
//!
//! Two object shapes are accepted:
//!
//! ```text
//! native: {"logic": "and", "filters": [{"property": "a", "op": "eq", "value": 1}]}
//! legacy: {"logic": "and", "filters": [{"field": "a", "operator": "eq", "value": 1}]}
//! ```
//!
//! The legacy shape is the one data-grid widgets send. A document is
//! classified once by [`FilterSource::detect`] and then converted with the
//! key names of that shape only.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};
use crate::value::Value;

use super::op::{Logic, Operator};
use super::tree::{Condition, Filter, FilterOptions, LogicalGroup, Node};

/// Anything a filter can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterSource {
    /// An existing filter, used as is.
    Filter(Filter),
    /// A tree using `property` / `op` keys.
    Tree(JsonValue),
    /// A tree using `field` / `operator` keys.
    Legacy(JsonValue),
}

impl FilterSource {
    /// Classifies a JSON document by the keys of its first condition.
    ///
    /// Documents without any condition are treated as native trees.
    pub fn detect(json: JsonValue) -> Self {
        let legacy = {
            let mut node = &json;
            while let Some(first) = node
                .get("filters")
                .and_then(JsonValue::as_array)
                .and_then(|children| children.first())
            {
                node = first;
            }
            node.get("field").is_some() || node.get("operator").is_some()
        };
        if legacy {
            FilterSource::Legacy(json)
        } else {
            FilterSource::Tree(json)
        }
    }

    /// Converts to a filter with the given options.
    ///
    /// A [`FilterSource::Filter`] keeps its own options.
    pub fn into_filter(self, options: FilterOptions) -> Result<Filter> {
        let (json, keys) = match self {
            FilterSource::Filter(filter) => return Ok(filter),
            FilterSource::Tree(json) => (json, Keys::NATIVE),
            FilterSource::Legacy(json) => (json, Keys::LEGACY),
        };

        let tree = match &json {
            JsonValue::Object(map) if map.contains_key("filters") => {
                keys.group(map, 1, options.max_depth)?
            }
            JsonValue::Object(map) => LogicalGroup {
                logic: Logic::And,
                filters: vec![Node::Condition(keys.condition(map)?)],
            },
            other => {
                return Err(Error::InvalidTree(format!(
                    "expected an object, found {}",
                    kind(other)
                )))
            }
        };
        tracing::debug!(legacy = keys.legacy, "converted filter tree from json");
        Filter::from_tree_with(tree, options)
    }
}

impl TryFrom<FilterSource> for Filter {
    type Error = Error;

    fn try_from(source: FilterSource) -> Result<Self> {
        source.into_filter(FilterOptions::default())
    }
}

impl Filter {
    /// Builds a filter from a native or legacy JSON tree.
    pub fn from_json(json: JsonValue) -> Result<Self> {
        Filter::try_from(FilterSource::detect(json))
    }
}

impl<'de> Deserialize<'de> for Filter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Null => Ok(Filter::new()),
            JsonValue::String(text) => text.parse().map_err(de::Error::custom),
            json => Filter::from_json(json).map_err(de::Error::custom),
        }
    }
}

/// Key names of one tree shape.
struct Keys {
    property: &'static str,
    op: &'static str,
    legacy: bool,
}

impl Keys {
    const NATIVE: Keys = Keys {
        property: "property",
        op: "op",
        legacy: false,
    };
    const LEGACY: Keys = Keys {
        property: "field",
        op: "operator",
        legacy: true,
    };

    fn group(
        &self,
        map: &Map<String, JsonValue>,
        level: usize,
        max_depth: usize,
    ) -> Result<LogicalGroup> {
        if level > max_depth {
            return Err(Error::TooDeep { max: max_depth });
        }
        let logic = match map.get("logic") {
            None => Logic::And,
            Some(JsonValue::String(logic)) => logic.parse()?,
            Some(other) => {
                return Err(Error::InvalidTree(format!(
                    "logic must be a string, found {}",
                    kind(other)
                )))
            }
        };
        let Some(children) = map.get("filters").and_then(JsonValue::as_array) else {
            return Err(Error::InvalidTree("filters must be an array".to_string()));
        };

        let mut filters = Vec::with_capacity(children.len());
        for child in children {
            let node = match child {
                JsonValue::Object(inner) if inner.contains_key("filters") => {
                    Node::Group(self.group(inner, level + 1, max_depth)?)
                }
                JsonValue::Object(inner) => Node::Condition(self.condition(inner)?),
                other => {
                    return Err(Error::InvalidTree(format!(
                        "expected a group or condition object, found {}",
                        kind(other)
                    )))
                }
            };
            filters.push(node);
        }
        Ok(LogicalGroup { logic, filters })
    }

    fn condition(&self, map: &Map<String, JsonValue>) -> Result<Condition> {
        let property = match map.get(self.property) {
            Some(JsonValue::String(property)) if !property.is_empty() => property.clone(),
            Some(JsonValue::String(_)) | None => return Err(Error::MissingProperty),
            Some(other) => {
                return Err(Error::InvalidTree(format!(
                    "{} must be a string, found {}",
                    self.property,
                    kind(other)
                )))
            }
        };
        let op: Operator = match map.get(self.op) {
            Some(JsonValue::String(op)) => op.parse()?,
            None => return Err(Error::MissingOperator),
            Some(other) => {
                return Err(Error::InvalidTree(format!(
                    "{} must be a string, found {}",
                    self.op,
                    kind(other)
                )))
            }
        };
        let value = match map.get("value") {
            _ if op.is_unary() => None,
            Some(json) => Some(Value::from_json(json)?),
            None => None,
        };
        Ok(Condition { property, op, value })
    }
}

fn kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
