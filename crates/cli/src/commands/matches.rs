// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value as JsonValue;
use sift_core::{sort, Filter, FilterOptions, Sort};

use crate::cli::{OutputFormat, TemplateArgs};
use crate::error::{Error, Result};
use crate::records;

use super::parse_filter;

/// JSON output structure for the match command.
#[derive(Serialize)]
struct MatchOutputJson<'a> {
    records: &'a [JsonValue],
    total: usize,
    matched: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

/// Everything the match command needs besides its input.
pub(crate) struct Query {
    pub filter: Filter,
    pub sorts: Vec<Sort>,
    pub limit: Option<usize>,
    pub output: OutputFormat,
}

impl Query {
    pub fn parse(
        filter: &str,
        template: &TemplateArgs,
        sort: Option<&str>,
        limit: Option<usize>,
        output: OutputFormat,
        options: FilterOptions,
    ) -> Result<Self> {
        let filter = parse_filter(filter, template, options)?;
        let sorts = match sort {
            Some(text) => sort::parse(text).map_err(|e| Error::locate(e, text))?,
            None => Vec::new(),
        };
        Ok(Query {
            filter,
            sorts,
            limit,
            output,
        })
    }
}

pub fn run(
    filter: &str,
    template: &TemplateArgs,
    input: Option<&str>,
    sort: Option<&str>,
    limit: Option<usize>,
    output: OutputFormat,
    options: FilterOptions,
) -> Result<()> {
    // Expressions are checked before any input is read
    let query = Query::parse(filter, template, sort, limit, output, options)?;
    let records = records::read(records::open(input)?)?;
    run_impl(&mut io::stdout().lock(), records, &query)
}

/// Keeps the matching records, sorts and limits them, and prints them.
pub(crate) fn run_impl(out: &mut impl Write, records: Vec<JsonValue>, query: &Query) -> Result<()> {
    let total = records.len();
    let mut matched: Vec<JsonValue> = records
        .into_iter()
        .filter(|record| query.filter.matches(record))
        .collect();
    let matched_count = matched.len();

    sort::sort_records(
        &mut matched,
        &query.sorts,
        query.filter.options().dot_notation,
    );
    if let Some(limit) = query.limit {
        matched.truncate(limit);
    }
    tracing::debug!(total, matched = matched_count, shown = matched.len(), "matched records");

    match query.output {
        OutputFormat::Text => {
            for record in &matched {
                writeln!(out, "{}", serde_json::to_string(record)?)?;
            }
        }
        OutputFormat::Json => {
            let output = MatchOutputJson {
                records: &matched,
                total,
                matched: matched_count,
                filter: (!query.filter.is_empty()).then(|| query.filter.to_string()),
                sort: (!query.sorts.is_empty()).then(|| sort::to_string(&query.sorts)),
                limit: query.limit,
            };
            serde_json::to_writer_pretty(&mut *out, &output)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "matches_tests.rs"]
mod tests;
