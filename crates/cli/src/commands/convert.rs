// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Read, Write};

use serde_json::Value as JsonValue;
use sift_core::{FilterOptions, FilterSource};

use crate::error::Result;
use crate::records;

pub fn run(file: Option<&str>, options: FilterOptions) -> Result<()> {
    let reader = records::open(file)?;
    run_impl(&mut io::stdout().lock(), reader, options)
}

/// Reads a native or legacy JSON tree and prints its filter text.
pub(crate) fn run_impl(
    out: &mut impl Write,
    reader: impl Read,
    options: FilterOptions,
) -> Result<()> {
    let content = records::read_to_string(reader)?;
    let json: JsonValue = serde_json::from_str(&content)?;
    let source = FilterSource::detect(json);
    tracing::debug!(legacy = matches!(source, FilterSource::Legacy(_)), "detected tree shape");
    let filter = source.into_filter(options)?;
    writeln!(out, "{filter}")?;
    Ok(())
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
