// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use sift_core::FilterOptions;

use crate::cli::TemplateArgs;
use crate::error::Result;

use super::parse_filter;

pub fn run(filter: &str, template: &TemplateArgs, options: FilterOptions) -> Result<()> {
    run_impl(&mut io::stdout().lock(), filter, template, options)
}

/// Prints the filter as a pretty JSON tree, `null` when it is empty.
pub(crate) fn run_impl(
    out: &mut impl Write,
    filter: &str,
    template: &TemplateArgs,
    options: FilterOptions,
) -> Result<()> {
    let filter = parse_filter(filter, template, options)?;
    serde_json::to_writer_pretty(&mut *out, &filter)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
