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

/// Prints the canonical text of a filter; an empty filter prints an empty
/// line.
pub(crate) fn run_impl(
    out: &mut impl Write,
    filter: &str,
    template: &TemplateArgs,
    options: FilterOptions,
) -> Result<()> {
    let filter = parse_filter(filter, template, options)?;
    tracing::debug!(depth = filter.depth(), "filter is valid");
    writeln!(out, "{filter}")?;
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
