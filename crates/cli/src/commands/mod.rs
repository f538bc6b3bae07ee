// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod check;
pub mod convert;
pub mod matches;
pub mod sort;
pub mod tree;

use sift_core::filter::template;
use sift_core::{value, Filter, FilterOptions};

use crate::cli::TemplateArgs;
use crate::error::{Error, Result};

/// Parses filter text given on the command line.
///
/// Template arguments are coerced like filter values and bound to the `?`
/// placeholders first. Blank text gives an empty filter.
pub(crate) fn parse_filter(
    text: &str,
    template: &TemplateArgs,
    options: FilterOptions,
) -> Result<Filter> {
    let bound;
    let text = if template.args.is_empty() {
        text
    } else {
        let args = template
            .args
            .iter()
            .map(|arg| value::coerce(arg).map_err(|e| Error::locate(e, arg)))
            .collect::<Result<Vec<_>>>()?;
        bound = template::bind(text, &args)?;
        tracing::debug!(filter = %bound, "bound template arguments");
        bound.as_str()
    };

    let filter = Filter::parse_with(text, options).map_err(|e| Error::locate(e, text))?;
    Ok(filter.unwrap_or_else(|| Filter::with_options(options)))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
