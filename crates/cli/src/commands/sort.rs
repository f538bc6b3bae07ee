// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use sift_core::sort;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub fn run(text: &str, output: OutputFormat) -> Result<()> {
    run_impl(&mut io::stdout().lock(), text, output)
}

pub(crate) fn run_impl(out: &mut impl Write, text: &str, output: OutputFormat) -> Result<()> {
    let sorts = sort::parse(text).map_err(|e| Error::locate(e, text))?;
    match output {
        OutputFormat::Text => writeln!(out, "{}", sort::to_string(&sorts))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &sorts)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
