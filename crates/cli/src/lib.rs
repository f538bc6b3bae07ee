// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! siftrs - the library behind the `sift` command line tool.
//!
//! `sift` checks and converts filter and sort expressions and applies them
//! to JSON records, using [`sift_core`] for the expression languages.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - command line definition
//! - [`Config`] - settings read from `sift.toml`
//! - [`records`] - JSON lines and JSON array input
//! - [`Error`] - error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use siftrs::{run, Cli};
//!
//! run(Cli::parse())?;
//! ```

mod cli;
mod commands;

pub mod config;
pub mod error;
pub mod records;

pub use cli::{Cli, Command, OutputFormat, TemplateArgs};
pub use config::Config;
pub use error::{Error, Result};

use sift_core::FilterOptions;

/// Loads the configuration and executes the command line.
pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(cli.config.as_deref(), &cwd)?;
    execute(cli.command, &config)
}

/// Execute a command with the given configuration. This is the main entry
/// point for library users and runs commands without process execution.
pub fn execute(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Check { filter, template } => {
            commands::check::run(&filter, &template, config.filter_options())
        }
        Command::Tree { filter, template } => {
            commands::tree::run(&filter, &template, config.filter_options())
        }
        Command::Convert { file } => {
            commands::convert::run(file.as_deref(), config.filter_options())
        }
        Command::Match {
            filter,
            template,
            input,
            sort,
            limit,
            output,
            no_dot_notation,
        } => commands::matches::run(
            &filter,
            &template,
            input.as_deref(),
            sort.as_deref(),
            limit,
            output.unwrap_or(config.output),
            match_options(config, no_dot_notation),
        ),
        Command::Sort { sort, output } => {
            commands::sort::run(&sort, output.unwrap_or(config.output))
        }
    }
}

/// Filter options for `match`; `--no-dot-notation` wins over the config.
fn match_options(config: &Config, no_dot_notation: bool) -> FilterOptions {
    FilterOptions {
        dot_notation: config.dot_notation && !no_dot_notation,
        ..config.filter_options()
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
