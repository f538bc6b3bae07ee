// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "sift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check, convert and apply filter and sort expressions to JSON records")]
#[command(
    long_about = "Check, convert and apply filter and sort expressions to JSON records.\n\n\
    Filters look like {status} EQ \"open\" AND ({priority} >= 2 OR {tags} IN [\"urgent\"]).\n\
    Sorts look like {priority} desc, {title}."
)]
pub struct Cli {
    /// Read configuration from <path> instead of ./sift.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Values bound to `?` placeholders in a filter.
#[derive(Args, Clone, Debug, Default)]
pub struct TemplateArgs {
    /// Bind a value to the next `?` placeholder (repeatable, in order)
    #[arg(long = "arg", short = 'a', value_name = "VALUE")]
    pub args: Vec<String>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a filter and print its canonical form
    #[command(after_help = "\
Examples:
  sift check '{status} eq open and {n} > 2'      Prints {status} EQ \"open\" AND {n} GT 2
  sift check '{name} EQ ?' --arg 'O\"Brien'       Bind a value to a placeholder")]
    Check {
        /// Filter expression
        filter: String,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Print the JSON tree of a filter
    Tree {
        /// Filter expression
        filter: String,

        #[command(flatten)]
        template: TemplateArgs,
    },

    /// Convert a JSON filter tree to a filter expression
    #[command(after_help = "\
Both tree shapes are accepted:
  {\"logic\": \"and\", \"filters\": [{\"property\": \"a\", \"op\": \"EQ\", \"value\": 1}]}
  {\"logic\": \"and\", \"filters\": [{\"field\": \"a\", \"operator\": \"EQ\", \"value\": 1}]}")]
    Convert {
        /// JSON file to read (stdin if omitted or '-')
        file: Option<String>,
    },

    /// Print the records matching a filter
    #[command(after_help = "\
Records are read as JSON lines or as one JSON array.

Examples:
  sift match '{status} EQ \"open\"' -i issues.jsonl
  sift match '{age} >= 18' -s '{age} desc, {name}' -n 10 -o json")]
    Match {
        /// Filter expression (empty matches every record)
        filter: String,

        #[command(flatten)]
        template: TemplateArgs,

        /// Records file (stdin if omitted or '-')
        #[arg(long, short)]
        input: Option<String>,

        /// Sort expression applied to the matches
        #[arg(long, short)]
        sort: Option<String>,

        /// Maximum number of records to print
        #[arg(long, short = 'n')]
        limit: Option<usize>,

        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,

        /// Treat dotted properties as plain keys
        #[arg(long)]
        no_dot_notation: bool,
    },

    /// Parse a sort expression and print its canonical form
    Sort {
        /// Sort expression
        sort: String,

        /// Output format
        #[arg(long, short, value_enum)]
        output: Option<OutputFormat>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
