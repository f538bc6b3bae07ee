// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line configuration.
//!
//! Configuration is read from `sift.toml` in the current directory, or from
//! the path given with `--config`, and includes:
//! - `dot_notation`: resolve `a.b` properties as nested paths (default true)
//! - `max_depth`: maximum group nesting accepted in filters (default 32)
//! - `output`: default output format, `text` or `json`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use sift_core::filter::DEFAULT_MAX_DEPTH;
use sift_core::FilterOptions;

use crate::cli::OutputFormat;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "sift.toml";

/// Settings shared by every command; flags override them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub dot_notation: bool,
    pub max_depth: usize,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dot_notation: true,
            max_depth: DEFAULT_MAX_DEPTH,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads and validates the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config: Config = toml::from_str(&content)?;
        if config.max_depth == 0 {
            return Err(Error::Config("max_depth must be at least 1".to_string()));
        }
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Loads `explicit` if given, else `sift.toml` in `dir` when present,
    /// else the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Config::load(path);
        }
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Config::load(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions {
            dot_notation: self.dot_notation,
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
