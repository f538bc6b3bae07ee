// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors the sift command line can report.
///
/// Filter and sort errors come from [`sift_core::Error`]; syntax errors in
/// text given on the command line are reported with the text and a caret
/// under the offending position.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Sift(#[from] sift_core::Error),

    #[error("{source}\n  {text}\n  {caret}")]
    Located {
        source: sift_core::Error,
        text: String,
        caret: String,
    },

    #[error("line {line}: {reason}")]
    RecordLine { line: usize, reason: String },

    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for sift command operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Attaches the parsed text to a syntax error so it can be shown with a
    /// caret. Other errors pass through unchanged.
    pub fn locate(error: sift_core::Error, text: &str) -> Self {
        let Some(index) = error.index() else {
            return Error::Sift(error);
        };
        let column = text
            .get(..index)
            .unwrap_or(text)
            .chars()
            .count();
        let text = text
            .chars()
            .map(|c| if c.is_whitespace() { ' ' } else { c })
            .collect();
        Error::Located {
            source: error,
            text,
            caret: format!("{}^", " ".repeat(column)),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
