// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for hubsearch.
//!
//! Search itself cannot fail. Everything here happens before the first query:
//! reading and validating the index, and reading the configuration.

use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while validating an index.
///
/// Positions are zero-based places in index order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("document {position}: title is empty")]
    EmptyTitle { position: usize },
    #[error("document {position} ({title}): url is empty")]
    EmptyUrl { position: usize, title: String },
    #[error("document {position} ({url}): block must be at least 1")]
    ZeroBlock { position: usize, url: String },
    #[error("documents {first} and {second} share url {url}")]
    DuplicateUrl {
        url: String,
        first: usize,
        second: usize,
    },
}

/// Errors that can occur while loading a document index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to read the index file
    #[error("failed to read index {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The index is not valid JSON or a required field is missing
    #[error("invalid index JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The index parsed but breaks one or more invariants
    #[error("index rejected with {} violation(s): {}", .0.len(), summarize(.0))]
    Invalid(Vec<Violation>),
}

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config is not valid JSON or has unknown keys
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Any error the library can return.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn summarize(violations: &[Violation]) -> String {
    const SHOWN: usize = 3;
    let mut parts: Vec<String> = violations.iter().take(SHOWN).map(|v| v.to_string()).collect();
    if violations.len() > SHOWN {
        parts.push(format!("and {} more", violations.len() - SHOWN));
    }
    parts.join("; ")
}
