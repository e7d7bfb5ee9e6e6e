// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the hubsearch command-line interface.
//!
//! Five subcommands: `search` and `render` to try queries against an index
//! the way the site would, `validate` and `inspect` to check an index before
//! it ships, and `coverage` to find content pages the index forgot.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hubsearch", about = "Study-hub topic search index tool", version)]
pub struct Cli {
    /// JSON file overriding search settings (debounceMs, minQueryLen, maxResults, ...)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable info-level logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index and display ranked results
    Search {
        /// Path to the index JSON file
        index: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results (defaults to the configured maxResults)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,

        /// Page pathname used to resolve result links
        #[arg(long, default_value = "/")]
        page: String,
    },

    /// Print the results panel HTML the search box would show
    Render {
        /// Path to the index JSON file
        index: PathBuf,

        /// Search query
        query: String,

        /// Page pathname used to resolve result links
        #[arg(long, default_value = "/")]
        page: String,
    },

    /// Check an index for missing fields, empty titles and duplicate URLs
    Validate {
        /// Path to the index JSON file
        index: PathBuf,
    },

    /// Summarize an index: documents per subject and block, fingerprint
    Inspect {
        /// Path to the index JSON file
        index: PathBuf,
    },

    /// List content pages under a site root that have no index entry
    Coverage {
        /// Path to the index JSON file
        index: PathBuf,

        /// Site root containing subjects/<subject>/<block>/*.html
        #[arg(short, long)]
        site: PathBuf,
    },
}
