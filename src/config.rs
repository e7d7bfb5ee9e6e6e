// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search tunables.
//!
//! The defaults are the behaviour the study hub ships with: 300 ms debounce,
//! two-character minimum, six results. A JSON file can override any subset;
//! unknown keys are an error so a typo doesn't silently fall back to a default.
//!
//! ```json
//! { "debounceMs": 250, "maxResults": 8 }
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Delay between the last keystroke and the search it triggers.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Trimmed queries shorter than this close the panel instead of searching.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Results shown per search.
pub const DEFAULT_MAX_RESULTS: usize = 6;

/// Query terms shorter than this are not highlighted.
pub const DEFAULT_HIGHLIGHT_MIN_TERM_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    pub min_query_len: usize,
    pub max_results: usize,
    pub highlight_min_term_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_results: DEFAULT_MAX_RESULTS,
            highlight_min_term_len: DEFAULT_HIGHLIGHT_MIN_TERM_LEN,
        }
    }
}

impl SearchConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::Invalid("maxResults must be at least 1".to_string()));
        }
        if self.min_query_len == 0 {
            return Err(ConfigError::Invalid("minQueryLen must be at least 1".to_string()));
        }
        Ok(())
    }
}
