// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing shared by the engine, the scorer and the highlighter.

/// Trim and lower-case raw input. Internal whitespace is left alone.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a normalized query into whitespace-separated terms.
///
/// # Example
///
/// ```
/// use hubsearch::search::utils::parse_terms;
/// assert_eq!(parse_terms("cell  membrane"), vec!["cell", "membrane"]);
/// ```
pub fn parse_terms(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}

/// A normalized query and its terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    terms: Vec<String>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let text = normalize_query(raw);
        let terms = parse_terms(&text);
        Query { text, terms }
    }

    /// The whole normalized query, used for full-query matches.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters, which is what the minimum-length gate counts.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
