// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the study-hub index.
//!
//! A `Document` is one topic page: what it is called, which subject and block
//! it belongs to, where it lives, and the words people might type to find it.
//! A `ScoredDocument` is what a search hands back: a borrowed document plus the
//! number that ranked it. Scores are never written back onto documents.
//!
//! # Invariants
//!
//! - **Document**: `title` non-empty, `url` non-empty, `block ≥ 1`.
//! - **Index**: `url` unique across all documents. Titles may repeat.
//!
//! These are checked once at load time by `index::validate`; nothing at query
//! time re-checks them.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// SUBJECT
// =============================================================================

/// Which subject a topic page belongs to.
///
/// The study hub has four subjects. Anything else is kept verbatim in
/// `Other` so a new subject added to the content doesn't break loading; it
/// just renders with its raw name as the badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Subject {
    Biology,
    Chemistry,
    Physics,
    SeparateBiology,
    Other(String),
}

impl Subject {
    /// The four subjects the site is organised around, in nav order.
    pub const KNOWN: [Subject; 4] = [
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::SeparateBiology,
    ];

    /// Slug as it appears in URLs, CSS modifiers and the index file.
    pub fn as_str(&self) -> &str {
        match self {
            Subject::Biology => "biology",
            Subject::Chemistry => "chemistry",
            Subject::Physics => "physics",
            Subject::SeparateBiology => "separate-biology",
            Subject::Other(raw) => raw,
        }
    }

    /// Short badge label shown next to each result.
    pub fn label(&self) -> &str {
        match self {
            Subject::Biology => "Bio",
            Subject::Chemistry => "Chem",
            Subject::Physics => "Phys",
            Subject::SeparateBiology => "Sep Bio",
            Subject::Other(raw) => raw,
        }
    }
}

impl From<String> for Subject {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "biology" => Subject::Biology,
            "chemistry" => Subject::Chemistry,
            "physics" => Subject::Physics,
            "separate-biology" => Subject::SeparateBiology,
            _ => Subject::Other(raw),
        }
    }
}

impl From<&str> for Subject {
    fn from(raw: &str) -> Self {
        Subject::from(raw.to_string())
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        match subject {
            Subject::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// One searchable topic page.
///
/// `title`, `url`, `keywords` and `excerpt` are required in the index file;
/// a missing one is a parse error, not something search tolerates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub subject: Subject,
    pub block: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Relative to the site root. Rendering prepends the page's path prefix.
    pub url: String,
    pub keywords: Vec<String>,
    pub excerpt: String,
}

/// Lower-cased copies of a document's searchable fields.
///
/// Built once per document when the index loads, so a search is pure
/// substring checks with no per-keystroke allocation on the document side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedFields {
    pub title: String,
    pub code: Option<String>,
    pub keywords: Vec<String>,
    pub excerpt: String,
}

impl From<&Document> for FoldedFields {
    fn from(doc: &Document) -> Self {
        FoldedFields {
            title: doc.title.to_lowercase(),
            code: doc.code.as_ref().map(|c| c.to_lowercase()),
            keywords: doc.keywords.iter().map(|k| k.to_lowercase()).collect(),
            excerpt: doc.excerpt.to_lowercase(),
        }
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// A document that matched a query, with its relevance score.
///
/// `position` is the document's place in index order. It is the tie-breaker
/// when two documents score the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredDocument<'a> {
    #[serde(flatten)]
    pub doc: &'a Document,
    pub position: usize,
    pub score: u32,
}
