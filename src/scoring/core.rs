// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every document gets an integer: a plain sum of fixed weights for each place
//! the query shows up. Title beats code, code beats keyword, keyword beats
//! excerpt. There is no term frequency, no length normalization and no cap.
//!
//! # Weights (DO NOT CHANGE - rankings must stay compatible with the site)
//!
//! | Match                                   | Points        |
//! |-----------------------------------------|---------------|
//! | Whole query inside title                | 100           |
//! | Each term inside title                  | 50 per term   |
//! | Whole query inside code (if present)    | 80            |
//! | Whole query inside a keyword            | 30 per keyword|
//! | Each term inside a keyword              | 15 per pair   |
//! | Each term inside excerpt                | 5 per term    |
//!
//! All matching is substring matching on lower-cased text. A single keyword can
//! contribute the +30 and several +15s at once.

use crate::search::utils::Query;
use crate::types::{Document, FoldedFields};

/// Whole query found in the title.
pub const TITLE_QUERY_SCORE: u32 = 100;

/// Per query term found in the title.
pub const TITLE_TERM_SCORE: u32 = 50;

/// Whole query found in the topic code.
pub const CODE_QUERY_SCORE: u32 = 80;

/// Whole query found in a keyword (per keyword).
pub const KEYWORD_QUERY_SCORE: u32 = 30;

/// Query term found in a keyword (per term, per keyword).
pub const KEYWORD_TERM_SCORE: u32 = 15;

/// Per query term found in the excerpt.
pub const EXCERPT_TERM_SCORE: u32 = 5;

/// Score one document against a query. `0` means no match.
///
/// Folds the document on the fly; the search engine uses the index's
/// precomputed fields through `score_fields` instead.
pub fn score_document(doc: &Document, query: &Query) -> u32 {
    score_fields(&FoldedFields::from(doc), query)
}

/// Score lower-cased document fields against a normalized query.
pub fn score_fields(fields: &FoldedFields, query: &Query) -> u32 {
    let text = query.text();
    // INVARIANT: an empty query matches nothing
    if text.is_empty() {
        return 0;
    }
    let terms = query.terms();

    let mut score = 0;

    if fields.title.contains(text) {
        score += TITLE_QUERY_SCORE;
    }
    score += TITLE_TERM_SCORE * count_contained(&fields.title, terms);

    if let Some(code) = &fields.code {
        if code.contains(text) {
            score += CODE_QUERY_SCORE;
        }
    }

    for keyword in &fields.keywords {
        if keyword.contains(text) {
            score += KEYWORD_QUERY_SCORE;
        }
        score += KEYWORD_TERM_SCORE * count_contained(keyword, terms);
    }

    score += EXCERPT_TERM_SCORE * count_contained(&fields.excerpt, terms);

    score
}

/// How many terms occur in `haystack`. Repeated terms count each time.
fn count_contained(haystack: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|term| haystack.contains(term.as_str())).count() as u32
}
