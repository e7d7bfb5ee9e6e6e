// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: score every document, keep the matches, rank, truncate.
//!
//! A full scan. The study hub has a few dozen pages, so an inverted index
//! would be more code than the search it saves. The engine never fails: an
//! empty or unmatched query is just an empty result list.

pub mod utils;

use crate::config::{SearchConfig, DEFAULT_MAX_RESULTS};
use crate::index::DocumentIndex;
use crate::scoring::ranking::rank;
use crate::scoring::score_fields;
use crate::types::ScoredDocument;
use std::sync::Arc;
use tracing::debug;
use utils::Query;

/// Search `index` for `query`, returning at most six results.
///
/// Does no length validation; a one-character query is scored like any other.
pub fn search<'a>(index: &'a DocumentIndex, query: &str) -> Vec<ScoredDocument<'a>> {
    search_with_limit(index, &Query::parse(query), DEFAULT_MAX_RESULTS)
}

/// Search with an already parsed query and an explicit result limit.
pub fn search_with_limit<'a>(
    index: &'a DocumentIndex,
    query: &Query,
    limit: usize,
) -> Vec<ScoredDocument<'a>> {
    if query.is_empty() {
        return Vec::new();
    }

    let scored = index
        .entries()
        .map(|(position, doc, fields)| ScoredDocument {
            doc,
            position,
            score: score_fields(fields, query),
        })
        .collect();

    let results = rank(scored, limit);
    debug!(query = query.text(), hits = results.len(), "search");
    results
}

/// An index paired with the configuration searches run under.
///
/// Cheap to clone; the index is shared.
#[derive(Debug, Clone)]
pub struct Searcher {
    index: Arc<DocumentIndex>,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(index: Arc<DocumentIndex>, config: SearchConfig) -> Self {
        Searcher { index, config }
    }

    pub fn with_defaults(index: DocumentIndex) -> Self {
        Self::new(Arc::new(index), SearchConfig::default())
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn search(&self, query: &str) -> Vec<ScoredDocument<'_>> {
        self.search_query(&Query::parse(query))
    }

    pub fn search_query(&self, query: &Query) -> Vec<ScoredDocument<'_>> {
        search_with_limit(&self.index, query, self.config.max_results)
    }
}
