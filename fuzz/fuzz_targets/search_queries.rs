// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the shipped index to verify search
//! never panics and every result list respects the ranking rules.

#![no_main]

use hubsearch::config::DEFAULT_MAX_RESULTS;
use hubsearch::testing::bundled_index;
use hubsearch::{score_document, search, DocumentIndex, Query};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    // Load index once per process
    static INDEX: std::sync::OnceLock<DocumentIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(bundled_index);

    let query = String::from_utf8_lossy(query);

    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: search() should never panic
    let results = search(index, &query);

    // INVARIANT 2: at most the display limit
    assert!(results.len() <= DEFAULT_MAX_RESULTS);

    let parsed = Query::parse(&query);
    for pair in results.windows(2) {
        // INVARIANT 3: score descending, index order on ties
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
            "results out of order for {:?}",
            query
        );
    }

    for result in &results {
        // INVARIANT 4: only positive scores, and they agree with the scorer
        assert!(result.score > 0);
        assert_eq!(result.score, score_document(result.doc, &parsed));
        assert_eq!(index.get(result.position), Some(result.doc));
    }

    // INVARIANT 5: deterministic
    let again = search(index, &query);
    assert_eq!(results, again);
});
