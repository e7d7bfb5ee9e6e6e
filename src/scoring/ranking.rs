// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score** - descending, higher wins
//! 2. **Index position** - ascending, earlier document wins
//!
//! The position tie-break makes the order total, so the sort result doesn't
//! depend on sort stability. We still use a stable sort.

use crate::types::ScoredDocument;
use std::cmp::Ordering;

/// Compare two scored documents for ranking.
pub fn compare_results(a: &ScoredDocument<'_>, b: &ScoredDocument<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Drop non-matches, sort, and keep the best `limit`.
pub fn rank<'a>(mut results: Vec<ScoredDocument<'a>>, limit: usize) -> Vec<ScoredDocument<'a>> {
    // INVARIANT: zero-score documents never reach the caller
    results.retain(|r| r.score > 0);
    results.sort_by(compare_results);
    results.truncate(limit);
    results
}
