// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time checks for an index.
//!
//! Collects every violation instead of stopping at the first, so one run of
//! `hubsearch validate` shows everything wrong with a hand-edited index.

use crate::error::Violation;
use crate::types::Document;
use std::collections::HashMap;

/// Check every document invariant. Empty result means the index is sound.
pub fn check(docs: &[Document]) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut seen_urls: HashMap<&str, usize> = HashMap::with_capacity(docs.len());

    for (position, doc) in docs.iter().enumerate() {
        if doc.title.trim().is_empty() {
            violations.push(Violation::EmptyTitle { position });
        }

        if doc.url.trim().is_empty() {
            violations.push(Violation::EmptyUrl {
                position,
                title: doc.title.clone(),
            });
            continue;
        }

        if doc.block == 0 {
            violations.push(Violation::ZeroBlock {
                position,
                url: doc.url.clone(),
            });
        }

        // INVARIANT: url is unique across the index
        if let Some(&first) = seen_urls.get(doc.url.as_str()) {
            violations.push(Violation::DuplicateUrl {
                url: doc.url.clone(),
                first,
                second: position,
            });
        } else {
            seen_urls.insert(&doc.url, position);
        }
    }

    violations
}
