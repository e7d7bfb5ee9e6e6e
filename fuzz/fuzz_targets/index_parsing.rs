// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index loading.
//!
//! Arbitrary bytes must either load into a valid index or fail with an
//! error. A loaded index must survive a write and reload unchanged.

#![no_main]

use hubsearch::DocumentIndex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(index) = DocumentIndex::from_reader(data) else {
        return;
    };

    for doc in &index {
        assert!(!doc.title.trim().is_empty());
        assert!(!doc.url.trim().is_empty());
        assert!(doc.block >= 1);
    }

    let json = index.to_json().expect("valid index serializes");
    let reloaded = DocumentIndex::from_json(&json).expect("written index reloads");
    assert_eq!(reloaded.documents(), index.documents());
});
