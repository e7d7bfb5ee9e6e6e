// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for result highlighting.
//!
//! Whatever the text and query, removing the highlight marks must give back
//! exactly the escaped text. Anything else means a lost character or an
//! injected tag.

#![no_main]

use arbitrary::Arbitrary;
use hubsearch::controller::render::{MARK_CLOSE, MARK_OPEN};
use hubsearch::{escape_html, highlight};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    query: String,
    min_term_len: u8,
}

fuzz_target!(|input: Input| {
    let text: String = input.text.chars().take(500).collect();
    let query: String = input.query.chars().take(100).collect();

    let html = highlight(&text, &query, input.min_term_len as usize);

    let stripped = html.replace(MARK_OPEN, "").replace(MARK_CLOSE, "");
    assert_eq!(stripped, escape_html(&text));
    assert_eq!(html.matches(MARK_OPEN).count(), html.matches(MARK_CLOSE).count());
});
