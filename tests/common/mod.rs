//! Shared test utilities and fixtures.

#![allow(dead_code)]

use hubsearch::config::DEFAULT_DEBOUNCE_MS;
use hubsearch::{
    DocumentIndex, ManualClock, ScoredDocument, SearchConfig, SearchController, Searcher,
};
use std::sync::Arc;

// Re-export canonical test utilities from hubsearch::testing
pub use hubsearch::testing::{bundled_index, make_doc, make_full_doc, make_index};

/// Page the controller fixtures pretend to be on.
pub const HOME_PAGE: &str = "/index.html";

/// `(position, score)` pairs, the shape reference results are pinned in.
pub fn ranked(results: &[ScoredDocument<'_>]) -> Vec<(usize, u32)> {
    results.iter().map(|r| (r.position, r.score)).collect()
}

pub fn titles(results: &[ScoredDocument<'_>]) -> Vec<String> {
    results.iter().map(|r| r.doc.title.clone()).collect()
}

/// A small index with awkward characters in titles and excerpts.
pub fn tricky_index() -> DocumentIndex {
    make_index(vec![
        make_full_doc(
            "Acids & Bases",
            Some("C4.1.1"),
            "subjects/chemistry/block-4/01-acids-bases.html",
            &["acid", "base", "ph"],
            "Acids have a pH < 7 and bases > 7.",
        ),
        make_full_doc(
            "Ohm's Law",
            Some("P4.1.1"),
            "subjects/physics/block-4/01-ohms-law.html",
            &["resistance", "current"],
            "V = I x R, the \"classic\" triangle.",
        ),
        make_full_doc(
            "Decimal a.b notation",
            None,
            "subjects/other/block-1/01-a-b.html",
            &["notation"],
            "Write a.b, never axb.",
        ),
    ])
}

/// A controller over the bundled index on a manual clock.
pub fn controller() -> (SearchController<ManualClock>, ManualClock) {
    controller_on(HOME_PAGE, bundled_index(), SearchConfig::default())
}

pub fn controller_on(
    page: &str,
    index: DocumentIndex,
    config: SearchConfig,
) -> (SearchController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let searcher = Searcher::new(Arc::new(index), config);
    (SearchController::new(searcher, page, clock.clone()), clock)
}

/// Type `value`, wait out the default debounce, and fire.
pub fn type_and_settle(
    controller: &mut SearchController<ManualClock>,
    clock: &ManualClock,
    value: &str,
) {
    controller.on_input(value);
    clock.advance(DEFAULT_DEBOUNCE_MS);
    controller.poll();
}
