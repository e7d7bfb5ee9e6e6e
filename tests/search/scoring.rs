//! How the weights add up on hand-built documents.

use crate::common::make_full_doc;
use hubsearch::scoring::{
    CODE_QUERY_SCORE, EXCERPT_TERM_SCORE, KEYWORD_QUERY_SCORE, KEYWORD_TERM_SCORE,
    TITLE_QUERY_SCORE, TITLE_TERM_SCORE,
};
use hubsearch::{score_document, Document, Query};

fn osmosis() -> Document {
    make_full_doc(
        "Osmosis",
        Some("B2.3.1"),
        "subjects/biology/block-2/03-osmosis.html",
        &["osmosis", "water"],
        "Osmosis is the movement of water across a membrane.",
    )
}

fn score(doc: &Document, raw: &str) -> u32 {
    score_document(doc, &Query::parse(raw))
}

#[test]
fn test_single_word_hits_every_field() {
    let expected = TITLE_QUERY_SCORE
        + TITLE_TERM_SCORE
        + KEYWORD_QUERY_SCORE
        + KEYWORD_TERM_SCORE
        + EXCERPT_TERM_SCORE;
    assert_eq!(expected, 200);
    assert_eq!(score(&osmosis(), "osmosis"), expected);
}

#[test]
fn test_case_and_padding_are_ignored() {
    assert_eq!(score(&osmosis(), "  OsMoSiS "), score(&osmosis(), "osmosis"));
}

#[test]
fn test_code_matches_whole_query_only() {
    assert_eq!(score(&osmosis(), "b2.3"), CODE_QUERY_SCORE);
    // Terms never score against the code
    assert_eq!(score(&osmosis(), "b2.3 zzz"), 0);
}

#[test]
fn test_missing_code_scores_nothing() {
    let doc = make_full_doc("Density", None, "p/density.html", &["mass"], "Mass per volume.");
    assert_eq!(score(&doc, "p2"), 0);
}

#[test]
fn test_multi_term_scores_each_term() {
    // title: osmosis term; keywords: one term each; excerpt: both terms
    let expected = TITLE_TERM_SCORE + 2 * KEYWORD_TERM_SCORE + 2 * EXCERPT_TERM_SCORE;
    assert_eq!(score(&osmosis(), "water osmosis"), expected);
}

#[test]
fn test_repeated_terms_count_twice() {
    let doc = make_full_doc("Cells", None, "b/cells.html", &["cells"], "About cells.");
    let expected = 2 * TITLE_TERM_SCORE + 2 * KEYWORD_TERM_SCORE + 2 * EXCERPT_TERM_SCORE;
    assert_eq!(score(&doc, "cell cell"), expected);
}

#[test]
fn test_every_keyword_is_scored() {
    let doc = make_full_doc(
        "Respiration",
        None,
        "b/respiration.html",
        &["aerobic respiration", "anaerobic respiration", "respiration"],
        "",
    );
    let expected = TITLE_QUERY_SCORE + TITLE_TERM_SCORE + 3 * (KEYWORD_QUERY_SCORE + KEYWORD_TERM_SCORE);
    assert_eq!(score(&doc, "respiration"), expected);
}

#[test]
fn test_empty_query_scores_zero() {
    assert_eq!(score(&osmosis(), ""), 0);
    assert_eq!(score(&osmosis(), "   "), 0);
}
