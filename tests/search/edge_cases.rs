//! Inputs the search box can produce that aren't ordinary words.

use crate::common::{bundled_index, ranked, tricky_index};
use hubsearch::{search, search_with_limit, Query};

#[test]
fn test_whitespace_only_query() {
    let index = bundled_index();
    assert!(search(&index, "").is_empty());
    assert!(search(&index, " \t\n ").is_empty());
}

#[test]
fn test_single_character_is_not_gated_by_the_engine() {
    // The minimum length is the controller's job
    let index = bundled_index();
    assert!(!search(&index, "a").is_empty());
}

#[test]
fn test_extra_whitespace_between_terms() {
    let index = bundled_index();
    assert_eq!(
        ranked(&search(&index, "cell    membrane")),
        ranked(&search(&index, "cell membrane"))
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let index = tricky_index();
    let results = search(&index, "a.b");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc.title, "Decimal a.b notation");

    assert!(search(&index, "(").is_empty());
    assert!(search(&index, ".*").is_empty());
}

#[test]
fn test_html_characters_match_raw_text() {
    let index = tricky_index();
    let results = search(&index, "acids & bases");
    assert_eq!(results[0].doc.title, "Acids & Bases");
}

#[test]
fn test_limit_is_respected() {
    let index = bundled_index();
    let query = Query::parse("e");
    assert_eq!(search_with_limit(&index, &query, 2).len(), 2);
    assert!(search_with_limit(&index, &query, 100).len() > 6);
    assert!(search_with_limit(&index, &query, 0).is_empty());
}
