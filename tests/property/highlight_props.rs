//! Highlighting never loses or invents text.

use hubsearch::controller::render::{MARK_CLOSE, MARK_OPEN};
use hubsearch::{escape_html, highlight};
use proptest::prelude::*;

fn strip_marks(html: &str) -> String {
    html.replace(MARK_OPEN, "").replace(MARK_CLOSE, "")
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,&<>\"'()*+?|\\[\\]\\\\^$-]{0,60}").unwrap()
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .&<>()*+?|\\[\\]\\\\^$-]{0,12}").unwrap()
}

proptest! {
    #[test]
    fn prop_stripping_marks_gives_escaped_text(text in text_strategy(), query in query_strategy()) {
        let html = highlight(&text, &query, 2);
        prop_assert_eq!(strip_marks(&html), escape_html(&text));
    }

    #[test]
    fn prop_no_raw_markup_escapes(text in text_strategy(), query in query_strategy()) {
        let stripped = strip_marks(&highlight(&text, &query, 2));
        prop_assert!(!stripped.contains('<'));
        prop_assert!(!stripped.contains('>'));
    }

    #[test]
    fn prop_marks_are_balanced(text in text_strategy(), query in query_strategy()) {
        let html = highlight(&text, &query, 2);
        prop_assert_eq!(html.matches(MARK_OPEN).count(), html.matches(MARK_CLOSE).count());
    }

    #[test]
    fn prop_every_marked_span_is_a_term(text in text_strategy(), word in "[a-z]{2,5}") {
        let html = highlight(&text, &word, 2);
        for piece in html.split(MARK_OPEN).skip(1) {
            let marked = piece.split(MARK_CLOSE).next().unwrap_or("");
            prop_assert_eq!(marked.to_lowercase(), word.clone());
        }
    }

    #[test]
    fn prop_short_terms_are_never_marked(text in text_strategy(), c in "[a-z]") {
        prop_assert_eq!(highlight(&text, &c, 2), escape_html(&text));
    }
}

#[test]
fn test_dot_is_literal() {
    assert_eq!(highlight("axb", "a.b", 2), "axb");
    assert_eq!(
        highlight("a.b and axb", "a.b", 2),
        format!("{}a.b{} and axb", MARK_OPEN, MARK_CLOSE)
    );
}

#[test]
fn test_entities_are_not_matched() {
    // "amp" must not light up inside the &amp; the escaper produces
    assert_eq!(highlight("Acids & Bases", "amp", 2), "Acids &amp; Bases");
}

#[test]
fn test_longer_term_wins_overlap() {
    assert_eq!(
        highlight("Osmosis", "osmo osmosis", 2),
        format!("{}Osmosis{}", MARK_OPEN, MARK_CLOSE)
    );
}
