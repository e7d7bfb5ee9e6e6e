// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning results into HTML.
//!
//! Everything here is a pure string transform so it can be tested without a
//! browser. The class names are the contract with the site's stylesheet.
//!
//! Highlighting works on the raw text and escapes each piece as it goes. That
//! way a term can never match inside an entity like `&amp;` and no original
//! character is lost: strip the `<mark>` tags and you get `escape_html(text)`
//! back exactly.

use crate::config::DEFAULT_HIGHLIGHT_MIN_TERM_LEN;
use crate::search::utils::{normalize_query, parse_terms};
use crate::types::ScoredDocument;
use regex::RegexBuilder;
use serde::Serialize;
use tracing::warn;

pub const MARK_OPEN: &str = r#"<mark class="search-highlight">"#;
pub const MARK_CLOSE: &str = "</mark>";

/// The fragment injected into the page's `.nav-links` list.
pub const SEARCH_UI_HTML: &str = r#"<li class="search-container"><div class="search-bar"><input type="text" class="search-bar__input" placeholder="Search topics..." aria-label="Search topics"><button class="search-bar__button" aria-label="Search"><span class="search-icon">&#128269;</span></button></div><div class="search-results" aria-live="polite"></div></li>"#;

/// Escape text for use in HTML content or a double-quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape `text` and wrap every occurrence of a query term in a highlight mark.
///
/// Terms shorter than `min_term_len` characters are ignored. Matching is
/// case-insensitive and literal: regex metacharacters in terms are escaped,
/// so `a.b` matches only `a.b`. Longer terms win when two overlap.
pub fn highlight(text: &str, query: &str, min_term_len: usize) -> String {
    let mut terms: Vec<String> = parse_terms(&normalize_query(query))
        .into_iter()
        .filter(|t| t.chars().count() >= min_term_len)
        .collect();
    if terms.is_empty() {
        return escape_html(text);
    }
    terms.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    terms.dedup();

    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(matcher) => matcher,
        Err(err) => {
            warn!(%err, "highlight pattern rejected; rendering plain text");
            return escape_html(text);
        }
    };

    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    // INVARIANT: every byte of `text` is escaped exactly once
    for found in matcher.find_iter(text) {
        out.push_str(&escape_html(&text[last..found.start()]));
        out.push_str(MARK_OPEN);
        out.push_str(&escape_html(found.as_str()));
        out.push_str(MARK_CLOSE);
        last = found.end();
    }
    out.push_str(&escape_html(&text[last..]));
    out
}

/// Everything needed to draw one result, already escaped where it goes into HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView {
    /// Prefix + index URL, not escaped.
    pub href: String,
    pub subject: String,
    pub badge: String,
    pub title_html: String,
    pub code: String,
    pub excerpt_html: String,
    pub score: u32,
}

impl ResultView {
    pub fn new(result: &ScoredDocument<'_>, query: &str, prefix: &str, min_term_len: usize) -> Self {
        let doc = result.doc;
        ResultView {
            href: format!("{}{}", prefix, doc.url),
            subject: doc.subject.as_str().to_string(),
            badge: doc.subject.label().to_string(),
            title_html: highlight(&doc.title, query, min_term_len),
            code: doc.code.clone().unwrap_or_default(),
            excerpt_html: highlight(&doc.excerpt, query, min_term_len),
            score: result.score,
        }
    }

    /// One `<a class="search-result">` element. `index` becomes `data-index`.
    pub fn to_html(&self, index: usize) -> String {
        format!(
            concat!(
                r#"<a href="{href}" class="search-result" data-index="{index}" tabindex="0">"#,
                r#"<span class="search-result__badge search-result__badge--{subject}">{badge}</span>"#,
                r#"<span class="search-result__title">{title}</span>"#,
                r#"<span class="search-result__code">{code}</span>"#,
                r#"<span class="search-result__excerpt">{excerpt}</span>"#,
                "</a>"
            ),
            href = escape_html(&self.href),
            index = index,
            subject = escape_html(&self.subject),
            badge = escape_html(&self.badge),
            title = self.title_html,
            code = escape_html(&self.code),
            excerpt = self.excerpt_html,
        )
    }
}

/// Build views for a result list with the default highlight threshold.
pub fn render_results(results: &[ScoredDocument<'_>], query: &str, prefix: &str) -> Vec<ResultView> {
    render_results_with(results, query, prefix, DEFAULT_HIGHLIGHT_MIN_TERM_LEN)
}

pub fn render_results_with(
    results: &[ScoredDocument<'_>],
    query: &str,
    prefix: &str,
    min_term_len: usize,
) -> Vec<ResultView> {
    results
        .iter()
        .map(|r| ResultView::new(r, query, prefix, min_term_len))
        .collect()
}

/// Concatenated result anchors.
pub fn results_html(views: &[ResultView]) -> String {
    let mut html = String::new();
    for (index, view) in views.iter().enumerate() {
        html.push_str(&view.to_html(index));
    }
    html
}

/// The "nothing matched" message.
pub fn empty_html(query: &str) -> String {
    format!(
        r#"<div class="search-results__empty">No results found for "{}"</div>"#,
        escape_html(query)
    )
}
