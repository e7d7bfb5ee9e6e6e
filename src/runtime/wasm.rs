// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for hubsearch.
//!
//! This is the browser-facing API. `HubSearcher` is the engine on its own;
//! `HubSearchSession` is the whole search box as a state machine. The page's
//! glue script forwards DOM events to the session, arms a `setTimeout` for
//! `nextDeadline()`, calls `poll()` when it fires, reports clicks outside the
//! widget with `onOutsideClick()`, and copies `panelHtml()` /
//! `isOpen()` / `focusedIndex()` back onto the DOM.
//!
//! ```js
//! const searcher = new HubSearcher(indexJson);
//! const session = searcher.createSession(location.pathname);
//! input.addEventListener('input', e => {
//!     const due = session.onInput(e.target.value);
//!     setTimeout(() => { if (session.poll()) redraw(); }, due - Date.now());
//! });
//! ```

use crate::config::SearchConfig;
use crate::controller::debounce::Clock;
use crate::controller::path::path_prefix;
use crate::controller::render::{empty_html, render_results_with, results_html, SEARCH_UI_HTML};
use crate::controller::{Focus, Key, SearchController};
use crate::index::DocumentIndex;
use crate::search::utils::Query;
use crate::search::Searcher;
use crate::types::ScoredDocument;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

/// Milliseconds since the epoch, from `Date.now()`.
///
/// `std::time::Instant` is unavailable on `wasm32-unknown-unknown`.
struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Search result for JavaScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSearchResult {
    title: String,
    subject: String,
    block: u32,
    code: Option<String>,
    url: String,
    excerpt: String,
    score: u32,
}

impl From<&ScoredDocument<'_>> for JsSearchResult {
    fn from(r: &ScoredDocument<'_>) -> Self {
        Self {
            title: r.doc.title.clone(),
            subject: r.doc.subject.as_str().to_string(),
            block: r.doc.block,
            code: r.doc.code.clone(),
            url: r.doc.url.clone(),
            excerpt: r.doc.excerpt.clone(),
            score: r.score,
        }
    }
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// WASM searcher - thin wrapper around `Searcher`.
#[wasm_bindgen]
pub struct HubSearcher {
    searcher: Searcher,
}

#[wasm_bindgen]
impl HubSearcher {
    /// Create a searcher from index JSON and optional config JSON.
    #[wasm_bindgen(constructor)]
    pub fn new(index_json: &str, config_json: Option<String>) -> Result<HubSearcher, JsValue> {
        let index = DocumentIndex::from_json(index_json).map_err(js_error)?;
        let config = match config_json {
            Some(raw) => SearchConfig::from_json(&raw).map_err(js_error)?,
            None => SearchConfig::default(),
        };
        Ok(HubSearcher {
            searcher: Searcher::new(Arc::new(index), config),
        })
    }

    /// Number of documents.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.searcher.index().len()
    }

    /// Ranked results as plain objects.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results: Vec<JsSearchResult> = self
            .searcher
            .search(query)
            .iter()
            .map(JsSearchResult::from)
            .collect();
        to_value(&results).map_err(js_error)
    }

    /// Results panel HTML for `query`, with links relative to `pathname`.
    #[wasm_bindgen(js_name = "renderResults")]
    pub fn render_results(&self, query: &str, pathname: &str) -> String {
        let query = Query::parse(query);
        let results = self.searcher.search_query(&query);
        if results.is_empty() {
            return empty_html(query.text());
        }
        let views = render_results_with(
            &results,
            query.text(),
            path_prefix(pathname),
            self.searcher.config().highlight_min_term_len,
        );
        results_html(&views)
    }

    /// A search box session bound to the page at `pathname`.
    #[wasm_bindgen(js_name = "createSession")]
    pub fn create_session(&self, pathname: &str) -> HubSearchSession {
        HubSearchSession {
            controller: SearchController::new(self.searcher.clone(), pathname, JsClock),
        }
    }
}

/// One search box on one page.
#[wasm_bindgen]
pub struct HubSearchSession {
    controller: SearchController<JsClock>,
}

#[wasm_bindgen]
impl HubSearchSession {
    /// Returns the time (ms since epoch) at which `poll` should be called.
    #[wasm_bindgen(js_name = "onInput")]
    pub fn on_input(&mut self, value: &str) -> f64 {
        self.controller.on_input(value).deadline_ms() as f64
    }

    /// Run the pending search if due. Returns true if the panel changed.
    #[wasm_bindgen]
    pub fn poll(&mut self) -> bool {
        self.controller.poll().is_some()
    }

    #[wasm_bindgen(js_name = "nextDeadline")]
    pub fn next_deadline(&self) -> Option<f64> {
        self.controller.next_deadline_ms().map(|ms| ms as f64)
    }

    /// Returns true if the caller should `preventDefault()`.
    #[wasm_bindgen(js_name = "onKey")]
    pub fn on_key(&mut self, key: &str) -> bool {
        self.controller.on_key(Key::from_dom(key))
    }

    #[wasm_bindgen(js_name = "onFocus")]
    pub fn on_focus(&mut self) {
        self.controller.on_focus();
    }

    /// A click landed outside `.search-container`.
    #[wasm_bindgen(js_name = "onOutsideClick")]
    pub fn on_outside_click(&mut self) {
        self.controller.on_pointer_down(false);
    }

    #[wasm_bindgen(js_name = "panelHtml")]
    pub fn panel_html(&self) -> String {
        self.controller.panel_html()
    }

    #[wasm_bindgen(js_name = "isOpen")]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// -1 when the input has focus, otherwise the focused result's index.
    #[wasm_bindgen(js_name = "focusedIndex")]
    pub fn focused_index(&self) -> i32 {
        match self.controller.focus() {
            Focus::Input => -1,
            Focus::Result(i) => i as i32,
        }
    }
}

/// Link prefix for result URLs on the page at `pathname`.
#[wasm_bindgen(js_name = "pathPrefix")]
pub fn path_prefix_js(pathname: &str) -> String {
    path_prefix(pathname).to_string()
}

/// The search widget fragment to insert into `.nav-links`.
#[wasm_bindgen(js_name = "searchUiHtml")]
pub fn search_ui_html() -> String {
    SEARCH_UI_HTML.to_string()
}
