// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search box, minus the browser.
//!
//! `SearchController` is a state machine fed by discrete events (input, key,
//! focus, pointer) and a clock. It owns the debounce timer, the length gate,
//! the rendered panel and keyboard focus. A DOM adapter only has to forward
//! events, call `poll` when the debounce deadline passes, and copy
//! `panel_html` / `is_open` / `focus` back onto the page.
//!
//! # States
//!
//! ```text
//!            input              deadline, query < 2 chars
//!   Idle ──────────▶ Debouncing ──────────────────────────▶ Closed
//!                     ▲   │ deadline, query ≥ 2 chars
//!               input │   ▼
//!                     └─ Open { focus: Input | Result(i) }
//! ```
//!
//! Escape or a pointer press outside the widget goes to `Closed` from any
//! state and drops a pending search. New input from any state goes back to
//! `Debouncing`; the panel keeps showing whatever it showed until the search
//! fires.

pub mod debounce;
pub mod path;
pub mod render;

use crate::search::utils::Query;
use crate::search::Searcher;
use debounce::{Clock, Debouncer, TimerHandle};
use render::{empty_html, render_results_with, results_html, ResultView};
use tracing::{debug, trace};

/// Keys the controller reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Debouncing,
    Closed,
    Open,
}

/// Which element of the widget has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Result(usize),
}

/// What the results region currently contains.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Blank,
    Results(Vec<ResultView>),
    Empty { query: String },
}

/// What happened when a debounced search fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query too short; panel closed, engine not called.
    Gated,
    /// Engine returned this many results.
    Results(usize),
    /// Engine returned nothing; empty state shown.
    Empty,
}

pub struct SearchController<C: Clock> {
    searcher: Searcher,
    clock: C,
    prefix: &'static str,
    debouncer: Debouncer<String>,
    input: String,
    phase: Phase,
    focus: Focus,
    visible: bool,
    panel: Panel,
    searches_run: usize,
}

impl<C: Clock> SearchController<C> {
    /// `page_path` is the current page's pathname, used for link prefixes.
    pub fn new(searcher: Searcher, page_path: &str, clock: C) -> Self {
        let debouncer = Debouncer::new(searcher.config().debounce());
        SearchController {
            prefix: path::path_prefix(page_path),
            searcher,
            clock,
            debouncer,
            input: String::new(),
            phase: Phase::Idle,
            focus: Focus::Input,
            visible: false,
            panel: Panel::Blank,
            searches_run: 0,
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// The input's value changed. Restarts the debounce timer.
    pub fn on_input(&mut self, value: &str) -> TimerHandle {
        self.input.clear();
        self.input.push_str(value);
        self.phase = Phase::Debouncing;
        let handle = self.debouncer.schedule(value.to_string(), self.clock.now_ms());
        trace!(deadline = handle.deadline_ms(), "search scheduled");
        handle
    }

    /// Run the pending search if its deadline has passed.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let raw = self.debouncer.fire_due(self.clock.now_ms())?;
        Some(self.run_search(&raw))
    }

    /// When the adapter should call `poll` next, if anything is pending.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.debouncer.deadline_ms()
    }

    /// The input gained focus. Reopens the last panel if the input still
    /// holds a long enough query.
    pub fn on_focus(&mut self) {
        self.focus = Focus::Input;
        let long_enough = self.input.chars().count() >= self.searcher.config().min_query_len;
        if long_enough && self.panel != Panel::Blank {
            self.visible = true;
            // A pending search still owns the phase until it fires
            if !self.debouncer.is_pending() {
                self.phase = Phase::Open;
            }
        }
    }

    /// A key was pressed on the input or a result. Returns whether the
    /// adapter should suppress the browser's default action.
    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => {
                self.close();
                false
            }
            Key::ArrowDown => {
                self.focus_next();
                true
            }
            Key::ArrowUp => {
                self.focus_prev();
                true
            }
            Key::Other => false,
        }
    }

    /// A pointer press landed somewhere on the page.
    pub fn on_pointer_down(&mut self, inside_widget: bool) {
        if !inside_widget {
            self.close();
        }
    }

    // =========================================================================
    // STATE
    // =========================================================================

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_open(&self) -> bool {
        self.visible
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Rendered result views, empty unless the panel shows results.
    pub fn results(&self) -> &[ResultView] {
        match &self.panel {
            Panel::Results(views) => views.as_slice(),
            _ => &[],
        }
    }

    /// HTML for the results region.
    pub fn panel_html(&self) -> String {
        match &self.panel {
            Panel::Blank => String::new(),
            Panel::Results(views) => results_html(views),
            Panel::Empty { query } => empty_html(query),
        }
    }

    /// How many times the engine has actually been called.
    pub fn searches_run(&self) -> usize {
        self.searches_run
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn run_search(&mut self, raw: &str) -> SearchOutcome {
        let query = Query::parse(raw);
        let config = *self.searcher.config();
        // INVARIANT: a focused result index is always inside the current list
        self.focus = Focus::Input;

        if query.char_len() < config.min_query_len {
            self.visible = false;
            self.phase = Phase::Closed;
            debug!(len = query.char_len(), "query below minimum length");
            return SearchOutcome::Gated;
        }

        self.searches_run += 1;
        let results = self.searcher.search_query(&query);
        let outcome = if results.is_empty() {
            self.panel = Panel::Empty {
                query: query.text().to_string(),
            };
            SearchOutcome::Empty
        } else {
            let views =
                render_results_with(&results, query.text(), self.prefix, config.highlight_min_term_len);
            let count = views.len();
            self.panel = Panel::Results(views);
            SearchOutcome::Results(count)
        };

        self.visible = true;
        self.phase = Phase::Open;
        outcome
    }

    fn close(&mut self) {
        if self.debouncer.cancel() {
            trace!("pending search dropped");
        }
        self.visible = false;
        self.phase = Phase::Closed;
        self.focus = Focus::Input;
    }

    /// Results reachable by keyboard: only while the panel is showing them.
    fn navigable(&self) -> usize {
        if self.visible {
            self.results().len()
        } else {
            0
        }
    }

    fn focus_next(&mut self) {
        let count = self.navigable();
        if count == 0 {
            return;
        }
        self.focus = match self.focus {
            Focus::Input => Focus::Result(0),
            Focus::Result(i) if i + 1 < count => Focus::Result(i + 1),
            Focus::Result(_) => Focus::Input,
        };
    }

    fn focus_prev(&mut self) {
        if self.navigable() == 0 {
            return;
        }
        self.focus = match self.focus {
            Focus::Input | Focus::Result(0) => Focus::Input,
            Focus::Result(i) => Focus::Result(i - 1),
        };
    }
}
