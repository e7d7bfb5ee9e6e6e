//! Topic search for static study-hub sites.
//!
//! A few dozen topic pages, a search box in the nav bar, results as you type.
//! This crate is everything behind that box: a validated document index, a
//! weighted substring scorer, a ranking engine, and a browser-independent
//! controller that handles debouncing, rendering and keyboard focus.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│   index/     │────▶│  search/    │────▶│ controller/  │
//! │ (Document,  │     │ (load,       │     │ (Query,     │     │ (debounce,   │
//! │  Subject)   │     │  validate,   │     │  Searcher)  │     │  render,     │
//! └─────────────┘     │  coverage)   │     └─────────────┘     │  focus)      │
//!                     └──────────────┘            │            └──────────────┘
//!                                                 ▼
//!                                          ┌─────────────┐
//!                                          │  scoring/   │
//!                                          │ (weights,   │
//!                                          │  ranking)   │
//!                                          └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use hubsearch::{search, DocumentIndex};
//!
//! let index = DocumentIndex::from_json(r#"[
//!     {"title": "Osmosis", "subject": "biology", "block": 2,
//!      "url": "subjects/biology/block-2/03-osmosis.html",
//!      "keywords": ["osmosis", "water"],
//!      "excerpt": "Osmosis is the movement of water..."}
//! ]"#).unwrap();
//!
//! let results = search(&index, "osmosis");
//! assert_eq!(results[0].score, 200);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod index;
pub mod runtime;
pub mod scoring;
pub mod search;
pub mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::SearchConfig;
pub use controller::debounce::{Clock, Debouncer, ManualClock, SystemClock, TimerHandle};
pub use controller::path::path_prefix;
pub use controller::render::{empty_html, escape_html, highlight, ResultView};
pub use controller::{Focus, Key, Panel, Phase, SearchController, SearchOutcome};
pub use error::{ConfigError, Error, IndexError, Result, Violation};
pub use index::coverage::{check_coverage, CoverageReport};
pub use index::DocumentIndex;
pub use scoring::{score_document, score_fields};
pub use search::utils::Query;
pub use search::{search, search_with_limit, Searcher};
pub use types::{Document, FoldedFields, ScoredDocument, Subject};
