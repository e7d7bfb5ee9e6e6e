//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::index::DocumentIndex;
use crate::types::{Document, Subject};

/// Create a document with one keyword (the lower-cased title) and a stock excerpt.
pub fn make_doc(title: &str, subject: &str, url: &str) -> Document {
    Document {
        title: title.to_string(),
        subject: Subject::from(subject),
        block: 1,
        code: None,
        url: url.to_string(),
        keywords: vec![title.to_lowercase()],
        excerpt: format!("Notes on {}.", title),
    }
}

/// Create a fully specified document.
pub fn make_full_doc(
    title: &str,
    code: Option<&str>,
    url: &str,
    keywords: &[&str],
    excerpt: &str,
) -> Document {
    Document {
        title: title.to_string(),
        subject: Subject::Biology,
        block: 1,
        code: code.map(str::to_string),
        url: url.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        excerpt: excerpt.to_string(),
    }
}

/// Build an index, panicking on invalid test data.
pub fn make_index(docs: Vec<Document>) -> DocumentIndex {
    DocumentIndex::new(docs).expect("test documents should form a valid index")
}

/// Path of the study-hub index shipped in `data/search-index.json`.
///
/// Read at runtime so the corpus is never embedded in library builds.
pub const BUNDLED_INDEX_PATH: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/data/search-index.json");

/// Raw JSON of the shipped index.
pub fn bundled_index_json() -> String {
    std::fs::read_to_string(BUNDLED_INDEX_PATH).expect("bundled index should be readable")
}

/// The study-hub index shipped in `data/search-index.json`.
pub fn bundled_index() -> DocumentIndex {
    DocumentIndex::from_path(BUNDLED_INDEX_PATH).expect("bundled index should load")
}
