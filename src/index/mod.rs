// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document index: every topic page the search box can find.
//!
//! Built once, read forever. Loading validates the whole set up front and
//! refuses a partially valid index, because silently skipping a bad entry
//! means a page that quietly never shows up in results.
//!
//! Alongside the documents we keep lower-cased copies of the searchable
//! fields. Order is load order; the search engine uses it only to break ties.

pub mod coverage;
pub mod validate;

use crate::error::IndexError;
use crate::types::{Document, FoldedFields};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Current index file version.
pub const INDEX_VERSION: u32 = 1;

/// On-disk layout: either a bare array or a versioned wrapper.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexPayload {
    Versioned {
        version: u32,
        documents: Vec<Document>,
    },
    Bare(Vec<Document>),
}

/// Versioned wrapper written by `DocumentIndex::to_json`.
#[derive(Serialize)]
struct IndexFile<'a> {
    version: u32,
    documents: &'a [Document],
}

#[derive(Debug, Clone)]
pub struct DocumentIndex {
    docs: Vec<Document>,
    folded: Vec<FoldedFields>,
}

impl DocumentIndex {
    /// Validate and build an index from documents in index order.
    pub fn new(docs: Vec<Document>) -> Result<Self, IndexError> {
        let violations = validate::check(&docs);
        if !violations.is_empty() {
            warn!(count = violations.len(), "rejecting index");
            return Err(IndexError::Invalid(violations));
        }
        let folded = docs.iter().map(FoldedFields::from).collect();
        Ok(DocumentIndex { docs, folded })
    }

    pub fn from_json(raw: &str) -> Result<Self, IndexError> {
        let payload: IndexPayload = serde_json::from_str(raw)?;
        Self::from_payload(payload)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, IndexError> {
        let payload: IndexPayload = serde_json::from_reader(reader)?;
        Self::from_payload(payload)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&raw)?;
        info!(path = %path.display(), docs = index.len(), "loaded index");
        Ok(index)
    }

    fn from_payload(payload: IndexPayload) -> Result<Self, IndexError> {
        let docs = match payload {
            IndexPayload::Versioned { version, documents } => {
                if version != INDEX_VERSION {
                    warn!(version, expected = INDEX_VERSION, "unexpected index version");
                }
                documents
            }
            IndexPayload::Bare(documents) => documents,
        };
        Self::new(docs)
    }

    /// Serialize in the versioned layout.
    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(&IndexFile {
            version: INDEX_VERSION,
            documents: &self.docs,
        })?)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Document> {
        self.docs.get(position)
    }

    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.docs.iter()
    }

    /// Documents paired with their folded fields, in index order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &Document, &FoldedFields)> {
        self.docs
            .iter()
            .zip(&self.folded)
            .enumerate()
            .map(|(position, (doc, folded))| (position, doc, folded))
    }

    pub fn find_by_url(&self, url: &str) -> Option<&Document> {
        self.docs.iter().find(|doc| doc.url == url)
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
