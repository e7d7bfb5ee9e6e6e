// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Does the index know about every content page?
//!
//! Walks `subjects/<subject>/<block>/*.html` under a site root and reports
//! pages with no index entry. `index.html` files are block landing pages,
//! not topics, so they are skipped. Only the known subjects are scanned.

use crate::index::DocumentIndex;
use crate::types::Subject;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Content pages found on disk, as site-relative URLs.
    pub pages: Vec<String>,
    /// Pages on disk with no index entry, sorted.
    pub missing: Vec<String>,
    /// Number of distinct URLs in the index.
    pub indexed: usize,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

pub fn check_coverage(index: &DocumentIndex, site_root: &Path) -> io::Result<CoverageReport> {
    let indexed: HashSet<&str> = index.iter().map(|doc| doc.url.as_str()).collect();
    let mut pages = Vec::new();

    for subject in Subject::KNOWN {
        let subject_dir = site_root.join("subjects").join(subject.as_str());
        if !subject_dir.is_dir() {
            debug!(dir = %subject_dir.display(), "no subject directory");
            continue;
        }

        for block in sorted_entries(&subject_dir)? {
            let block_dir = subject_dir.join(&block);
            if !block_dir.is_dir() {
                continue;
            }
            for page in sorted_entries(&block_dir)? {
                if page.ends_with(".html") && page != "index.html" {
                    pages.push(format!("subjects/{}/{}/{}", subject.as_str(), block, page));
                }
            }
        }
    }

    let missing = pages
        .iter()
        .filter(|url| !indexed.contains(url.as_str()))
        .cloned()
        .collect();

    Ok(CoverageReport {
        pages,
        missing,
        indexed: indexed.len(),
    })
}

fn sorted_entries(dir: &Path) -> io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
