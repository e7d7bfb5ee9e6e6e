//! Index files as they appear on disk.

use crate::common::{bundled_index, make_doc};
use hubsearch::testing::{bundled_index_json, BUNDLED_INDEX_PATH};
use hubsearch::{search, DocumentIndex, IndexError, Subject, Violation};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_bundled_index_is_read_from_the_data_directory() {
    assert!(BUNDLED_INDEX_PATH.ends_with("data/search-index.json"));
    let from_json = DocumentIndex::from_json(&bundled_index_json()).unwrap();
    assert_eq!(from_json.len(), bundled_index().len());
    assert_eq!(from_json.len(), 48);
}

#[test]
fn test_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    fs::write(&path, bundled_index_json()).unwrap();

    let index = DocumentIndex::from_path(&path).unwrap();
    assert_eq!(index.len(), 48);
    assert_eq!(index.get(0).unwrap().title, "Cells");
    assert_eq!(index.get(47).unwrap().subject, Subject::SeparateBiology);
}

#[test]
fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");
    match DocumentIndex::from_path(&path) {
        Err(IndexError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_bare_array_and_versioned_forms_agree() {
    let versioned = bundled_index();
    let docs = serde_json::to_string(versioned.documents()).unwrap();
    let bare = DocumentIndex::from_json(&docs).unwrap();
    assert_eq!(bare.documents(), versioned.documents());
}

#[test]
fn test_written_index_reloads_identically() {
    let index = bundled_index();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    fs::write(&path, index.to_json().unwrap()).unwrap();

    let reloaded = DocumentIndex::from_path(&path).unwrap();
    assert_eq!(reloaded.documents(), index.documents());
    assert_eq!(search(&reloaded, "osmosis").len(), 2);
}

#[test]
fn test_missing_required_field_is_a_parse_error() {
    let raw = r#"[{"title": "Cells", "subject": "biology", "block": 1, "url": "a.html", "keywords": []}]"#;
    assert!(matches!(DocumentIndex::from_json(raw), Err(IndexError::Parse(_))));
}

#[test]
fn test_unknown_subject_is_kept() {
    let raw = r#"[{"title": "Rocks", "subject": "geology", "block": 1, "url": "g.html",
                  "keywords": ["rock"], "excerpt": "Igneous."}]"#;
    let index = DocumentIndex::from_json(raw).unwrap();
    let doc = index.get(0).unwrap();
    assert_eq!(doc.subject, Subject::Other("geology".to_string()));
    assert_eq!(doc.subject.label(), "geology");
    assert_eq!(doc.code, None);
}

#[test]
fn test_every_violation_is_reported() {
    let mut untitled = make_doc("", "biology", "b.html");
    untitled.block = 0;
    let docs = vec![
        make_doc("Cells", "biology", "a.html"),
        untitled,
        make_doc("Cells again", "biology", "a.html"),
        make_doc("No url", "physics", " "),
    ];

    match DocumentIndex::new(docs) {
        Err(IndexError::Invalid(violations)) => assert_eq!(
            violations,
            vec![
                Violation::EmptyTitle { position: 1 },
                Violation::ZeroBlock {
                    position: 1,
                    url: "b.html".to_string()
                },
                Violation::DuplicateUrl {
                    url: "a.html".to_string(),
                    first: 0,
                    second: 2
                },
                Violation::EmptyUrl {
                    position: 3,
                    title: "No url".to_string()
                },
            ]
        ),
        other => panic!("expected violations, got {:?}", other.map(|i| i.len())),
    }
}

#[test]
fn test_empty_index_is_valid() {
    let index = DocumentIndex::from_json("[]").unwrap();
    assert!(index.is_empty());
    assert!(search(&index, "cell").is_empty());
}
