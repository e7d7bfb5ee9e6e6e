//! Repeated and shared searches give identical answers.

use crate::common::{bundled_index, ranked};
use hubsearch::{search, SearchConfig, Searcher};
use std::sync::Arc;
use std::thread;

const QUERIES: &[&str] = &["osmosis", "cell", "b2", "energy", "ph", "force", "cell membrane"];

#[test]
fn test_search_is_repeatable() {
    let index = bundled_index();
    for query in QUERIES {
        let first = ranked(&search(&index, query));
        for _ in 0..10 {
            assert_eq!(ranked(&search(&index, query)), first, "query {:?}", query);
        }
    }
}

#[test]
fn test_searcher_matches_free_function() {
    let index = bundled_index();
    let searcher = Searcher::with_defaults(index.clone());
    for query in QUERIES {
        assert_eq!(ranked(&searcher.search(query)), ranked(&search(&index, query)));
    }
}

#[test]
fn test_shared_index_across_threads() {
    let index = Arc::new(bundled_index());
    let expected: Vec<_> = QUERIES.iter().map(|q| ranked(&search(&index, q))).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let searcher = Searcher::new(Arc::clone(&index), SearchConfig::default());
            thread::spawn(move || {
                QUERIES
                    .iter()
                    .map(|q| ranked(&searcher.search(q)))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
