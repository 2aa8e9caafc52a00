//! Repeated and concurrent searches agree.

use crate::common::*;
use cutoff::{AliasTables, CorpusIndex, Matcher, SharedIndex};
use std::sync::Arc;
use std::thread;

const QUERIES: &[&str] = &["台大 資工", "資工", "工程", "臺灣", "台灣", "四中 資工", "法律 醫學"];

#[test]
fn same_query_same_results() {
    let matcher = sample_matcher();
    for query in QUERIES {
        let first = matcher.search(query);
        let second = matcher.search(query);
        assert_eq!(first, second, "query {:?} changed between runs", query);
    }
}

#[test]
fn rebuilt_index_gives_same_results() {
    let a = sample_matcher();
    let b = sample_matcher();
    for query in QUERIES {
        assert_eq!(a.search(query), b.search(query), "query {:?}", query);
    }
}

#[test]
fn concurrent_readers_see_one_index() {
    let shared = Arc::new(SharedIndex::new(CorpusIndex::build(&sample_corpus())));
    let expected = Matcher::from_shared(&shared, AliasTables::builtin()).search("資工");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                let matcher = Matcher::from_shared(&shared, AliasTables::builtin());
                (0..20).map(|_| matcher.search("資工")).collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for results in handle.join().unwrap() {
            assert_eq!(results, expected);
        }
    }
}

#[test]
fn readers_never_see_a_partial_rebuild() {
    let small = make_corpus(&[(NTU, "資訊工程學系")]);
    let shared = Arc::new(SharedIndex::new(CorpusIndex::build(&small)));

    let reader = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for _ in 0..200 {
                let len = shared.snapshot().len();
                assert!(len == 1 || len == 14, "saw index with {} records", len);
            }
        })
    };

    for _ in 0..20 {
        shared.rebuild(&sample_corpus());
        shared.rebuild(&small);
    }
    reader.join().unwrap();
}
