//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cutoff::{AliasTables, CorpusIndex, MatchResult, Matcher};
use std::sync::Arc;

// Re-export canonical fixtures from cutoff::testing
pub use cutoff::testing::{make_corpus, make_index, sample_corpus};

pub const NTU: &str = "國立臺灣大學";
pub const NCKU: &str = "國立成功大學";
pub const NTHU: &str = "國立清華大學";
pub const NCU: &str = "國立中央大學";
pub const SCU: &str = "東吳大學";
pub const NTNU: &str = "國立臺灣師範大學";

/// Matcher over [`sample_corpus`] with the built-in alias tables.
pub fn sample_matcher() -> Matcher {
    let index = CorpusIndex::build(&sample_corpus());
    Matcher::new(Arc::new(index), AliasTables::builtin())
}

/// (university, department, score) triples, in ranked order.
pub fn ranked(results: &[MatchResult]) -> Vec<(&str, &str, u32)> {
    results
        .iter()
        .map(|r| (r.record.university.as_str(), r.record.department.as_str(), r.score))
        .collect()
}

/// Assert results are sorted by score descending, then by index position.
pub fn assert_ranked(results: &[MatchResult]) {
    for pair in results.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.score > b.score || (a.score == b.score && a.position < b.position),
            "out of order: {:?} before {:?}",
            a,
            b
        );
    }
}
