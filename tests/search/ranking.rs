//! Ranking order: score first, index position second.

use crate::common::*;
use cutoff::{search, AliasTables, CorpusIndex, Matcher, ScoreMode, SharedIndex};

#[test]
fn equal_scores_keep_corpus_order() {
    let results = sample_matcher().search("工程");

    assert_eq!(
        ranked(&results),
        vec![
            (NTU, "資訊工程學系", 10),
            (NCKU, "資訊工程學系", 10),
            (NCKU, "工程科學系", 10),
            (NTHU, "資訊工程學系", 10),
            (NTHU, "工程與系統科學系", 10),
            (NCU, "資訊工程學系", 10),
            (NTNU, "資訊工程學系", 10),
        ]
    );
    assert_ranked(&results);
}

#[test]
fn strict_results_outrank_loose_ones() {
    // 台大 anchors NTU; the remaining descriptive keyword hits NTU and NCKU
    // 資工, but only the anchored one goes strict
    let index = make_index(&[(NCKU, "資訊工程學系"), (NTU, "資訊工程學系")]);
    let results = search(&index, &AliasTables::builtin(), "台大 資工");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].record.university, NTU);
    assert_eq!(results[0].position, 1);
}

#[test]
fn higher_score_moves_ahead_of_earlier_records() {
    let results = sample_matcher().search("臺灣");

    // 臺灣語文學系 sits last in the corpus but wins on coverage
    assert_eq!(results[0].position, 13);
    assert_ranked(&results);
    assert!(results.iter().all(|r| r.mode == ScoreMode::Strict));
}

#[test]
fn duplicate_records_are_ranked_independently() {
    let index = make_index(&[(NTU, "法律學系"), (NTU, "法律學系")]);
    let results = search(&index, &AliasTables::builtin(), "法律");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].position, 0);
    assert_eq!(results[1].position, 1);
}

#[test]
fn matcher_from_shared_index_keeps_its_snapshot() {
    let shared = SharedIndex::new(CorpusIndex::build(&make_corpus(&[(NTU, "法律學系")])));
    let matcher = Matcher::from_shared(&shared, AliasTables::builtin());

    shared.rebuild(&sample_corpus());

    assert_eq!(matcher.search("法律").len(), 1);
    let fresh = Matcher::from_shared(&shared, AliasTables::builtin());
    assert_eq!(fresh.search("法律").len(), 3);
}
