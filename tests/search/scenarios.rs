//! End-to-end queries against small corpora.

use crate::common::*;
use cutoff::{search, AliasTables, CorpusIndex, MatchKind, ScoreMode};

#[test]
fn anchor_only_query_scores_every_department_of_the_school() {
    let corpus = make_corpus(&[(NTU, "資訊工程學系")]);
    let index = CorpusIndex::build(&corpus);
    let results = search(&index, &AliasTables::builtin(), "台大");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 50);
    assert_eq!(results[0].mode, ScoreMode::Strict);
}

#[test]
fn unanchored_department_alias_is_loose() {
    let corpus = make_corpus(&[(NTU, "資訊工程學系"), (NCKU, "法律學系")]);
    let index = CorpusIndex::build(&corpus);
    let results = search(&index, &AliasTables::builtin(), "資工");

    assert_eq!(ranked(&results), vec![(NTU, "資訊工程學系", 10)]);
    assert_eq!(results[0].mode, ScoreMode::Loose);
}

#[test]
fn partial_keyword_hit_takes_the_loose_path() {
    let matcher = sample_matcher();

    // no anchors: every record with a hit earns the flat loose score
    let unanchored = matcher.search("法律 醫學");
    assert!(!unanchored.is_empty());
    assert!(unanchored.iter().all(|r| r.score == 10 && r.mode == ScoreMode::Loose));

    // anchors present: only anchored schools survive
    let anchored = matcher.search("台大 法律 醫學");
    assert_eq!(ranked(&anchored), vec![(NTU, "法律學系", 50)]);
}

#[test]
fn school_alias_and_department_alias_pick_one_record() {
    let results = sample_matcher().search("台大 資工");
    assert_eq!(ranked(&results), vec![(NTU, "資訊工程學系", 130)]);
}

#[test]
fn group_alias_anchors_several_schools() {
    // 四中 expands to four schools; only 中央 is in the sample
    let results = sample_matcher().search("四中 資工");
    assert_eq!(ranked(&results), vec![(NCU, "資訊工程學系", 130)]);
}

#[test]
fn exact_university_name_anchors_without_aliases() {
    let index = CorpusIndex::build(&sample_corpus());
    let results = search(&index, &AliasTables::empty(), "東吳大學 法律");

    // base + anchor; the anchor token itself is not in the department name
    assert_eq!(ranked(&results), vec![(SCU, "法律學系", 100)]);
}

#[test]
fn tai_variant_matches_the_canonical_spelling() {
    let results = sample_matcher().search("臺灣");

    // 臺灣語文學系 picks up the coverage bonus on top of the school partial
    assert_eq!(results[0].record.university, NTNU);
    assert_eq!(results[0].record.department, "臺灣語文學系");
    assert_eq!(results[0].score, 160);
    assert!(results[1..].iter().all(|r| r.score == 110));
    assert_eq!(results.len(), 5);
}

#[test]
fn explain_reports_keyword_classification() {
    let matcher = sample_matcher();
    let explanations = matcher.explain("成大 工科");

    let top = explanations
        .iter()
        .find(|e| e.record.department == "工程科學系")
        .unwrap();
    assert_eq!(top.record.university, NCKU);
    assert_eq!(top.detail.kinds, vec![Some(MatchKind::DeptAlias)]);
    assert_eq!(top.detail.mode, Some(ScoreMode::Strict));
}

#[test]
fn nothing_matches_an_unknown_word() {
    assert!(sample_matcher().search("獸醫").is_empty());
}

#[test]
fn blank_query_returns_nothing() {
    let matcher = sample_matcher();
    assert!(matcher.search("").is_empty());
    assert!(matcher.search("   \t ").is_empty());
}

#[test]
fn empty_corpus_returns_nothing() {
    let index = CorpusIndex::build(&serde_json::json!({}));
    assert!(search(&index, &AliasTables::builtin(), "台大 資工").is_empty());
}
