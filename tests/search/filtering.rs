//! Subject include/exclude filtering over ranked results.

use crate::common::*;
use cutoff::{SubjectFilter, SubjectState};

fn universities(filter: &SubjectFilter, year: Option<u32>) -> Vec<String> {
    let corpus = sample_corpus();
    let results = sample_matcher().search("資工");
    filter
        .apply(results, &corpus, year)
        .into_iter()
        .map(|r| r.record.university)
        .collect()
}

#[test]
fn empty_filter_keeps_everything() {
    assert_eq!(universities(&SubjectFilter::new(), None).len(), 5);
}

#[test]
fn include_uses_latest_year_by_default() {
    let filter = SubjectFilter::new().with_include(["物理"]);
    assert_eq!(universities(&filter, None), vec![NTU, NCKU]);
}

#[test]
fn departments_without_data_fail_any_filter() {
    // NTU and NCKU weight 物理; the rest have no yearly data at all
    let filter = SubjectFilter::new().with_exclude(["物理"]);
    assert!(universities(&filter, None).is_empty());
}

#[test]
fn explicit_year_changes_the_verdict() {
    // 113 dropped 物理 for NTU
    let filter = SubjectFilter::new().with_include(["數A"]).with_exclude(["物理"]);
    assert!(universities(&filter, None).is_empty());
    assert_eq!(universities(&filter, Some(113)), vec![NTU]);
}

#[test]
fn filtering_preserves_rank_order() {
    let corpus = sample_corpus();
    let results = sample_matcher().search("臺灣");
    let kept = SubjectFilter::new().with_include(["英文"]).apply(results, &corpus, None);

    // only NTU 資工 (114 weights 英文) and NTU 法律 qualify
    let departments: Vec<&str> = kept.iter().map(|r| r.record.department.as_str()).collect();
    assert_eq!(departments, vec!["資訊工程學系", "法律學系"]);
    assert_ranked(&kept);
}

#[test]
fn cycling_a_subject_walks_through_states() {
    let mut filter = SubjectFilter::new();
    assert_eq!(filter.cycle("化學"), SubjectState::Include);
    assert_eq!(filter.cycle("化學"), SubjectState::Exclude);
    assert_eq!(filter.cycle("化學"), SubjectState::Neutral);
    assert!(filter.is_empty());
}
