//! Property-based tests using proptest.
//!
//! These tests check ranking invariants over randomly generated corpora and
//! queries.

mod common;

use common::make_index;
use cutoff::{normalize_query, search, AliasTables, ScoreMode};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// University-ish names. The character pool is disjoint from departments so
/// a department substring can never name a university by accident.
fn university_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[甲乙丙丁戊]{2,4}大學").unwrap()
}

fn department_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[子丑寅卯辰巳]{1,5}學系").unwrap()
}

fn records_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((university_strategy(), department_strategy()), 1..12)
}

/// Queries drawn from both pools, plus 台/臺 and some noise.
fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::string::string_regex("[甲乙丙子丑寅台臺學系大]{1,3}").unwrap(),
        0..4,
    )
    .prop_map(|words| words.join(" "))
}

fn index_of(records: &[(String, String)]) -> cutoff::CorpusIndex {
    let pairs: Vec<(&str, &str)> = records
        .iter()
        .map(|(u, d)| (u.as_str(), d.as_str()))
        .collect();
    make_index(&pairs)
}

// ============================================================================
// RANKING PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: results are sorted by score, ties by index position, and no
    /// zero score ever comes back.
    #[test]
    fn prop_results_sorted_and_positive(records in records_strategy(), query in query_strategy()) {
        let index = index_of(&records);
        let results = search(&index, &AliasTables::builtin(), &query);

        for result in &results {
            prop_assert!(result.score > 0, "zero score returned: {:?}", result);
            prop_assert!(result.position < index.len());
            prop_assert_eq!(&index.records()[result.position], &result.record);
        }
        for pair in results.windows(2) {
            prop_assert!(
                pair[0].score > pair[1].score
                    || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
                "out of order: {:?} then {:?}", pair[0], pair[1]
            );
        }
    }

    /// Property: the same query on the same index gives the same answer.
    #[test]
    fn prop_search_deterministic(records in records_strategy(), query in query_strategy()) {
        let index = index_of(&records);
        let aliases = AliasTables::builtin();
        prop_assert_eq!(search(&index, &aliases, &query), search(&index, &aliases, &query));
    }

    /// Property: a keyword taken from a department name always finds that
    /// record, through the loose path when nothing names the university.
    #[test]
    fn prop_department_substring_always_matches(
        university in university_strategy(),
        stem in "[子丑寅卯辰巳]{1,5}",
        start in 0usize..8,
        len in 1usize..4,
    ) {
        // slice the stem only; 學 also appears in every university name
        let department = format!("{}學系", stem);
        let chars: Vec<char> = stem.chars().collect();
        let start = start % chars.len();
        let end = (start + len).min(chars.len());
        let keyword: String = chars[start..end].iter().collect();

        let index = make_index(&[(university.as_str(), department.as_str())]);
        let results = search(&index, &AliasTables::empty(), &keyword);

        prop_assert_eq!(results.len(), 1, "keyword {:?} missed {:?}", keyword, department);
        prop_assert_eq!(results[0].mode, ScoreMode::Loose);
    }

    /// Property: naming a university exactly puts every one of its records in
    /// strict mode.
    #[test]
    fn prop_exact_university_anchors_strictly(records in records_strategy()) {
        let index = index_of(&records);
        let target = records[0].0.clone();
        let results = search(&index, &AliasTables::empty(), &target);

        let expected = records.iter().filter(|(u, _)| *u == target).count();
        prop_assert_eq!(results.len(), expected);
        prop_assert!(results.iter().all(|r| r.mode == ScoreMode::Strict && r.record.university == target));
    }

    /// Property: when a record misses the strict gate, adding a keyword that
    /// names part of its university never lowers its score.
    #[test]
    fn prop_school_partial_never_lowers_score(
        stem in "[甲乙丙丁戊]{2,4}",
        department in department_strategy(),
        query in query_strategy(),
        start in 0usize..4,
        len in 1usize..3,
    ) {
        let university = format!("{}大學", stem);
        let chars: Vec<char> = stem.chars().collect();
        let start = start % chars.len();
        let end = (start + len).min(chars.len());
        let partial: String = chars[start..end].iter().collect();

        let index = make_index(&[(university.as_str(), department.as_str())]);
        let aliases = AliasTables::empty();
        let before = search(&index, &aliases, &query);
        prop_assume!(before.first().map_or(true, |r| r.mode == ScoreMode::Loose));

        let before = before.first().map_or(0, |r| r.score);
        let after = search(&index, &aliases, &format!("{} {}", query, partial))
            .first()
            .map_or(0, |r| r.score);
        prop_assert!(after >= before, "{:?}: {} -> {:?}: {}", query, before, partial, after);
        prop_assert!(after > 0);
    }

    /// Property: whitespace-only queries never return anything.
    #[test]
    fn prop_blank_query_is_empty(records in records_strategy(), blank in "[ \t\n]{0,5}") {
        let index = index_of(&records);
        prop_assert!(search(&index, &AliasTables::builtin(), &blank).is_empty());
    }
}

// ============================================================================
// NORMALIZATION PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a word with 台 expands to its 臺 form followed by the original;
    /// anything else passes through lowercased.
    #[test]
    fn prop_tai_expansion(words in prop::collection::vec("[a-zA-Z台臺大學]{1,4}", 0..5)) {
        let tokens = normalize_query(&words.join(" "));

        let mut expected = Vec::new();
        for word in &words {
            let lower = word.to_lowercase();
            if lower.contains('台') {
                expected.push(lower.replace('台', "臺"));
            }
            expected.push(lower);
        }
        prop_assert_eq!(tokens, expected);
    }

    /// Property: normalizing never produces blank tokens.
    #[test]
    fn prop_tokens_never_blank(raw in "\\PC{0,20}") {
        for token in normalize_query(&raw) {
            prop_assert!(!token.trim().is_empty());
        }
    }
}
