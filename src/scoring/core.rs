// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The arithmetic behind ranking.
//!
//! # Strict gate
//!
//! ```text
//! every descriptive keyword classified
//!   AND (university ∈ anchors OR some keyword is SchoolPartial)
//! ```
//!
//! With no descriptive keywords the first clause holds vacuously, so an
//! anchor-only query like `台大` scores its anchored records through the strict
//! path (50 from the anchor bonus alone).
//!
//! # Constants
//!
//! | Bonus                         | Points | Path   |
//! |-------------------------------|--------|--------|
//! | at least one descriptive word | 50     | strict |
//! | every token inside department | 50     | strict |
//! | university anchored           | 50     | strict |
//! | any `DeptAlias`               | 30     | strict |
//! | any `SchoolPartial`           | 60     | strict |
//! | some hit, no anchors at all   | 10     | loose  |
//! | some hit, university anchored | 50     | loose  |

use crate::alias::AliasTables;
use crate::query::ClassifiedQuery;
use crate::types::{MatchKind, Record, ScoreMode};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Strict path: the query had at least one descriptive keyword.
pub const STRICT_BASE_SCORE: u32 = 50;

/// Strict path: every query token is found in the department name alone.
pub const DEPARTMENT_COVERAGE_BONUS: u32 = 50;

/// Strict path: the record's university is an anchor.
pub const ANCHOR_BONUS: u32 = 50;

/// Strict path: some keyword matched through a department alias.
pub const DEPT_ALIAS_BONUS: u32 = 30;

/// Strict path: some keyword is a substring of the university name.
pub const SCHOOL_PARTIAL_BONUS: u32 = 60;

/// Loose path, query has no anchors.
pub const LOOSE_UNANCHORED_SCORE: u32 = 10;

/// Loose path, query has anchors and this record's university is one.
pub const LOOSE_ANCHORED_SCORE: u32 = 50;

/// Everything [`match_record`] learned about one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMatch {
    /// One entry per descriptive keyword, same order.
    pub kinds: Vec<Option<MatchKind>>,
    pub score: u32,
    /// `None` when the record scored zero.
    pub mode: Option<ScoreMode>,
}

impl RecordMatch {
    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Classify one keyword against lowercased record text.
///
/// Later checks overwrite earlier ones: a university substring beats a
/// combined substring, and a department alias hit beats both.
pub fn classify_keyword(
    keyword: &str,
    university: &str,
    department: &str,
    combined: &str,
    aliases: &AliasTables,
) -> Option<MatchKind> {
    let mut kind = None;
    if combined.contains(keyword) {
        kind = Some(MatchKind::Partial);
    }
    if university.contains(keyword) {
        kind = Some(MatchKind::SchoolPartial);
    }
    if aliases.department_alias_hits(keyword, department) {
        kind = Some(MatchKind::DeptAlias);
    }
    kind
}

/// True when `token` is inside the department name, directly or via an alias.
pub fn department_contains(token: &str, department: &str, aliases: &AliasTables) -> bool {
    department.contains(token) || aliases.department_alias_hits(token, department)
}

/// Score one record against a classified query.
pub fn match_record(record: &Record, query: &ClassifiedQuery, aliases: &AliasTables) -> RecordMatch {
    if query.is_empty() {
        return RecordMatch {
            kinds: Vec::new(),
            score: 0,
            mode: None,
        };
    }

    let university = record.university.to_lowercase();
    let department = record.department.to_lowercase();
    let combined = format!("{}{}", university, department);

    let kinds: Vec<Option<MatchKind>> = query
        .descriptive
        .iter()
        .map(|keyword| classify_keyword(keyword, &university, &department, &combined, aliases))
        .collect();

    let anchored = query.is_anchored(&record.university);
    let any_school_partial = kinds.contains(&Some(MatchKind::SchoolPartial));
    let all_matched = kinds.iter().all(Option::is_some);

    let mut score = 0;
    let mut mode = None;

    if all_matched && (anchored || any_school_partial) {
        if !query.descriptive.is_empty() {
            score += STRICT_BASE_SCORE;
        }
        if query
            .tokens
            .iter()
            .all(|token| department_contains(token, &department, aliases))
        {
            score += DEPARTMENT_COVERAGE_BONUS;
        }
        if anchored {
            score += ANCHOR_BONUS;
        }
        if kinds.contains(&Some(MatchKind::DeptAlias)) {
            score += DEPT_ALIAS_BONUS;
        }
        if any_school_partial {
            score += SCHOOL_PARTIAL_BONUS;
        }
        mode = Some(ScoreMode::Strict);
    } else if kinds.iter().any(Option::is_some) {
        if query.anchors.is_empty() {
            score += LOOSE_UNANCHORED_SCORE;
        } else if anchored {
            score += LOOSE_ANCHORED_SCORE;
        }
        if score > 0 {
            mode = Some(ScoreMode::Loose);
        }
    }

    RecordMatch { kinds, score, mode }
}
