// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! A [`Record`] is one (university, department) pair lifted out of the nested
//! corpus. A [`MatchResult`] pairs a record with the score it earned for one
//! query. [`MatchKind`] is how a single descriptive keyword hit a record.
//!
//! # Invariants
//!
//! - **Record**: immutable once built. Identity is the pair itself; the index
//!   does not deduplicate, so the same pair can appear twice if the source
//!   data has it twice.
//!
//! - **MatchResult**: `score > 0`. Zero-score records never leave the matcher.
//!
//! - **position**: index of the record in [`CorpusIndex`](crate::CorpusIndex)
//!   order. Used as the tie-break when two results have the same score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One (university, department) pair from the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    pub university: String,
    pub department: String,
}

impl Record {
    pub fn new(university: impl Into<String>, department: impl Into<String>) -> Self {
        Self {
            university: university.into(),
            department: department.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.university, self.department)
    }
}

/// How one descriptive keyword matched a record.
///
/// Classification runs in a fixed order and later checks overwrite earlier
/// ones: `Partial`, then `SchoolPartial`, then `DeptAlias`. So a keyword that
/// is both a university substring and a department alias ends up `DeptAlias`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Substring of university name + department name.
    Partial,
    /// Substring of the university name.
    SchoolPartial,
    /// Department abbreviation whose expansion appears in the department name.
    DeptAlias,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Partial => "partial",
            MatchKind::SchoolPartial => "school_partial",
            MatchKind::DeptAlias => "dept_alias",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which scoring path produced a record's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMode {
    /// Every descriptive keyword matched and the university is anchored
    /// (or named by a keyword).
    Strict,
    /// Fallback: at least one descriptive keyword matched.
    Loose,
}

/// A record that scored above zero for a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub record: Record,
    pub score: u32,
    /// Position of the record in index order.
    pub position: usize,
    pub mode: ScoreMode,
}
