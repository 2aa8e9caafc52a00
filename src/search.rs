// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Running a query over the whole index.
//!
//! Search is a pure function of (index, alias tables, query). Every record is
//! scored, zero scores are dropped, the rest are sorted by score descending.
//! Equal scores keep index order, so the same query over the same index always
//! returns the same list.
//!
//! There is no pagination here. Showing results a batch at a time is the
//! caller's business.

use std::sync::Arc;

use crate::alias::AliasTables;
use crate::index::{CorpusIndex, SharedIndex};
use crate::query::{parse_query, ClassifiedQuery};
use crate::scoring::{match_record, RecordMatch};
use crate::types::{MatchResult, Record, ScoreMode};

/// Score every record in `index` against `raw` and return the hits, best first.
///
/// A blank query returns nothing.
pub fn search(index: &CorpusIndex, aliases: &AliasTables, raw: &str) -> Vec<MatchResult> {
    let query = parse_query(raw, index, aliases);
    search_classified(index, aliases, &query)
}

/// Same as [`search`] for a query that was already classified.
pub fn search_classified(
    index: &CorpusIndex,
    aliases: &AliasTables,
    query: &ClassifiedQuery,
) -> Vec<MatchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<MatchResult> = index
        .records()
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let matched = match_record(record, query, aliases);
            if !matched.is_match() {
                return None;
            }
            Some(MatchResult {
                record: record.clone(),
                score: matched.score,
                position,
                mode: matched.mode.unwrap_or(ScoreMode::Loose),
            })
        })
        .collect();

    // stable: ties stay in index order
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}

/// Per-record scoring detail, for explaining a ranking.
#[derive(Debug, Clone)]
pub struct Explanation<'a> {
    pub record: &'a Record,
    pub position: usize,
    pub detail: RecordMatch,
}

/// An index and alias tables bundled for repeated queries.
#[derive(Debug, Clone)]
pub struct Matcher {
    index: Arc<CorpusIndex>,
    aliases: AliasTables,
}

impl Matcher {
    pub fn new(index: Arc<CorpusIndex>, aliases: AliasTables) -> Self {
        Self { index, aliases }
    }

    /// Match against whatever `shared` holds right now. Later rebuilds of
    /// `shared` are not seen by this matcher.
    pub fn from_shared(shared: &SharedIndex, aliases: AliasTables) -> Self {
        Self::new(shared.snapshot(), aliases)
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn aliases(&self) -> &AliasTables {
        &self.aliases
    }

    pub fn parse(&self, raw: &str) -> ClassifiedQuery {
        parse_query(raw, &self.index, &self.aliases)
    }

    pub fn search(&self, raw: &str) -> Vec<MatchResult> {
        search(&self.index, &self.aliases, raw)
    }

    /// Scoring detail for every record that matched, in result order.
    pub fn explain(&self, raw: &str) -> Vec<Explanation<'_>> {
        let query = self.parse(raw);
        if query.is_empty() {
            return Vec::new();
        }

        let mut explained: Vec<Explanation<'_>> = self
            .index
            .records()
            .iter()
            .enumerate()
            .map(|(position, record)| Explanation {
                record,
                position,
                detail: match_record(record, &query, &self.aliases),
            })
            .filter(|e| e.detail.is_match())
            .collect();

        explained.sort_by(|a, b| b.detail.score.cmp(&a.detail.score));
        explained
    }
}
