// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subject include/exclude filtering of search results.
//!
//! A filter looks at the subjects a department uses in one year (weighted
//! subjects plus GSAT thresholds). `exclude` drops a department that uses any
//! listed subject; `include` keeps only departments that use all of them.
//! Filtering happens after ranking and never changes scores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::history::{self, YearRecord};
use crate::types::MatchResult;

/// Where a subject sits in the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectState {
    Neutral,
    Include,
    Exclude,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectFilter {
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl SubjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_include<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for subject in subjects {
            self.set(subject.into(), SubjectState::Include);
        }
        self
    }

    pub fn with_exclude<I, S>(mut self, subjects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for subject in subjects {
            self.set(subject.into(), SubjectState::Exclude);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn state(&self, subject: &str) -> SubjectState {
        if self.include.iter().any(|s| s == subject) {
            SubjectState::Include
        } else if self.exclude.iter().any(|s| s == subject) {
            SubjectState::Exclude
        } else {
            SubjectState::Neutral
        }
    }

    /// Put `subject` in exactly one state.
    pub fn set(&mut self, subject: String, state: SubjectState) {
        self.include.retain(|s| *s != subject);
        self.exclude.retain(|s| *s != subject);
        match state {
            SubjectState::Include => self.include.push(subject),
            SubjectState::Exclude => self.exclude.push(subject),
            SubjectState::Neutral => {}
        }
    }

    /// Advance a subject neutral → include → exclude → neutral. Returns the new state.
    pub fn cycle(&mut self, subject: &str) -> SubjectState {
        let next = match self.state(subject) {
            SubjectState::Neutral => SubjectState::Include,
            SubjectState::Include => SubjectState::Exclude,
            SubjectState::Exclude => SubjectState::Neutral,
        };
        self.set(subject.to_string(), next);
        next
    }

    /// Does one year of a department's data pass?
    ///
    /// No data for the year passes only an empty filter.
    pub fn admits_year(&self, year: Option<&YearRecord>) -> bool {
        if self.is_empty() {
            return true;
        }
        let Some(year) = year else {
            return false;
        };
        if self.exclude.iter().any(|s| year.uses_subject(s)) {
            return false;
        }
        self.include.iter().all(|s| year.uses_subject(s))
    }

    /// Does a department pass, judged on `year` or its most recent year?
    pub fn admits(&self, department_data: &Value, year: Option<u32>) -> bool {
        if self.is_empty() {
            return true;
        }
        let record = year
            .or_else(|| history::latest_year(department_data))
            .and_then(|y| history::year(department_data, y));
        self.admits_year(record.as_ref())
    }

    /// Keep results whose department passes. Order is preserved.
    pub fn apply(&self, results: Vec<MatchResult>, corpus: &Value, year: Option<u32>) -> Vec<MatchResult> {
        if self.is_empty() {
            return results;
        }
        results
            .into_iter()
            .filter(|result| {
                let data = corpus
                    .get(&result.record.university)
                    .and_then(|departments| departments.get(&result.record.department))
                    .unwrap_or(&Value::Null);
                self.admits(data, year)
            })
            .collect()
    }
}
