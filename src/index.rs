// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flattening the nested corpus into a searchable list.
//!
//! The corpus arrives as `university → department → yearly data`. Search only
//! cares about the two names, so the index walks both levels once and keeps an
//! ordered `Vec<Record>`. Iteration order is document order: `serde_json` is
//! built with `preserve_order`, so the first department in the file is the
//! first record in the index.
//!
//! Nothing here validates or deduplicates. Garbage in means fewer records out,
//! never an error: a corpus that isn't an object yields an empty index, and a
//! university whose value isn't an object contributes nothing.
//!
//! # Replacing the index
//!
//! [`SharedIndex`] holds the active index behind an `Arc`. A rebuild swaps the
//! pointer; searches that already took a [`SharedIndex::snapshot`] finish
//! against the old index.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::types::Record;

/// Ordered (university, department) records plus a lookup of university names.
#[derive(Debug, Clone, Default)]
pub struct CorpusIndex {
    records: Vec<Record>,
    /// Lowercased university name → canonical name as written in the corpus.
    universities: HashMap<String, String>,
}

impl CorpusIndex {
    /// Build from a parsed corpus document.
    ///
    /// Anything other than a JSON object produces an empty index.
    pub fn build(corpus: &Value) -> Self {
        match corpus.as_object() {
            Some(map) => Self::from_map(map),
            None => {
                if !corpus.is_null() {
                    warn!("corpus is not an object; building empty index");
                }
                Self::default()
            }
        }
    }

    /// Build from the top-level university map.
    pub fn from_map(corpus: &Map<String, Value>) -> Self {
        let mut records = Vec::new();
        let mut universities = HashMap::with_capacity(corpus.len());

        for (university, departments) in corpus {
            universities
                .entry(university.to_lowercase())
                .or_insert_with(|| university.clone());

            let Some(departments) = departments.as_object() else {
                warn!(%university, "departments are not an object; skipping");
                continue;
            };

            records.extend(
                departments
                    .keys()
                    .map(|department| Record::new(university.clone(), department.clone())),
            );
        }

        debug!(
            records = records.len(),
            universities = universities.len(),
            "flattened corpus"
        );

        Self {
            records,
            universities,
        }
    }

    /// Build directly from records, keeping their order.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut universities = HashMap::new();
        for record in &records {
            universities
                .entry(record.university.to_lowercase())
                .or_insert_with(|| record.university.clone());
        }
        Self {
            records,
            universities,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct university keys seen, including ones with no departments.
    pub fn university_count(&self) -> usize {
        self.universities.len()
    }

    /// Canonical name for a lowercased token that names a university exactly.
    pub fn resolve_university(&self, lowercase: &str) -> Option<&str> {
        self.universities.get(lowercase).map(String::as_str)
    }
}

/// Process-wide handle to the active index.
///
/// Readers call [`snapshot`](Self::snapshot) and keep the `Arc` for the whole
/// search. [`rebuild`](Self::rebuild) replaces the index wholesale; there is no
/// incremental update.
#[derive(Debug, Default)]
pub struct SharedIndex {
    current: RwLock<Arc<CorpusIndex>>,
}

impl SharedIndex {
    pub fn new(index: CorpusIndex) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The index as of now. Later rebuilds do not affect the returned value.
    pub fn snapshot(&self) -> Arc<CorpusIndex> {
        Arc::clone(&*self.current.read())
    }

    /// Flatten `corpus` and make it the active index.
    pub fn rebuild(&self, corpus: &Value) -> Arc<CorpusIndex> {
        let fresh = Arc::new(CorpusIndex::build(corpus));
        *self.current.write() = Arc::clone(&fresh);
        fresh
    }

    /// Install an already-built index.
    pub fn replace(&self, index: CorpusIndex) {
        *self.current.write() = Arc::new(index);
    }
}
