// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a raw query into keywords.
//!
//! Two steps. [`normalize_query`] splits and lowercases, and handles the
//! 台/臺 problem: official names use 臺, people type 台. Every keyword with 台
//! is rewritten to 臺 and the original is kept too, so `台大` becomes
//! `["臺大", "台大"]`.
//!
//! [`classify_tokens`] then pulls out anchors, keywords that name a
//! university outright or through an alias. Whatever is left is descriptive and
//! gets matched against record text.

use std::collections::BTreeSet;
use tracing::trace;

use crate::alias::AliasTables;
use crate::index::CorpusIndex;

/// The variant people type.
pub const TAI_VARIANT: char = '台';
/// The variant used in official university names.
pub const TAI_CANONICAL: char = '臺';

/// Split, lowercase and expand 台/臺 variants.
///
/// An empty or whitespace-only query yields no tokens. Callers should treat
/// that as "no search", which is different from a search with no hits.
pub fn normalize_query(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for piece in raw.split_whitespace() {
        let original = piece.to_lowercase();
        if original.contains(TAI_VARIANT) {
            tokens.push(original.replace(TAI_VARIANT, &TAI_CANONICAL.to_string()));
            tokens.push(original);
        } else {
            tokens.push(original);
        }
    }
    tokens
}

/// Keywords split into university anchors and descriptive text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedQuery {
    /// Every normalized token, in order.
    pub tokens: Vec<String>,
    /// Canonical university names the query pins down.
    pub anchors: BTreeSet<String>,
    /// Tokens that did not resolve to a university, in order, duplicates kept.
    pub descriptive: Vec<String>,
}

impl ClassifiedQuery {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_anchored(&self, university: &str) -> bool {
        self.anchors.contains(university)
    }
}

/// Resolve anchors against the index's university names, then the alias table.
pub fn classify_tokens(
    tokens: Vec<String>,
    index: &CorpusIndex,
    aliases: &AliasTables,
) -> ClassifiedQuery {
    let mut anchors = BTreeSet::new();
    let mut descriptive = Vec::new();

    for token in &tokens {
        if let Some(university) = index.resolve_university(token) {
            anchors.insert(university.to_string());
        } else if let Some(names) = aliases.universities_for(token) {
            anchors.extend(names.iter().cloned());
        } else {
            descriptive.push(token.clone());
        }
    }

    trace!(?tokens, ?anchors, ?descriptive, "classified query");

    ClassifiedQuery {
        tokens,
        anchors,
        descriptive,
    }
}

/// [`normalize_query`] followed by [`classify_tokens`].
pub fn parse_query(raw: &str, index: &CorpusIndex, aliases: &AliasTables) -> ClassifiedQuery {
    classify_tokens(normalize_query(raw), index, aliases)
}
