// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typed view over a department's yearly cutoff data.
//!
//! The index treats per-department data as opaque; this module is where it
//! gets read. Data is keyed by ROC year (`"114"`, `"113"`, ...). A year holds
//! either one entry or, when a department was published under several names
//! or groups that year, a list of entries.
//!
//! Field names are the ones the upstream data uses (科目倍數, 一般考生錄取標準,
//! ...). Every field is optional and values are kept as JSON, because the
//! source mixes numbers and strings freely (`"--"` for "not published").

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// One published admission standard.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct CutoffEntry {
    /// Department name as published that year, when it differs from the key.
    #[serde(rename = "校系名稱", default)]
    pub name: Option<String>,
    /// Subject → weight multiplier.
    #[serde(rename = "科目倍數", default)]
    pub weights: Map<String, Value>,
    /// Subject → GSAT threshold level.
    #[serde(rename = "學測標準", default)]
    pub thresholds: Map<String, Value>,
    /// Weighted-average cutoff for regular applicants.
    #[serde(rename = "一般考生錄取標準", default)]
    pub cutoff: Option<Value>,
    #[serde(rename = "錄取人數", default)]
    pub admitted: Option<Value>,
    /// Share of test takers at or above the cutoff, in percent.
    #[serde(rename = "達標比例", default)]
    pub percentile: Option<Value>,
    #[serde(rename = "核定人數", default)]
    pub quota: Option<Value>,
    /// Department code used by the admissions committee.
    #[serde(default)]
    pub id: Option<Value>,
}

impl CutoffEntry {
    /// True when `subject` is weighted or has a GSAT threshold.
    pub fn uses_subject(&self, subject: &str) -> bool {
        self.weights.contains_key(subject) || self.thresholds.contains_key(subject)
    }

    /// Weights as display pairs, in document order.
    pub fn weight_pairs(&self) -> Vec<(&str, String)> {
        self.weights
            .iter()
            .map(|(subject, weight)| (subject.as_str(), display_value(weight)))
            .collect()
    }

    /// Thresholds as display pairs, in document order.
    pub fn threshold_pairs(&self) -> Vec<(&str, String)> {
        self.thresholds
            .iter()
            .map(|(subject, level)| (subject.as_str(), display_value(level)))
            .collect()
    }
}

/// All entries published for one year.
#[derive(Clone, Debug, PartialEq)]
pub struct YearRecord {
    pub year: u32,
    pub entries: Vec<CutoffEntry>,
}

impl YearRecord {
    pub fn uses_subject(&self, subject: &str) -> bool {
        self.entries.iter().any(|e| e.uses_subject(subject))
    }
}

/// Entries for a single year, or `None` when the year is absent.
pub fn year(data: &Value, year: u32) -> Option<YearRecord> {
    let value = data.as_object()?.get(&year.to_string())?;
    Some(YearRecord {
        year,
        entries: parse_entries(year, value),
    })
}

/// The `n` most recent years, newest first. Keys that aren't years are ignored.
pub fn recent_years(data: &Value, n: usize) -> Vec<YearRecord> {
    let Some(years) = data.as_object() else {
        return Vec::new();
    };

    let mut keyed: Vec<(u32, &Value)> = years
        .iter()
        .filter_map(|(key, value)| key.trim().parse::<u32>().ok().map(|y| (y, value)))
        .collect();
    keyed.sort_by(|a, b| b.0.cmp(&a.0));

    keyed
        .into_iter()
        .take(n)
        .map(|(year, value)| YearRecord {
            year,
            entries: parse_entries(year, value),
        })
        .collect()
}

/// Most recent year present, if any.
pub fn latest_year(data: &Value) -> Option<u32> {
    data.as_object()?
        .keys()
        .filter_map(|key| key.trim().parse::<u32>().ok())
        .max()
}

fn parse_entries(year: u32, value: &Value) -> Vec<CutoffEntry> {
    let candidates: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    candidates
        .into_iter()
        .filter_map(|item| match CutoffEntry::deserialize(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(year, error = %e, "skipping unreadable cutoff entry");
                None
            }
        })
        .collect()
}

/// Strings without quotes, everything else as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "--".to_string(),
        other => other.to_string(),
    }
}
