// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Alias tables: the nicknames people actually type.
//!
//! Nobody searches for 國立臺灣大學. They type 台大, 臺大 or ntu. The university
//! table maps those to canonical corpus names; one alias can stand for a whole
//! group (頂大 is five schools). The department table maps abbreviations to
//! substrings of full department names: 資工 matches anything containing
//! 資訊工程 or 資訊科學.
//!
//! Keys are stored lowercased, so `NTU` in a config file and `ntu` in a query
//! meet in the middle. Tables ship with built-in defaults and can be extended
//! or replaced from JSON:
//!
//! ```json
//! {
//!   "universities": { "北科": "國立臺北科技大學", "雙北": ["國立臺灣大學", "國立臺北大學"] },
//!   "departments": { "機械": "機械工程" },
//!   "replace": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// One alias expansion in a config file: a bare string or a list.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum AliasValue {
    One(String),
    Many(Vec<String>),
}

impl AliasValue {
    fn into_vec(self) -> Vec<String> {
        match self {
            AliasValue::One(name) => vec![name],
            AliasValue::Many(names) => names,
        }
    }
}

/// On-disk alias configuration.
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct AliasConfig {
    #[serde(default)]
    pub universities: BTreeMap<String, AliasValue>,
    #[serde(default)]
    pub departments: BTreeMap<String, AliasValue>,
    /// Start from empty tables instead of the built-in defaults.
    #[serde(default)]
    pub replace: bool,
}

/// University and department alias tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTables {
    universities: BTreeMap<String, Vec<String>>,
    departments: BTreeMap<String, Vec<String>>,
}

impl AliasTables {
    /// Tables with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        let mut tables = Self::empty();
        for (alias, names) in UNIVERSITY_ALIASES {
            tables.insert_university(alias, names.iter().copied());
        }
        for (alias, fragments) in DEPARTMENT_ALIASES {
            tables.insert_department(alias, fragments.iter().copied());
        }
        tables
    }

    /// Built-in tables merged with `config`, or only `config` when it sets `replace`.
    pub fn from_config(config: AliasConfig) -> Self {
        let mut tables = if config.replace {
            Self::empty()
        } else {
            Self::builtin()
        };
        tables.merge(config);
        tables
    }

    /// Apply a config on top of these tables. Config entries replace existing
    /// entries with the same key.
    pub fn merge(&mut self, config: AliasConfig) {
        for (alias, value) in config.universities {
            let names = value.into_vec();
            if names.is_empty() {
                warn!(%alias, "university alias has no expansion; ignoring");
                continue;
            }
            self.universities.remove(&alias.to_lowercase());
            self.insert_university(&alias, names);
        }
        for (alias, value) in config.departments {
            let fragments = value.into_vec();
            if fragments.is_empty() {
                warn!(%alias, "department alias has no expansion; ignoring");
                continue;
            }
            self.departments.remove(&alias.to_lowercase());
            self.insert_department(&alias, fragments);
        }
    }

    /// Add expansions for a university alias. Repeated names are kept once.
    pub fn insert_university<I, S>(&mut self, alias: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(
            self.universities.entry(alias.to_lowercase()).or_default(),
            names,
        );
    }

    /// Add expansions for a department abbreviation. Repeated fragments are kept once.
    ///
    /// Fragments are lowercased like keys, since they are matched against
    /// lowercased department names.
    pub fn insert_department<I, S>(&mut self, alias: &str, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(
            self.departments.entry(alias.to_lowercase()).or_default(),
            fragments.into_iter().map(|f| f.into().to_lowercase()),
        );
    }

    /// Canonical university names for a lowercased alias.
    pub fn universities_for(&self, alias: &str) -> Option<&[String]> {
        self.universities.get(alias).map(Vec::as_slice)
    }

    /// Department name fragments for a lowercased abbreviation.
    pub fn departments_for(&self, alias: &str) -> Option<&[String]> {
        self.departments.get(alias).map(Vec::as_slice)
    }

    /// True when `alias` is a department abbreviation with an expansion inside
    /// `department` (already lowercased).
    pub fn department_alias_hits(&self, alias: &str, department: &str) -> bool {
        self.departments_for(alias).is_some_and(|fragments| {
            fragments
                .iter()
                .any(|fragment| department.contains(fragment.as_str()))
        })
    }

    pub fn university_entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.universities
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn department_entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.departments
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn university_len(&self) -> usize {
        self.universities.len()
    }

    pub fn department_len(&self) -> usize {
        self.departments.len()
    }
}

fn extend_unique<I, S>(target: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for item in items {
        let item = item.into();
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

// =============================================================================
// BUILT-IN TABLES
// =============================================================================

const NTU: &str = "國立臺灣大學";
const NCKU: &str = "國立成功大學";
const NTHU: &str = "國立清華大學";
const NYCU: &str = "國立陽明交通大學";
const NCCU: &str = "國立政治大學";
const NCU: &str = "國立中央大學";
const NSYSU: &str = "國立中山大學";
const NCHU: &str = "國立中興大學";
const CCU: &str = "國立中正大學";
const NTNU: &str = "國立臺灣師範大學";
const NTPU: &str = "國立臺北大學";
const NTOU: &str = "國立臺灣海洋大學";
const NCUE: &str = "國立彰化師範大學";
const NKNU: &str = "國立高雄師範大學";

const UNIVERSITY_ALIASES: &[(&str, &[&str])] = &[
    ("台大", &[NTU]),
    ("臺大", &[NTU]),
    ("ntu", &[NTU]),
    ("成大", &[NCKU]),
    ("ncku", &[NCKU]),
    ("清大", &[NTHU]),
    ("nthu", &[NTHU]),
    ("交大", &[NYCU]),
    ("陽明交大", &[NYCU]),
    ("nycu", &[NYCU]),
    ("政大", &[NCCU]),
    ("nccu", &[NCCU]),
    ("中大", &[NCU]),
    ("中央", &[NCU]),
    ("ncu", &[NCU]),
    ("中山", &[NSYSU]),
    ("nsysu", &[NSYSU]),
    ("中興", &[NCHU]),
    ("興大", &[NCHU]),
    ("nchu", &[NCHU]),
    ("中正", &[CCU]),
    ("ccu", &[CCU]),
    ("台師大", &[NTNU]),
    ("臺師大", &[NTNU]),
    ("師大", &[NTNU]),
    ("ntnu", &[NTNU]),
    ("北大", &[NTPU]),
    ("海大", &[NTOU]),
    ("台海大", &[NTOU]),
    ("臺海大", &[NTOU]),
    ("彰師大", &[NCUE]),
    ("彰師", &[NCUE]),
    ("高師大", &[NKNU]),
    ("高師", &[NKNU]),
    ("頂大", &[NTU, NYCU, NTHU, NCKU, NCCU]),
    ("四大", &[NTU, NYCU, NTHU, NCKU]),
    ("四中", &[NCU, NSYSU, NCHU, CCU]),
    ("中字輩", &[NCU, NSYSU, NCHU, CCU]),
    ("中字", &[NCU, NSYSU, NCHU, CCU]),
    ("師北海", &[NTNU, NTPU, NTOU]),
];

const DEPARTMENT_ALIASES: &[(&str, &[&str])] = &[
    ("資工", &["資訊工程", "資訊科學"]),
    ("化工", &["化學工程"]),
    ("電資", &["電機工程", "資訊工程", "資電", "電機資訊"]),
    ("資管", &["資訊管理"]),
    ("企管", &["企業管理"]),
    ("中文", &["中國文學"]),
    ("外文", &["外國語文"]),
    ("財金", &["財務金融"]),
    ("法律", &["法律"]),
    ("物治", &["物理治療"]),
    ("職治", &["職能治療"]),
    ("應數", &["應用數學"]),
    ("應化", &["應用化學"]),
    ("地科", &["地球科學"]),
    ("工科", &["工程科學", "工程與系統科學"]),
];
