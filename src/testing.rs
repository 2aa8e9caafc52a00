//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures so tests agree on what the corpus looks like.

#![doc(hidden)]

use serde_json::{json, Map, Value};

use crate::index::CorpusIndex;
use crate::types::Record;

/// Build a corpus document from (university, department) pairs with empty data.
///
/// Pairs are inserted in order; a repeated pair keeps its first position.
pub fn make_corpus(pairs: &[(&str, &str)]) -> Value {
    let mut corpus = Map::new();
    for (university, department) in pairs {
        let departments = corpus
            .entry(university.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(departments) = departments {
            departments.insert(department.to_string(), json!({}));
        }
    }
    Value::Object(corpus)
}

/// Build an index straight from (university, department) pairs, duplicates kept.
pub fn make_index(pairs: &[(&str, &str)]) -> CorpusIndex {
    CorpusIndex::from_records(
        pairs
            .iter()
            .map(|(university, department)| Record::new(*university, *department))
            .collect(),
    )
}

/// A small corpus shaped like the real data: several schools, overlapping
/// department names, and yearly entries for a few departments.
pub fn sample_corpus() -> Value {
    json!({
        "國立臺灣大學": {
            "資訊工程學系": {
                "114": {"科目倍數": {"數A": 2, "物理": 1.5, "英文": 1}, "一般考生錄取標準": 61.2, "錄取人數": 30, "達標比例": 1.8},
                "113": [{"校系名稱": "資訊工程學系", "科目倍數": {"數A": 2, "英文": 1}, "一般考生錄取標準": 60.1, "錄取人數": 28}]
            },
            "法律學系": {
                "114": {"科目倍數": {"國文": 1.5, "英文": 1.5, "歷史": 1}, "一般考生錄取標準": 55.0, "錄取人數": 60}
            },
            "物理治療學系": {}
        },
        "國立成功大學": {
            "資訊工程學系": {
                "114": {"科目倍數": {"數A": 2, "物理": 1}, "一般考生錄取標準": 57.3}
            },
            "法律學系": {},
            "工程科學系": {}
        },
        "國立清華大學": {
            "資訊工程學系": {},
            "工程與系統科學系": {}
        },
        "國立中央大學": {
            "地球科學學系": {},
            "資訊工程學系": {}
        },
        "東吳大學": {
            "法律學系": {},
            "資訊管理學系": {}
        },
        "國立臺灣師範大學": {
            "資訊工程學系": {},
            "臺灣語文學系": {}
        }
    })
}
