// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading the corpus and alias configuration from disk.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::alias::{AliasConfig, AliasTables};
use crate::error::{Error, Result};

/// Parse a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the `university → department → data` document.
pub fn load_corpus(path: &Path) -> Result<Value> {
    let corpus: Value = read_json(path)?;
    info!(
        path = %path.display(),
        universities = corpus.as_object().map_or(0, |m| m.len()),
        "loaded corpus"
    );
    Ok(corpus)
}

/// Alias tables from an optional config file; built-in tables when `path` is `None`.
pub fn load_aliases(path: Option<&Path>) -> Result<AliasTables> {
    let Some(path) = path else {
        return Ok(AliasTables::builtin());
    };
    let config: AliasConfig = read_json(path)?;
    debug!(
        path = %path.display(),
        universities = config.universities.len(),
        departments = config.departments.len(),
        replace = config.replace,
        "loaded alias config"
    );
    Ok(AliasTables::from_config(config))
}

/// Data for one department, or [`Error::NotFound`].
pub fn department_data<'a>(corpus: &'a Value, university: &str, department: &str) -> Result<&'a Value> {
    corpus
        .get(university)
        .and_then(|departments| departments.get(department))
        .ok_or_else(|| Error::NotFound {
            university: university.to_string(),
            department: department.to_string(),
        })
}
