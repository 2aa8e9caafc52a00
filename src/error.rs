// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors at the I/O boundary.
//!
//! Search itself cannot fail. Reading files from disk, looking up a named
//! department and writing JSON output can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize output: {0}")]
    Output(#[source] serde_json::Error),

    #[error("no department {department} at {university}")]
    NotFound {
        university: String,
        department: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
