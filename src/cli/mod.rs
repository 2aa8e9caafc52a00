// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cutoff command-line interface.
//!
//! Four subcommands: `search` ranks departments for a query, `show` prints the
//! recent cutoffs of one department, `inspect` summarizes a corpus file, and
//! `aliases` prints the alias tables in effect.

pub mod commands;
pub mod display;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "cutoff",
    about = "Search historical university admission cutoffs by name or alias",
    version
)]
pub struct Cli {
    /// Alias config (JSON) extending or replacing the built-in tables
    #[arg(long, global = true, env = "CUTOFF_ALIASES")]
    pub aliases: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// No log output at all
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank departments matching a query
    Search {
        /// Corpus JSON (university → department → yearly data)
        corpus: PathBuf,

        /// Search keywords, e.g. `台大 資工` or `四中 電機`
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results to print (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Keep only departments that use this subject (repeatable)
        #[arg(long, value_name = "SUBJECT")]
        include: Vec<String>,

        /// Drop departments that use this subject (repeatable)
        #[arg(long, value_name = "SUBJECT")]
        exclude: Vec<String>,

        /// Year the subject filter looks at (default: each department's latest)
        #[arg(long)]
        year: Option<u32>,

        /// Show how each keyword matched
        #[arg(long)]
        explain: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recent cutoffs for one department
    Show {
        /// Corpus JSON (university → department → yearly data)
        corpus: PathBuf,

        /// Canonical university name
        university: String,

        /// Department name as it appears in the corpus
        department: String,

        /// Number of most recent years to show
        #[arg(long, default_value = "3")]
        years: usize,

        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a corpus file
    Inspect {
        /// Corpus JSON (university → department → yearly data)
        corpus: PathBuf,
    },

    /// Print the alias tables in effect
    Aliases,
}
