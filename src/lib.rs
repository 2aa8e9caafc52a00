//! Alias-aware search over historical university admission cutoffs.
//!
//! The corpus is a nested document, `university → department → yearly data`.
//! This crate flattens it into (university, department) records and ranks them
//! against free-text queries that mix school nicknames, department
//! abbreviations and plain substrings.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  index.rs   │────▶│  query.rs    │────▶│  scoring/    │────▶│  search.rs  │
//! │ (CorpusIndex│     │ (normalize,  │     │ (classify,   │     │ (rank, tie  │
//! │  SharedIdx) │     │  anchors)    │     │  strict/loose│     │  by order)  │
//! └─────────────┘     └──────────────┘     └──────────────┘     └─────────────┘
//!        ▲                   ▲                    ▲
//!        │                   └──── alias.rs ──────┘
//!   load.rs (JSON)           (university + department tables)
//!
//!   history.rs  typed yearly cutoffs     filter.rs  subject include/exclude
//! ```
//!
//! # Usage
//!
//! ```
//! use cutoff::{AliasTables, CorpusIndex, search};
//! use serde_json::json;
//!
//! let corpus = json!({
//!     "國立臺灣大學": {"資訊工程學系": {}, "法律學系": {}},
//!     "國立成功大學": {"資訊工程學系": {}}
//! });
//! let index = CorpusIndex::build(&corpus);
//! let aliases = AliasTables::builtin();
//!
//! let results = search(&index, &aliases, "台大 資工");
//! assert_eq!(results[0].record.university, "國立臺灣大學");
//! assert_eq!(results[0].record.department, "資訊工程學系");
//! ```

pub mod alias;
pub mod error;
pub mod filter;
pub mod history;
mod index;
pub mod load;
pub mod query;
pub mod scoring;
mod search;
pub mod testing;
mod types;

pub use alias::{AliasConfig, AliasTables, AliasValue};
pub use error::{Error, Result};
pub use filter::{SubjectFilter, SubjectState};
pub use history::{recent_years, CutoffEntry, YearRecord};
pub use index::{CorpusIndex, SharedIndex};
pub use query::{classify_tokens, normalize_query, parse_query, ClassifiedQuery};
pub use scoring::{match_record, RecordMatch};
pub use search::{search, search_classified, Explanation, Matcher};
pub use types::{MatchKind, MatchResult, Record, ScoreMode};
