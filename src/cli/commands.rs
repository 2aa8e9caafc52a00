// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.
//!
//! Each handler loads what it needs, computes with the pure helpers below,
//! then prints. The helpers carry the logic worth testing: result selection,
//! labels, keyword explanations and corpus summaries.

use std::path::Path;
use std::sync::Arc;

use cutoff::history::{self, display_value, YearRecord};
use cutoff::load::{department_data, load_aliases, load_corpus};
use cutoff::{
    AliasTables, ClassifiedQuery, CorpusIndex, CutoffEntry, Error, MatchKind, MatchResult, Matcher,
    RecordMatch, Result, SubjectFilter,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::display::*;
use super::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    let aliases = load_aliases(cli.aliases.as_deref())?;

    match &cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            include,
            exclude,
            year,
            explain,
            json,
        } => {
            let filter = SubjectFilter::new()
                .with_include(include.iter().cloned())
                .with_exclude(exclude.iter().cloned());
            let options = SearchOptions {
                limit: *limit,
                filter,
                year: *year,
                explain: *explain,
                json: *json,
            };
            run_search(corpus, &query.join(" "), aliases, &options)
        }
        Commands::Show {
            corpus,
            university,
            department,
            years,
            json,
        } => run_show(corpus, university, department, *years, *json),
        Commands::Inspect { corpus } => run_inspect(corpus, &aliases),
        Commands::Aliases => {
            print_aliases(&aliases);
            Ok(())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

struct SearchOptions {
    limit: usize,
    filter: SubjectFilter,
    year: Option<u32>,
    explain: bool,
    json: bool,
}

/// The head of `results` to print. A limit of 0 means all of them.
fn take_limit(results: &[MatchResult], limit: usize) -> &[MatchResult] {
    if limit == 0 {
        results
    } else {
        &results[..limit.min(results.len())]
    }
}

/// Section label for a result table. `kept` is the count after a non-empty
/// subject filter.
fn results_label(raw: &str, shown: usize, total: usize, kept: Option<usize>) -> String {
    match kept {
        Some(kept) => format!("RESULTS \"{}\"  {} of {} ({} after filter)", raw, shown, total, kept),
        None => format!("RESULTS \"{}\"  {} of {}", raw, shown, total),
    }
}

/// Footer line for results cut by `--limit`.
fn more_line(shown: usize, kept: usize) -> Option<String> {
    (shown < kept).then(|| format!("… {} more (raise --limit)", kept - shown))
}

/// Each descriptive keyword paired with how it matched one record.
fn keyword_details<'q>(query: &'q ClassifiedQuery, detail: &RecordMatch) -> Vec<(&'q str, Option<MatchKind>)> {
    query
        .descriptive
        .iter()
        .map(String::as_str)
        .zip(detail.kinds.iter().copied())
        .collect()
}

fn run_search(corpus_path: &Path, raw: &str, aliases: AliasTables, options: &SearchOptions) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let matcher = Matcher::new(Arc::new(CorpusIndex::build(&corpus)), aliases);

    let query = matcher.parse(raw);
    debug!(
        tokens = ?query.tokens,
        anchors = ?query.anchors,
        descriptive = ?query.descriptive,
        "parsed query"
    );

    let ranked = matcher.search(raw);
    let total = ranked.len();
    let filtered = options.filter.apply(ranked, &corpus, options.year);
    info!(total, kept = filtered.len(), "search finished");

    let shown = take_limit(&filtered, options.limit);

    if options.json {
        return print_json(shown);
    }

    let kept = (!options.filter.is_empty()).then_some(filtered.len());
    section_top(&results_label(raw, shown.len(), total, kept));

    if shown.is_empty() {
        row(&format!("  {}", dim("no matching departments")));
        section_bot();
        return Ok(());
    }

    let explanations = if options.explain {
        matcher.explain(raw)
    } else {
        Vec::new()
    };

    for (rank, result) in shown.iter().enumerate() {
        row(&format!(
            " {:>3} {}  {}  {}  {}",
            rank + 1,
            score_value(result.score),
            mode_label(result.mode),
            pad_right(&result.record.university, 20),
            result.record.department
        ));

        if let Some(explanation) = explanations.iter().find(|e| e.position == result.position) {
            let detail: Vec<String> = keyword_details(&query, &explanation.detail)
                .into_iter()
                .map(|(keyword, kind)| format!("{}={}", keyword, match_kind_label(kind)))
                .collect();
            let anchored = if query.is_anchored(&result.record.university) {
                themed(GREEN, &[], "anchored")
            } else {
                dim("unanchored")
            };
            row(&format!("        {}  {}", anchored, detail.join("  ")));
        }
    }

    if let Some(more) = more_line(shown.len(), filtered.len()) {
        row(&format!("  {}", dim(&more)));
    }
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// SHOW
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
struct YearView<'a> {
    year: u32,
    entries: &'a [CutoffEntry],
}

fn run_show(corpus_path: &Path, university: &str, department: &str, years: usize, json: bool) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let data = department_data(&corpus, university, department)?;
    let recent = history::recent_years(data, years);

    if json {
        let view: Vec<YearView<'_>> = recent
            .iter()
            .map(|y| YearView {
                year: y.year,
                entries: &y.entries,
            })
            .collect();
        return print_json(&view);
    }

    banner(&format!("{} {}", university, department));

    if recent.is_empty() {
        section_top("NO DATA");
        row(&format!("  {}", dim("no yearly cutoffs published yet")));
        section_bot();
        return Ok(());
    }

    for year in &recent {
        print_year(department, year);
    }
    Ok(())
}

fn print_year(department: &str, year: &YearRecord) {
    section_top(&format!("{} 年", year.year));
    if year.entries.is_empty() {
        row(&format!("  {}", dim("no readable entries")));
    }
    for entry in &year.entries {
        if let Some(name) = entry.name.as_deref().filter(|name| *name != department) {
            row(&format!("  {}", themed(YELLOW, &[BOLD], name)));
        }

        let mut stats = Vec::new();
        if let Some(cutoff) = &entry.cutoff {
            stats.push(format!("cutoff {}", themed(GREEN, &[BOLD], &display_value(cutoff))));
        }
        if let Some(percentile) = &entry.percentile {
            stats.push(format!("top {}%", display_value(percentile)));
        }
        if let Some(admitted) = &entry.admitted {
            stats.push(format!("admitted {}", display_value(admitted)));
        }
        if let Some(quota) = &entry.quota {
            stats.push(format!("quota {}", display_value(quota)));
        }
        if !stats.is_empty() {
            row(&format!("  {}", stats.join("   ")));
        }

        let weights = entry.weight_pairs();
        if !weights.is_empty() {
            let joined: Vec<String> = weights.iter().map(|(s, w)| format!("{} ×{}", s, w)).collect();
            row(&format!("  {} {}", dim("weights"), joined.join(" | ")));
        }
        let thresholds = entry.threshold_pairs();
        if !thresholds.is_empty() {
            let joined: Vec<String> = thresholds.iter().map(|(s, l)| format!("{} {}", s, l)).collect();
            row(&format!("  {} {}", dim("GSAT   "), joined.join(" | ")));
        }
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

/// Counts reported by `cutoff inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CorpusSummary {
    universities: usize,
    /// Universities whose value is empty or not an object.
    empty_universities: usize,
    records: usize,
    /// Records with no numeric year key in their data.
    without_data: usize,
    latest: Option<u32>,
}

fn summarize(corpus: &Value, index: &CorpusIndex) -> CorpusSummary {
    let empty_universities = corpus.as_object().map_or(0, |m| {
        m.values()
            .filter(|d| d.as_object().map_or(true, serde_json::Map::is_empty))
            .count()
    });

    let latest_years: Vec<Option<u32>> = index
        .records()
        .iter()
        .map(|r| {
            corpus
                .get(&r.university)
                .and_then(|d| d.get(&r.department))
                .and_then(history::latest_year)
        })
        .collect();

    CorpusSummary {
        universities: index.university_count(),
        empty_universities,
        records: index.len(),
        without_data: latest_years.iter().filter(|y| y.is_none()).count(),
        latest: latest_years.into_iter().flatten().max(),
    }
}

fn run_inspect(corpus_path: &Path, aliases: &AliasTables) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let index = CorpusIndex::build(&corpus);
    let summary = summarize(&corpus, &index);

    banner(&format!("CORPUS {}", corpus_path.display()));

    section_top("INDEX");
    row(&format!("  universities           {}", summary.universities));
    row(&format!("  with no departments    {}", summary.empty_universities));
    row(&format!("  records                {}", summary.records));
    row(&format!("  records without data   {}", summary.without_data));
    row(&format!(
        "  latest year            {}",
        summary.latest.map_or_else(|| "--".to_string(), |y| y.to_string())
    ));
    section_mid("ALIASES");
    row(&format!("  university aliases     {}", aliases.university_len()));
    row(&format!("  department aliases     {}", aliases.department_len()));
    section_bot();
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// ALIASES / OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

fn print_aliases(aliases: &AliasTables) {
    section_top("UNIVERSITY ALIASES");
    for (alias, names) in aliases.university_entries() {
        row(&format!("  {} {}", pad_right(alias, 10), names.join(", ")));
    }
    section_mid("DEPARTMENT ALIASES");
    for (alias, fragments) in aliases.department_entries() {
        row(&format!("  {} {}", pad_right(alias, 10), fragments.join(", ")));
    }
    section_bot();
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(Error::Output)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", to_json(value)?);
    Ok(())
}
