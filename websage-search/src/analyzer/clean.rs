//! Heuristic snippet cleaning: markup stripping and naive truncation.
//!
//! This is a best-effort sanitizer, not a summarizer. It splits sentences on
//! the literal `". "` and therefore mishandles abbreviations, decimals and
//! sentences without that delimiter. Callers depend on that exact behaviour.

use regex::Regex;
use std::sync::LazyLock;

/// Returned when there is no raw text to clean.
pub const EMPTY_SUMMARY: &str = "No useful summary found.";

/// Maximum number of `". "`-delimited fragments kept.
pub const MAX_SENTENCES: usize = 3;

const SENTENCE_DELIMITER: &str = ". ";

static HEADING_MARKERS: LazyLock<Regex> = LazyLock::new(|| compile(r"#{1,6}"));
static EMPHASIS_MARKERS: LazyLock<Regex> = LazyLock::new(|| compile(r"\*+"));
static TABLE_FRAGMENTS: LazyLock<Regex> = LazyLock::new(|| compile(r"\|.*?\|"));
static BRACKET_FRAGMENTS: LazyLock<Regex> = LazyLock::new(|| compile(r"\[.*?\]"));
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        // All patterns are string literals in this module.
        Err(e) => unreachable!("invalid built-in pattern {pattern}: {e}"),
    }
}

/// Turns raw result content into a display summary.
///
/// Implement this to swap in a different summarizer without touching
/// the pipeline.
pub trait SnippetCleaner: Send + Sync {
    /// Produce the summary for one result's raw content.
    fn clean(&self, raw: Option<&str>) -> String;
}

/// The default regex pipeline, see [`clean_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCleaner;

impl SnippetCleaner for HeuristicCleaner {
    fn clean(&self, raw: Option<&str>) -> String {
        clean_text(raw)
    }
}

/// Clean raw snippet text.
///
/// Applied in order:
///
/// 1. Strip heading markers (`#` runs of one to six).
/// 2. Strip emphasis markers (`*` runs).
/// 3. Strip `|...|` table fragments, non-greedy, within a line.
/// 4. Strip `[...]` link labels and footnote markers, non-greedy, within a line.
/// 5. Collapse whitespace to single spaces and trim.
/// 6. Keep the first three `". "`-delimited fragments and append a period.
///
/// Empty or absent input yields [`EMPTY_SUMMARY`].
///
/// # Examples
///
/// ```
/// use websage_search::analyzer::clean_text;
///
/// let summary = clean_text(Some("# Title **bold**. Two. Three. Four."));
/// assert_eq!(summary, "Title bold. Two. Three.");
/// ```
pub fn clean_text(raw: Option<&str>) -> String {
    let Some(text) = raw.filter(|t| !t.is_empty()) else {
        return EMPTY_SUMMARY.to_owned();
    };

    let text = HEADING_MARKERS.replace_all(text, "");
    let text = EMPHASIS_MARKERS.replace_all(&text, "");
    let text = TABLE_FRAGMENTS.replace_all(&text, "");
    let text = BRACKET_FRAGMENTS.replace_all(&text, "");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");

    let mut summary = text
        .trim()
        .split(SENTENCE_DELIMITER)
        .take(MAX_SENTENCES)
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER);
    summary.push('.');
    summary
}
