//! Rendering of search outcomes for the terminal.
//!
//! Text output follows the layout of the search screen: a confidence line,
//! then one block per result. Comparison mode adds a `"{first} vs {second}"`
//! heading and a section per topic, without source links. JSON output is a
//! single document carrying the same information.

use std::fmt::{self, Write};

use serde_json::{json, Value};
use websage_search::{AnalyzedResults, SearchOutcome, TopicOutcome};

/// Render an outcome as human-readable text.
///
/// # Errors
///
/// Returns [`fmt::Error`] if formatting fails.
pub fn render_text(outcome: &SearchOutcome) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_text(&mut out, outcome)?;
    Ok(out)
}

fn write_text(out: &mut impl Write, outcome: &SearchOutcome) -> fmt::Result {
    match outcome {
        SearchOutcome::Single(topic) => write_topic(out, topic, true),
        SearchOutcome::Comparison { first, second } => {
            writeln!(out, "{} vs {}", first.label, second.label)?;
            for topic in [first, second] {
                writeln!(out)?;
                writeln!(out, "== {} ==", topic.label)?;
                write_topic(out, topic, false)?;
            }
            Ok(())
        }
    }
}

fn write_topic(out: &mut impl Write, topic: &TopicOutcome, with_sources: bool) -> fmt::Result {
    match &topic.result {
        Ok(analyzed) => write_results(out, analyzed, with_sources),
        Err(err) => writeln!(out, "Search failed: {err}"),
    }
}

fn write_results(
    out: &mut impl Write,
    analyzed: &AnalyzedResults,
    with_sources: bool,
) -> fmt::Result {
    let verdict = &analyzed.verdict;
    let noun = if with_sources { "unique sources" } else { "sources" };
    writeln!(
        out,
        "Confidence: {} ({} {noun})",
        verdict.level, verdict.distinct_domain_count
    )?;

    if analyzed.snippets.is_empty() {
        return writeln!(out, "No results.");
    }

    for snippet in &analyzed.snippets {
        writeln!(out)?;
        writeln!(out, "{}", snippet.title)?;
        writeln!(out, "{}", snippet.summary)?;
        if with_sources && !snippet.source_url.is_empty() {
            writeln!(out, "Source: {}", snippet.source_url)?;
        }
    }
    Ok(())
}

/// Render an outcome as a JSON document.
pub fn render_json(outcome: &SearchOutcome) -> Value {
    let mode = match outcome {
        SearchOutcome::Single(_) => "single",
        SearchOutcome::Comparison { .. } => "compare",
    };
    let topics: Vec<Value> = outcome.topics().into_iter().map(topic_json).collect();
    json!({
        "mode": mode,
        "topics": topics,
    })
}

fn topic_json(topic: &TopicOutcome) -> Value {
    match &topic.result {
        Ok(analyzed) => json!({
            "label": topic.label,
            "query": topic.query,
            "status": "ok",
            "verdict": analyzed.verdict,
            "snippets": analyzed.snippets,
        }),
        Err(err) => json!({
            "label": topic.label,
            "query": topic.query,
            "status": "error",
            "message": err.to_string(),
            "error": err,
        }),
    }
}
