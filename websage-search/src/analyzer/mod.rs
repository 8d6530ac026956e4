//! Result analysis: snippet cleaning and source-confidence scoring.
//!
//! Both operations are pure. Cleaning works per result and preserves order;
//! confidence is computed once for the whole set from its URLs.

pub mod clean;
pub mod confidence;
pub mod domain;

pub use clean::{clean_text, HeuristicCleaner, SnippetCleaner, EMPTY_SUMMARY};
pub use confidence::source_confidence;

use crate::types::{AnalyzedResults, CleanedSnippet, SearchResult};

/// Analyse one result set with the given cleaner.
///
/// Returns the set's confidence verdict and one [`CleanedSnippet`] per
/// result, in input order.
pub fn analyze(results: &[SearchResult], cleaner: &dyn SnippetCleaner) -> AnalyzedResults {
    let snippets = results
        .iter()
        .map(|r| CleanedSnippet {
            title: r.title.clone(),
            summary: cleaner.clean(Some(r.content.as_str())),
            source_url: r.url.clone(),
        })
        .collect();

    AnalyzedResults {
        verdict: source_confidence(results),
        snippets,
    }
}
