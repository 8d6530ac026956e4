//! Source-confidence scoring by distinct domain count.
//!
//! Thresholds:
//!
//! ```text
//! n >= 5      High
//! 3 <= n < 5  Medium
//! n < 3       Low
//! ```
//!
//! The verdict depends only on result URLs, never on titles or content.

use std::collections::HashSet;

use super::domain::source_domain;
use crate::types::{ConfidenceLevel, ConfidenceVerdict, SearchResult};

/// Score a result set by the number of distinct source domains.
///
/// Results with empty or unparseable URLs contribute nothing. The verdict
/// is independent of result order and never fails.
pub fn source_confidence(results: &[SearchResult]) -> ConfidenceVerdict {
    let domains: HashSet<String> = results
        .iter()
        .filter_map(|r| source_domain(&r.url))
        .collect();

    let count = domains.len();
    ConfidenceVerdict {
        level: ConfidenceLevel::from_domain_count(count),
        distinct_domain_count: count,
    }
}
