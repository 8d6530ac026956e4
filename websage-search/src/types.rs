//! Core types for search results, depth selection and analysis output.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single result record returned by the search API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// Raw snippet text, possibly containing markdown or table fragments.
    pub content: String,
    /// Absolute URL of the result, or empty when the API gave none.
    pub url: String,
}

/// Search API tuning parameter trading latency for thoroughness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    /// Fast, shallow search.
    #[default]
    #[serde(alias = "normal")]
    Basic,
    /// Slower, more thorough search.
    Advanced,
}

impl SearchDepth {
    /// The value sent to the search API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
        }
    }

    /// The label shown to users for this depth option.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Normal",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchDepth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" | "normal" => Ok(Self::Basic),
            "advanced" => Ok(Self::Advanced),
            other => Err(format!("unknown search depth: {other}")),
        }
    }
}

/// Heuristic trust level of a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// Fewer than 3 distinct source domains.
    Low,
    /// 3 or 4 distinct source domains.
    Medium,
    /// 5 or more distinct source domains.
    High,
}

impl ConfidenceLevel {
    /// Map a distinct-domain count to a level.
    pub fn from_domain_count(count: usize) -> Self {
        match count {
            n if n >= 5 => Self::High,
            n if n >= 3 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Human-readable name of this level.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Confidence of a whole result set, derived only from its source domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceVerdict {
    /// The derived level.
    pub level: ConfidenceLevel,
    /// Number of distinct normalised hosts among the result URLs.
    pub distinct_domain_count: usize,
}

/// A result reduced to a short readable summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanedSnippet {
    /// Title copied from the result.
    pub title: String,
    /// At most three sentences of cleaned text.
    pub summary: String,
    /// URL copied from the result (may be empty).
    pub source_url: String,
}

/// Output of analysing one result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedResults {
    /// Confidence verdict for the set.
    pub verdict: ConfidenceVerdict,
    /// One snippet per result, in API order.
    pub snippets: Vec<CleanedSnippet>,
}
