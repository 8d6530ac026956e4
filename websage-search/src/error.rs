//! Error types for the websage-search crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. No API keys or sensitive data appear in
//! error messages.

use std::fmt;

/// Which comparison topic an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicSlot {
    /// The first (left-hand) comparison topic.
    First,
    /// The second (right-hand) comparison topic.
    Second,
}

impl fmt::Display for TopicSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::First => "first",
            Self::Second => "second",
        })
    }
}

/// Invalid user input, detected before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// No API key was supplied.
    #[error("an API key is required")]
    MissingApiKey,

    /// The single-mode query is empty.
    #[error("a search query is required")]
    EmptyQuery,

    /// One of the comparison topics is empty.
    #[error("the {slot} comparison topic is required")]
    EmptyTopic {
        /// Which topic was empty.
        slot: TopicSlot,
    },
}

/// Failure of a single call to the external search API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, serde::Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum GatewayError {
    /// The request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The HTTP client gave up waiting for the search API.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// The search API rejected the credential.
    #[error("search API rejected the API key (HTTP {0})")]
    Unauthorized(u16),

    /// The account's request quota or rate limit was hit.
    #[error("search API quota exceeded (HTTP {0})")]
    QuotaExceeded(u16),

    /// Any other non-success HTTP status.
    #[error("search API returned HTTP {0}")]
    Status(u16),

    /// The response body did not match the expected schema.
    #[error("malformed search response: {0}")]
    MalformedResponse(String),

    /// The response decoded but carried no `results` field.
    #[error("search response has no results field")]
    MissingResults,

    /// Invalid gateway configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Top-level error for one search request.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The request was rejected before any network call.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// The gateway could not be constructed or a call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

/// Convenience type alias for websage-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
