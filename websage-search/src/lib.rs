//! # websage-search
//!
//! The result-shaping core of websage: turns user input into search API
//! queries, calls the API, and reduces what comes back to short readable
//! snippets plus a trust verdict.
//!
//! ## Design
//!
//! - [`query`] builds the literal query string for a topic
//! - [`gateway`] defines the search API boundary; [`tavily`] implements it
//! - [`analyzer`] cleans snippet text and scores confidence by distinct source domains
//! - [`pipeline`] validates an immutable [`SearchRequest`] and drives one call per topic
//!
//! ## Behaviour
//!
//! - Exactly one outbound call per topic, at most 5 results each
//! - No retries, no caching, no deduplication of identical queries
//! - A failed call is reported against its own topic; an empty result set is
//!   a valid, low-confidence answer
//! - The API key is never logged or included in error messages

pub mod analyzer;
pub mod config;
pub mod error;
pub mod gateway;
pub mod http;
pub mod pipeline;
pub mod query;
pub mod tavily;
pub mod types;

pub use analyzer::{analyze, clean_text, source_confidence, HeuristicCleaner, SnippetCleaner};
pub use config::{GatewayConfig, MAX_RESULTS};
pub use error::{GatewayError, InputError, Result, SearchError, TopicSlot};
pub use gateway::SearchGateway;
pub use pipeline::{
    execute, execute_with, run, PipelineOptions, SearchMode, SearchOutcome, SearchRequest,
    TopicOutcome,
};
pub use query::build_query;
pub use tavily::TavilyGateway;
pub use types::{
    AnalyzedResults, CleanedSnippet, ConfidenceLevel, ConfidenceVerdict, SearchDepth,
    SearchResult,
};
