//! Request pipeline: validate, build queries, search, analyse.
//!
//! A [`SearchRequest`] is an immutable snapshot of everything the user
//! entered. [`execute`] validates it before touching the network, then runs
//! one gateway call per topic and analyses each result set independently.
//! A failed call is recorded against its own topic and never hides the
//! other topic's outcome.

use std::fmt;

use crate::analyzer::{analyze, HeuristicCleaner, SnippetCleaner};
use crate::config::GatewayConfig;
use crate::error::{GatewayError, InputError, Result, TopicSlot};
use crate::gateway::SearchGateway;
use crate::query::build_query;
use crate::tavily::TavilyGateway;
use crate::types::{AnalyzedResults, SearchDepth};

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMode {
    /// One free-form query.
    Single {
        /// The query as entered.
        query: String,
    },
    /// Two topics searched side by side.
    Compare {
        /// Left-hand topic.
        first: String,
        /// Right-hand topic.
        second: String,
    },
}

/// Immutable description of one user-initiated search.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchRequest {
    api_key: String,
    mode: SearchMode,
    depth: SearchDepth,
    latest: bool,
}

impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("api_key", &"<redacted>")
            .field("mode", &self.mode)
            .field("depth", &self.depth)
            .field("latest", &self.latest)
            .finish()
    }
}

impl SearchRequest {
    /// A single-query request at [`SearchDepth::Basic`] without latest mode.
    pub fn single(api_key: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mode: SearchMode::Single {
                query: query.into(),
            },
            depth: SearchDepth::default(),
            latest: false,
        }
    }

    /// A comparison request at [`SearchDepth::Basic`] without latest mode.
    pub fn compare(
        api_key: impl Into<String>,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            mode: SearchMode::Compare {
                first: first.into(),
                second: second.into(),
            },
            depth: SearchDepth::default(),
            latest: false,
        }
    }

    /// Set the search depth.
    pub fn with_depth(mut self, depth: SearchDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Enable or disable "latest updates" queries.
    pub fn with_latest(mut self, latest: bool) -> Self {
        self.latest = latest;
        self
    }

    /// The user-supplied API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The requested mode.
    pub fn mode(&self) -> &SearchMode {
        &self.mode
    }

    /// The requested depth.
    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    /// Whether latest mode is on.
    pub fn latest(&self) -> bool {
        self.latest
    }

    /// Check the request before any network call.
    ///
    /// The API key is checked first, then the query or topics. Blank
    /// (whitespace-only) values count as missing.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] found.
    pub fn validate(&self) -> std::result::Result<(), InputError> {
        if is_blank(&self.api_key) {
            return Err(InputError::MissingApiKey);
        }
        match &self.mode {
            SearchMode::Single { query } if is_blank(query) => Err(InputError::EmptyQuery),
            SearchMode::Compare { first, .. } if is_blank(first) => Err(InputError::EmptyTopic {
                slot: TopicSlot::First,
            }),
            SearchMode::Compare { second, .. } if is_blank(second) => {
                Err(InputError::EmptyTopic {
                    slot: TopicSlot::Second,
                })
            }
            _ => Ok(()),
        }
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Result of searching and analysing one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOutcome {
    /// The topic or query as the user entered it, for display.
    pub label: String,
    /// The literal query sent to the gateway.
    pub query: String,
    /// Analysed results, or the gateway failure for this topic.
    pub result: std::result::Result<AnalyzedResults, GatewayError>,
}

impl TopicOutcome {
    /// Returns `true` if this topic's search call failed.
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }
}

/// Everything the renderer needs for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Single-query mode.
    Single(TopicOutcome),
    /// Comparison mode, in the order the topics were entered.
    Comparison {
        /// Outcome for the first topic.
        first: TopicOutcome,
        /// Outcome for the second topic.
        second: TopicOutcome,
    },
}

impl SearchOutcome {
    /// All topic outcomes in display order.
    pub fn topics(&self) -> Vec<&TopicOutcome> {
        match self {
            Self::Single(topic) => vec![topic],
            Self::Comparison { first, second } => vec![first, second],
        }
    }

    /// Returns `true` if any topic's search call failed.
    pub fn has_failures(&self) -> bool {
        self.topics().iter().any(|t| t.is_failure())
    }
}

/// Tuning knobs for [`execute_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Issue both comparison searches at once instead of one after another.
    /// Output order and failure attribution are identical either way.
    pub concurrent_comparison: bool,
}

/// Run a request against `gateway` with the default cleaner and options.
///
/// # Errors
///
/// Returns an [`InputError`] if the request is invalid; the gateway is not
/// called in that case. Gateway failures are reported inside the outcome.
pub async fn execute<G: SearchGateway>(
    request: &SearchRequest,
    gateway: &G,
) -> std::result::Result<SearchOutcome, InputError> {
    execute_with(request, gateway, &HeuristicCleaner, PipelineOptions::default()).await
}

/// Run a request against `gateway` with an explicit cleaner and options.
///
/// # Errors
///
/// Same as [`execute`].
pub async fn execute_with<G: SearchGateway>(
    request: &SearchRequest,
    gateway: &G,
    cleaner: &dyn SnippetCleaner,
    options: PipelineOptions,
) -> std::result::Result<SearchOutcome, InputError> {
    request.validate()?;

    let depth = request.depth();
    let latest = request.latest();

    match request.mode() {
        SearchMode::Single { query } => {
            let built = build_query(query, latest, false);
            let outcome = search_topic(gateway, query, built, depth, cleaner).await;
            Ok(SearchOutcome::Single(outcome))
        }
        SearchMode::Compare { first, second } => {
            let first_query = build_query(first, latest, true);
            let second_query = build_query(second, latest, true);

            let (first, second) = if options.concurrent_comparison {
                futures::future::join(
                    search_topic(gateway, first, first_query, depth, cleaner),
                    search_topic(gateway, second, second_query, depth, cleaner),
                )
                .await
            } else {
                let a = search_topic(gateway, first, first_query, depth, cleaner).await;
                let b = search_topic(gateway, second, second_query, depth, cleaner).await;
                (a, b)
            };

            Ok(SearchOutcome::Comparison { first, second })
        }
    }
}

/// Validate, connect to Tavily with the request's key, and execute.
///
/// # Errors
///
/// Returns [`SearchError::Input`](crate::SearchError::Input) for invalid
/// requests and [`SearchError::Gateway`](crate::SearchError::Gateway) if the
/// gateway cannot be constructed from `config`.
pub async fn run(
    request: &SearchRequest,
    config: &GatewayConfig,
    options: PipelineOptions,
) -> Result<SearchOutcome> {
    request.validate()?;
    let gateway = TavilyGateway::new(request.api_key(), config)?;
    Ok(execute_with(request, &gateway, &HeuristicCleaner, options).await?)
}

/// Search one topic and analyse its results.
async fn search_topic<G: SearchGateway>(
    gateway: &G,
    label: &str,
    query: String,
    depth: SearchDepth,
    cleaner: &dyn SnippetCleaner,
) -> TopicOutcome {
    let result = match gateway.search(&query, depth).await {
        Ok(results) => {
            let analyzed = analyze(&results, cleaner);
            tracing::debug!(
                gateway = gateway.name(),
                count = results.len(),
                level = %analyzed.verdict.level,
                domains = analyzed.verdict.distinct_domain_count,
                "topic analysed"
            );
            Ok(analyzed)
        }
        Err(err) => {
            tracing::warn!(gateway = gateway.name(), topic = label, error = %err, "search call failed");
            Err(err)
        }
    };

    TopicOutcome {
        label: label.to_owned(),
        query,
        result,
    }
}
