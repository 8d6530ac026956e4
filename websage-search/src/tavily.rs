//! Tavily search API gateway.
//!
//! Sends `POST {base_url}/search` with a JSON body and a bearer credential,
//! then decodes the response through a typed schema. Anything that does not
//! match the schema is a [`GatewayError::MalformedResponse`] rather than a
//! silently defaulted value.

use crate::config::{GatewayConfig, MAX_RESULTS};
use crate::error::GatewayError;
use crate::gateway::SearchGateway;
use crate::http;
use crate::types::{SearchDepth, SearchResult};
use serde::{Deserialize, Serialize};

/// Request body of the Tavily search endpoint.
#[derive(Debug, Serialize)]
struct SearchRequestBody<'a> {
    query: &'a str,
    search_depth: SearchDepth,
    max_results: usize,
}

/// Top-level response schema. Only `results` is read.
#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    results: Option<Vec<ResultItem>>,
}

/// One entry of `results`. `title` and `content` are required.
#[derive(Debug, Deserialize)]
struct ResultItem {
    title: String,
    content: String,
    #[serde(default)]
    url: Option<String>,
}

impl From<ResultItem> for SearchResult {
    fn from(item: ResultItem) -> Self {
        Self {
            title: item.title,
            content: item.content,
            url: item.url.unwrap_or_default(),
        }
    }
}

/// Gateway to the Tavily search API.
///
/// Holds the caller's API key for the lifetime of one request cycle. The key
/// is only ever written into the `Authorization` header.
pub struct TavilyGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl std::fmt::Debug for TavilyGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TavilyGateway")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl TavilyGateway {
    /// Create a gateway for `api_key` using `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if the config is invalid or the key is
    /// blank, or [`GatewayError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: &str, config: &GatewayConfig) -> Result<Self, GatewayError> {
        config.validate()?;
        if api_key.trim().is_empty() {
            return Err(GatewayError::Config("API key must not be empty".into()));
        }
        Ok(Self {
            client: http::build_client(config)?,
            endpoint: config.search_endpoint(),
            api_key: api_key.trim().to_owned(),
        })
    }
}

impl SearchGateway for TavilyGateway {
    async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
    ) -> Result<Vec<SearchResult>, GatewayError> {
        tracing::trace!(query, %depth, "Tavily search");

        let body = SearchRequestBody {
            query,
            search_depth: depth,
            max_results: MAX_RESULTS,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(http::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let err = map_status(status.as_u16());
            tracing::warn!(status = status.as_u16(), error = %err, "Tavily returned an error status");
            return Err(err);
        }

        let text = response.text().await.map_err(http::map_transport_error)?;
        tracing::trace!(bytes = text.len(), "Tavily response received");

        parse_response(&text)
    }

    fn name(&self) -> &'static str {
        "tavily"
    }
}

/// Map a non-success HTTP status to a [`GatewayError`].
///
/// Tavily uses 432 and 433 for plan and pay-as-you-go limits on top of the
/// usual 429.
fn map_status(code: u16) -> GatewayError {
    match code {
        401 | 403 => GatewayError::Unauthorized(code),
        429 | 432 | 433 => GatewayError::QuotaExceeded(code),
        _ => GatewayError::Status(code),
    }
}

/// Decode a Tavily response body into result records.
///
/// # Errors
///
/// Returns [`GatewayError::MalformedResponse`] if the body is not JSON or a
/// result item lacks a required field, and [`GatewayError::MissingResults`]
/// if `results` is absent or `null`.
pub fn parse_response(body: &str) -> Result<Vec<SearchResult>, GatewayError> {
    let decoded: SearchResponseBody = serde_json::from_str(body)
        .map_err(|e| GatewayError::MalformedResponse(e.to_string()))?;
    let items = decoded.results.ok_or(GatewayError::MissingResults)?;
    Ok(items.into_iter().map(SearchResult::from).collect())
}
