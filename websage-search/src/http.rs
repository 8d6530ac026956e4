//! Shared HTTP client construction for search API requests.
//!
//! Provides a configured [`reqwest::Client`] with the gateway timeout and
//! a User-Agent identifying this crate unless the config overrides it.

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use std::time::Duration;

/// User-Agent sent when the config does not specify one.
pub const DEFAULT_USER_AGENT: &str = concat!("websage-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the search API.
///
/// The client has:
/// - Timeout from config
/// - Custom User-Agent if configured, [`DEFAULT_USER_AGENT`] otherwise
/// - A small redirect limit
///
/// # Errors
///
/// Returns [`GatewayError::Http`] if the client cannot be constructed.
pub fn build_client(config: &GatewayConfig) -> Result<reqwest::Client, GatewayError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(3))
        .build()
        .map_err(|e| GatewayError::Http(format!("failed to build HTTP client: {e}")))
}

/// Map a reqwest transport error to a [`GatewayError`].
///
/// The error is rendered without its URL so nothing request-specific leaks
/// into user-facing messages.
pub fn map_transport_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout(err.without_url().to_string())
    } else {
        GatewayError::Http(err.without_url().to_string())
    }
}
