//! Gateway configuration with sensible defaults.
//!
//! [`GatewayConfig`] controls where search requests are sent and how long
//! the HTTP client waits. The result count is fixed at [`MAX_RESULTS`] and
//! is deliberately not configurable.

use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Number of results requested from the search API on every call.
pub const MAX_RESULTS: usize = 5;

/// Default endpoint of the Tavily search API.
pub const DEFAULT_BASE_URL: &str = "https://api.tavily.com";

/// Configuration for the search API gateway.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Base URL of the search API. `/search` is appended per request.
    pub base_url: String,
    /// HTTP request timeout in seconds, owned by the HTTP client.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, the crate's own name and version is sent.
    pub user_agent: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout_seconds: 30,
            user_agent: None,
        }
    }
}

impl GatewayConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute `http` or `https` URL
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<(), GatewayError> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| GatewayError::Config(format!("base_url is not a valid URL: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(GatewayError::Config(
                "base_url must use http or https".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(GatewayError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// The full URL of the search endpoint.
    pub fn search_endpoint(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, "https://api.tavily.com");
        assert_eq!(config.timeout_seconds, 30);
        assert!(config.user_agent.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn max_results_is_five() {
        assert_eq!(MAX_RESULTS, 5);
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = GatewayConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn unparseable_base_url_rejected() {
        let config = GatewayConfig {
            base_url: "not a url".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let config = GatewayConfig {
            base_url: "ftp://api.example.com".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn search_endpoint_joins_without_double_slash() {
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:9000/".into(),
            ..Default::default()
        };
        assert_eq!(config.search_endpoint(), "http://127.0.0.1:9000/search");
        assert_eq!(
            GatewayConfig::default().search_endpoint(),
            "https://api.tavily.com/search"
        );
    }

    #[test]
    fn deserializes_partial_table_with_defaults() {
        let config: GatewayConfig =
            serde_json::from_str(r#"{"timeout_seconds": 5}"#).expect("deserialize");
        assert_eq!(config.timeout_seconds, 5);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
