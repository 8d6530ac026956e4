//! Glue between command-line input and the search core.
//!
//! Turns parsed arguments plus [`AppConfig`] defaults into an immutable
//! [`SearchRequest`], runs it, and renders the outcome.

use websage_search::{PipelineOptions, SearchDepth, SearchOutcome, SearchRequest};

use crate::config::{AppConfig, OutputFormat};
use crate::error::{Result, ShellError};
use crate::render::{render_json, render_text};

/// What the user asked the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Search for one query.
    Search {
        /// The query as typed.
        query: String,
    },
    /// Compare two topics.
    Compare {
        /// First topic.
        first: String,
        /// Second topic.
        second: String,
    },
}

/// Per-invocation input collected by the CLI.
#[derive(Clone)]
pub struct ShellInput {
    /// The API key as entered.
    pub api_key: String,
    /// Requested action.
    pub command: ShellCommand,
    /// Depth override; `None` keeps the configured depth.
    pub depth: Option<SearchDepth>,
    /// Latest-mode override; `None` keeps the configured setting.
    pub latest: Option<bool>,
    /// Force JSON output regardless of config.
    pub json: bool,
}

impl std::fmt::Debug for ShellInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShellInput")
            .field("api_key", &"<redacted>")
            .field("command", &self.command)
            .field("depth", &self.depth)
            .field("latest", &self.latest)
            .field("json", &self.json)
            .finish()
    }
}

impl ShellInput {
    /// Build the search request, letting flags override config defaults.
    pub fn to_request(&self, config: &AppConfig) -> SearchRequest {
        let request = match &self.command {
            ShellCommand::Search { query } => SearchRequest::single(&self.api_key, query),
            ShellCommand::Compare { first, second } => {
                SearchRequest::compare(&self.api_key, first, second)
            }
        };
        request
            .with_depth(self.depth.unwrap_or(config.search.depth))
            .with_latest(self.latest.unwrap_or(config.search.latest))
    }

    /// The output format after applying `--json`.
    pub fn output_format(&self, config: &AppConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output.format
        }
    }
}

/// Render an outcome in the requested format.
///
/// # Errors
///
/// Returns [`ShellError::Render`] if formatting or JSON serialization fails.
pub fn render(outcome: &SearchOutcome, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            render_text(outcome).map_err(|e| ShellError::Render(e.to_string()))
        }
        OutputFormat::Json => serde_json::to_string_pretty(&render_json(outcome))
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|e| ShellError::Render(e.to_string())),
    }
}

/// Run one invocation against the Tavily API and return the rendered output.
///
/// Per-topic search failures are part of the rendered output, not errors.
///
/// # Errors
///
/// Returns [`ShellError::Input`] for invalid input (no network call is
/// made) and [`ShellError::Search`] if the gateway cannot be set up.
pub async fn run(input: &ShellInput, config: &AppConfig) -> Result<String> {
    let request = input.to_request(config);
    let options = PipelineOptions {
        concurrent_comparison: config.search.concurrent_comparison,
    };

    let mode = match input.command {
        ShellCommand::Search { .. } => "search",
        ShellCommand::Compare { .. } => "compare",
    };
    tracing::info!(
        mode,
        depth = request.depth().label(),
        latest = request.latest(),
        "running search"
    );

    let outcome = websage_search::run(&request, &config.gateway, options).await?;
    if outcome.has_failures() {
        tracing::warn!("one or more searches failed");
    }
    render(&outcome, input.output_format(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use websage_search::{InputError, SearchMode};

    fn input(command: ShellCommand) -> ShellInput {
        ShellInput {
            api_key: "tvly-key".into(),
            command,
            depth: None,
            latest: None,
            json: false,
        }
    }

    #[test]
    fn config_defaults_apply_without_flags() {
        let mut config = AppConfig::default();
        config.search.depth = SearchDepth::Advanced;
        config.search.latest = true;

        let request = input(ShellCommand::Search {
            query: "rust".into(),
        })
        .to_request(&config);
        assert_eq!(request.depth(), SearchDepth::Advanced);
        assert!(request.latest());
        assert_eq!(
            request.mode(),
            &SearchMode::Single {
                query: "rust".into()
            }
        );
    }

    #[test]
    fn flags_override_config() {
        let config = AppConfig::default();
        let mut shell_input = input(ShellCommand::Compare {
            first: "cats".into(),
            second: "dogs".into(),
        });
        shell_input.depth = Some(SearchDepth::Advanced);
        shell_input.latest = Some(true);
        shell_input.json = true;

        let request = shell_input.to_request(&config);
        assert_eq!(request.depth(), SearchDepth::Advanced);
        assert!(request.latest());
        assert_eq!(shell_input.output_format(&config), OutputFormat::Json);
    }

    #[test]
    fn flags_can_switch_config_settings_off() {
        let mut config = AppConfig::default();
        config.search.depth = SearchDepth::Advanced;
        config.search.latest = true;

        let mut shell_input = input(ShellCommand::Search {
            query: "rust".into(),
        });
        shell_input.depth = Some(SearchDepth::Basic);
        shell_input.latest = Some(false);

        let request = shell_input.to_request(&config);
        assert_eq!(request.depth(), SearchDepth::Basic);
        assert!(!request.latest());
    }

    #[test]
    fn debug_redacts_api_key() {
        let debug = format!(
            "{:?}",
            input(ShellCommand::Search {
                query: "rust".into()
            })
        );
        assert!(!debug.contains("tvly-key"));
    }

    #[tokio::test]
    async fn missing_key_is_an_input_error() {
        let mut shell_input = input(ShellCommand::Search {
            query: "rust".into(),
        });
        shell_input.api_key.clear();

        let err = run(&shell_input, &AppConfig::default()).await.unwrap_err();
        assert!(matches!(err, ShellError::Input(InputError::MissingApiKey)));
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn empty_topic_is_an_input_error() {
        let shell_input = input(ShellCommand::Compare {
            first: "cats".into(),
            second: String::new(),
        });
        let err = run(&shell_input, &AppConfig::default()).await.unwrap_err();
        assert!(err.to_string().contains("second"));
    }
}
