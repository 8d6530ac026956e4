//! CLI binary for websage.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use websage::{AppConfig, ShellCommand, ShellError, ShellInput};
use websage_search::SearchDepth;

/// websage: search the web and compare topics with source confidence.
#[derive(Parser)]
#[command(name = "websage", version, about)]
struct Cli {
    /// Tavily API key. Prompted for on the terminal when omitted.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Search depth: `basic` (shown as Normal) or `advanced`.
    #[arg(long, global = true, value_name = "DEPTH")]
    depth: Option<SearchDepth>,

    /// Shorthand for `--depth advanced`.
    #[arg(long, global = true, conflicts_with = "depth")]
    advanced: bool,

    /// Ask for updates from the last 6 months. `--latest=false` turns off
    /// a `latest = true` config setting.
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    latest: Option<bool>,

    /// Print a JSON document instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search the web for one query.
    Search {
        /// What to search for.
        query: String,
    },

    /// Compare two topics side by side.
    Compare {
        /// First topic.
        first: String,
        /// Second topic.
        second: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Diagnostics go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("websage=info,websage_search=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "websage failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<String, ShellError> {
    let config = AppConfig::load(cli.config.as_deref())?;

    let api_key = match cli.api_key {
        Some(key) => key,
        None => prompt_api_key()?,
    };

    let command = match cli.command {
        Command::Search { query } => ShellCommand::Search { query },
        Command::Compare { first, second } => ShellCommand::Compare { first, second },
    };

    let input = ShellInput {
        api_key,
        command,
        depth: if cli.advanced {
            Some(SearchDepth::Advanced)
        } else {
            cli.depth
        },
        latest: cli.latest,
        json: cli.json,
    };

    websage::shell::run(&input, &config).await
}

/// Ask for the API key on the terminal without echoing it.
///
/// An empty entry yields an empty key, which the core rejects as missing.
fn prompt_api_key() -> Result<String, ShellError> {
    let key = dialoguer::Password::new()
        .with_prompt("Tavily API key")
        .allow_empty_password(true)
        .interact()?;
    Ok(key.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn depth_and_latest_default_to_config() {
        let cli = parse(&["websage", "search", "rust"]);
        assert_eq!(cli.depth, None);
        assert!(!cli.advanced);
        assert_eq!(cli.latest, None);
    }

    #[test]
    fn depth_accepts_wire_values_and_ui_labels() {
        let cli = parse(&["websage", "search", "rust", "--depth", "Normal"]);
        assert_eq!(cli.depth, Some(SearchDepth::Basic));
        let cli = parse(&["websage", "--depth", "advanced", "search", "rust"]);
        assert_eq!(cli.depth, Some(SearchDepth::Advanced));
        assert!(Cli::try_parse_from(["websage", "search", "rust", "--depth", "deep"]).is_err());
    }

    #[test]
    fn advanced_conflicts_with_explicit_depth() {
        assert!(Cli::try_parse_from([
            "websage", "search", "rust", "--advanced", "--depth", "basic"
        ])
        .is_err());
    }

    #[test]
    fn latest_can_be_switched_on_or_off() {
        let cli = parse(&["websage", "search", "rust", "--latest"]);
        assert_eq!(cli.latest, Some(true));
        let cli = parse(&["websage", "compare", "a", "b", "--latest=false"]);
        assert_eq!(cli.latest, Some(false));
    }
}
