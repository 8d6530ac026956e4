//! Configuration types for the websage shell.
//!
//! Loaded from `config.toml` in the platform config directory. Every field
//! is optional; a missing default file means all defaults. The API key is
//! never read from or written to this file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use websage_search::{GatewayConfig, SearchDepth};

use crate::error::{Result, ShellError};

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default search behaviour.
    pub search: SearchSection,
    /// Search API endpoint and HTTP settings.
    pub gateway: GatewayConfig,
    /// Output formatting.
    pub output: OutputSection,
}

/// Default search behaviour, overridable per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Depth used when neither `--depth` nor `--advanced` is given.
    pub depth: SearchDepth,
    /// Whether queries ask for recent updates when `--latest` is not given.
    pub latest: bool,
    /// Issue both comparison searches at once.
    pub concurrent_comparison: bool,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text blocks.
    #[default]
    Text,
    /// A single JSON document.
    Json,
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format.
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| ShellError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path, or from [`default_config_path`] if present.
    ///
    /// An explicit path must exist. The default path is optional.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_file`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let path = default_config_path();
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate nested sections.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.gateway
            .validate()
            .map_err(|e| ShellError::Config(format!("[gateway] {e}")))
    }
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/websage/` by default. Override with the
/// `WEBSAGE_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("WEBSAGE_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("websage"))
        .unwrap_or_else(|| PathBuf::from("/tmp/websage-config"))
}

/// The default config file path: `config_dir()/config.toml`.
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}
