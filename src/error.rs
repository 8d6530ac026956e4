//! Error types for the websage shell.

use websage_search::{InputError, SearchError};

/// Top-level error type for the command-line shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Invalid user input, reported before any search is made.
    #[error("{0}")]
    Input(#[from] InputError),

    /// The search core failed outside of a single topic.
    #[error("search error: {0}")]
    Search(String),

    /// Output could not be rendered.
    #[error("render error: {0}")]
    Render(String),

    /// The API key prompt could not read from the terminal.
    #[error("prompt error: {0}")]
    Prompt(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for ShellError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

impl From<SearchError> for ShellError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Input(input) => Self::Input(input),
            SearchError::Gateway(gateway) => Self::Search(gateway.to_string()),
        }
    }
}

impl ShellError {
    /// Process exit code for this error: 2 for bad input, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 2,
            _ => 1,
        }
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ShellError>;
