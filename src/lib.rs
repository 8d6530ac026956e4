//! websage: search the web, compare topics, and judge how well-sourced the
//! answers are.
//!
//! This crate is the terminal shell around [`websage_search`]:
//!
//! - **Config**: optional `config.toml` with search, gateway and output defaults
//! - **Shell**: turns command-line input into an immutable search request
//! - **Render**: prints outcomes as text blocks or a JSON document
//!
//! All retrieval, cleaning and scoring lives in `websage-search`.

pub mod config;
pub mod error;
pub mod render;
pub mod shell;

pub use config::{AppConfig, OutputFormat};
pub use error::{Result, ShellError};
pub use shell::{ShellCommand, ShellInput};
