//! Octocore - core library for the Octogram Telegram bot
//!
//! This library provides everything the bot needs that is not Telegram:
//! GitHub URL interpretation, the GitHub REST client, per-request summary
//! assembly, and display rendering.
//!
//! # Module Structure
//!
//! - `config`: environment-backed configuration statics and limits
//! - `error`: centralized error types
//! - `github`: URL interpreter and REST API client
//! - `logging`: logger initialization and startup diagnostics
//! - `render`: pure formatting of summaries into Telegram HTML
//! - `summary`: per-request assembly of repository summaries

pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod render;
pub mod summary;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use github::{parse_repo_url, GithubClient, RepoRef};
pub use logging::init_logger;
pub use summary::{summarize, RepoSummary};
