use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic error conversion and
/// display formatting.
///
/// A failed tree or README lookup is deliberately NOT an error here: when
/// repository metadata resolves, missing side data degrades the summary
/// instead of failing the request (see [`crate::summary::summarize`]).
#[derive(Error, Debug)]
pub enum AppError {
    /// Input does not look like a GitHub repository URL
    #[error("not a GitHub repository URL: {0}")]
    InvalidUrl(String),

    /// Repository metadata lookup returned 404
    #[error("repository {owner}/{name} not found")]
    RepoNotFound {
        /// Repository owner as parsed from the query
        owner: String,
        /// Repository name as parsed from the query
        name: String,
    },

    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// HTTP/transport errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP status code errors (non-404 failures from the GitHub API)
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Base64 or UTF-8 decoding errors in API payloads
    #[error("response decoding error: {0}")]
    Decode(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
