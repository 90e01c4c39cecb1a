use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Optional GitHub API token for authenticated requests
/// Read from GITHUB_TOKEN environment variable. Unauthenticated requests
/// are limited to 60/hour by GitHub; a token raises that to 5000/hour.
pub static GITHUB_TOKEN: Lazy<Option<String>> = Lazy::new(|| {
    env::var("GITHUB_TOKEN").ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
});

/// GitHub REST API base URL
/// Read from GITHUB_API_BASE environment variable
/// Default: https://api.github.com (override for GitHub Enterprise or tests)
pub static GITHUB_API_BASE: Lazy<String> =
    Lazy::new(|| env::var("GITHUB_API_BASE").unwrap_or_else(|_| "https://api.github.com".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: octogram.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "octogram.log".to_string()));

/// User-Agent header for GitHub API requests. GitHub rejects requests
/// without one.
pub const USER_AGENT: &str = concat!("octogram/", env!("CARGO_PKG_VERSION"));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for GitHub API requests (in seconds)
    pub const GITHUB_TIMEOUT_SECS: u64 = 10;

    /// Request timeout for Telegram Bot API requests (in seconds)
    /// Must stay above the long-polling read window, or get_updates
    /// times out mid-poll.
    pub const BOT_TIMEOUT_SECS: u64 = 60;

    /// GitHub request timeout duration
    pub fn github_timeout() -> Duration {
        Duration::from_secs(GITHUB_TIMEOUT_SECS)
    }

    /// Telegram request timeout duration
    pub fn bot_timeout() -> Duration {
        Duration::from_secs(BOT_TIMEOUT_SECS)
    }
}

/// Display limits for rendered summaries
pub mod limits {
    /// Maximum number of file paths rendered in the tree section
    pub const TREE_DISPLAY_LIMIT: usize = 50;

    /// Maximum README characters included in the message
    pub const README_DISPLAY_CHARS: usize = 1000;

    /// Character budget for the whole Telegram message
    pub const MESSAGE_BUDGET_CHARS: usize = 4000;

    /// Telegram-side cache time for successful inline answers (seconds)
    pub const ANSWER_CACHE_SECS: u32 = 300;

    /// Telegram-side cache time for error inline answers (seconds)
    pub const ERROR_CACHE_SECS: u32 = 1;
}
