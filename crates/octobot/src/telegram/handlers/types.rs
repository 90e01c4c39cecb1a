//! Handler types and dependencies

use std::sync::Arc;

use octocore::GithubClient;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub github: Arc<GithubClient>,
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(github: Arc<GithubClient>, bot_username: Option<String>) -> Self {
        Self { github, bot_username }
    }
}
