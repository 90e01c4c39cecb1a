//! GitHub URL interpretation and REST API client

pub mod client;
pub mod url;

use serde::Serialize;
use std::fmt;

// Re-exports for convenience
pub use client::{GithubClient, RepoMetadata};
pub use url::parse_repo_url;

/// A parsed `(owner, repo)` pair identifying a GitHub repository.
///
/// Produced by [`parse_repo_url`]; invalid strings never yield one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    /// The repository's page on github.com.
    pub fn html_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    /// The owner's profile page on github.com.
    pub fn owner_url(&self) -> String {
        format!("https://github.com/{}", self.owner)
    }
}

impl fmt::Display for RepoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
