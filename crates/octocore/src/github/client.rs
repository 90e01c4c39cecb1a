//! GitHub REST API client.
//!
//! Three read-only endpoints: repository metadata, the recursive tree of a
//! branch, and the README. No retries; a failed call is reported once.
//! Rate limit without a token: 60 req/h per IP.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use reqwest::header;
use reqwest::StatusCode;
use serde::Deserialize;

use super::RepoRef;
use crate::config;
use crate::error::{AppError, AppResult};

/// Repository metadata from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMetadata {
    pub description: Option<String>,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(rename = "forks_count", default)]
    pub forks: u64,
    #[serde(rename = "open_issues_count", default)]
    pub open_issues: u64,
    pub language: Option<String>,
    #[serde(default = "default_branch_fallback")]
    pub default_branch: String,
}

fn default_branch_fallback() -> String {
    "main".to_string()
}

#[derive(Deserialize)]
struct TreeResponse {
    #[serde(default)]
    tree: Vec<TreeEntry>,
}

#[derive(Deserialize)]
struct TreeEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct ReadmeResponse {
    #[serde(default)]
    content: String,
    #[serde(default)]
    encoding: String,
}

/// Client for the GitHub REST API.
///
/// Holds a single `reqwest::Client` so connections are reused across the
/// calls of one request. The base URL is overridable via `GITHUB_API_BASE`
/// (GitHub Enterprise, mock servers in tests).
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl GithubClient {
    /// Create a client from `GITHUB_API_BASE` and `GITHUB_TOKEN`.
    pub fn from_env() -> AppResult<Self> {
        Self::new(config::GITHUB_API_BASE.clone(), config::GITHUB_TOKEN.clone())
    }

    /// Create a client against an explicit base URL with an optional
    /// bearer token.
    pub fn new(base_url: String, token: Option<String>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config::network::github_timeout())
            .user_agent(config::USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .header(header::ACCEPT, "application/vnd.github+json");

        if let Some(ref token) = self.token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    /// Fetch repository metadata.
    ///
    /// # Errors
    /// [`AppError::RepoNotFound`] on 404, [`AppError::HttpStatus`] on any
    /// other non-success status.
    pub async fn repo_metadata(&self, repo: &RepoRef) -> AppResult<RepoMetadata> {
        let response = self.get(&format!("/repos/{}/{}", repo.owner, repo.name)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(AppError::RepoNotFound {
                owner: repo.owner.clone(),
                name: repo.name.clone(),
            }),
            status if !status.is_success() => Err(AppError::HttpStatus(status)),
            _ => Ok(response.json().await?),
        }
    }

    /// Fetch the recursive file tree of a branch, returning blob paths in
    /// API response order. Directory entries are dropped; the API's
    /// `truncated` flag is ignored.
    pub async fn file_tree(&self, repo: &RepoRef, branch: &str) -> AppResult<Vec<String>> {
        let response = self
            .get(&format!(
                "/repos/{}/{}/git/trees/{}?recursive=1",
                repo.owner, repo.name, branch
            ))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status));
        }

        let data: TreeResponse = response.json().await?;
        Ok(data
            .tree
            .into_iter()
            .filter(|entry| entry.kind == "blob")
            .map(|entry| entry.path)
            .collect())
    }

    /// Fetch and decode the repository README.
    ///
    /// Uses the contents API, which resolves the actual README filename
    /// and returns its body base64-encoded in newline-wrapped lines.
    pub async fn readme(&self, repo: &RepoRef) -> AppResult<String> {
        let response = self.get(&format!("/repos/{}/{}/readme", repo.owner, repo.name)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::HttpStatus(status));
        }

        let data: ReadmeResponse = response.json().await?;
        if data.encoding != "base64" {
            return Err(AppError::Decode(format!("unexpected README encoding: {}", data.encoding)));
        }

        let raw: String = data.content.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes = BASE64
            .decode(raw)
            .map_err(|e| AppError::Decode(format!("README base64: {}", e)))?;

        String::from_utf8(bytes).map_err(|e| AppError::Decode(format!("README is not UTF-8: {}", e)))
    }
}
