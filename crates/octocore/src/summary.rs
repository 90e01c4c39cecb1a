//! Per-request assembly of repository summaries.
//!
//! One summary per inline query; nothing is cached or persisted. The
//! metadata call is authoritative: if it fails, the request fails. Tree
//! and README are side data and degrade to `None` when their lookups
//! fail, so the user still gets a summary.

use serde::Serialize;

use crate::error::AppResult;
use crate::github::{GithubClient, RepoRef};

/// Aggregated, display-ready data for one repository.
///
/// `file_tree` and `readme` are `None` when their lookups failed while
/// metadata succeeded (partial data). Discarded after the response is
/// sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSummary {
    pub repo: RepoRef,
    pub description: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub default_branch: String,
    /// All blob paths of the default branch, in API order.
    pub file_tree: Option<Vec<String>>,
    /// Decoded README text, untruncated.
    pub readme: Option<String>,
}

/// Fetch and assemble a [`RepoSummary`] for `repo`.
///
/// Metadata is fetched first (the tree lookup needs its default branch);
/// the tree and README lookups then run concurrently. Repeated calls
/// against an unchanged repository return identical content.
///
/// # Errors
/// Fails only when the metadata lookup fails: [`crate::AppError::RepoNotFound`]
/// on 404, transport/status errors otherwise.
pub async fn summarize(client: &GithubClient, repo: &RepoRef) -> AppResult<RepoSummary> {
    let metadata = client.repo_metadata(repo).await?;

    let (tree, readme) = tokio::join!(client.file_tree(repo, &metadata.default_branch), client.readme(repo));

    let file_tree = match tree {
        Ok(paths) => Some(paths),
        Err(e) => {
            log::warn!("Failed to fetch file tree for {}: {}", repo, e);
            None
        }
    };

    let readme = match readme {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Failed to fetch README for {}: {}", repo, e);
            None
        }
    };

    Ok(RepoSummary {
        repo: repo.clone(),
        description: metadata.description,
        stars: metadata.stars,
        forks: metadata.forks,
        open_issues: metadata.open_issues,
        language: metadata.language,
        default_branch: metadata.default_branch,
        file_tree,
        readme,
    })
}
