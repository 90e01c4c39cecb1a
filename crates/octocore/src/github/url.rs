//! GitHub repository URL parser
//!
//! Extracts an `(owner, repo)` pair from free-form inline query text.
//! Accepted shapes:
//! - `https://github.com/owner/repo`
//! - `http://github.com/owner/repo/` (trailing slash)
//! - `https://github.com/owner/repo.git`
//! - `https://github.com/owner/repo/tree/main/src` (extra path segments)
//! - query strings and fragments after the repo name

use once_cell::sync::Lazy;
use regex::Regex;

use super::RepoRef;
use crate::error::{AppError, AppResult};

/// Anchored regex for repository URLs. Owner names are alphanumeric plus
/// hyphens; repo names additionally allow dots and underscores. Anything
/// after the repo name (path, query, fragment) is ignored.
static REPO_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(?:www\.)?github\.com/([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+?)(?:\.git)?(?:[/?#].*)?$")
        .unwrap()
});

/// Parse a GitHub repository URL into a [`RepoRef`].
///
/// Pure and side-effect-free. Leading/trailing whitespace is tolerated
/// (inline query text arrives untrimmed). A `.git` suffix on the repo
/// name is stripped.
///
/// # Errors
/// Returns [`AppError::InvalidUrl`] for anything that is not a GitHub
/// repository URL: other hosts, missing owner/repo segments, or plain
/// text.
///
/// # Examples
///
/// ```
/// use octocore::github::parse_repo_url;
///
/// let repo = parse_repo_url("https://github.com/octocat/Hello-World").unwrap();
/// assert_eq!(repo.owner, "octocat");
/// assert_eq!(repo.name, "Hello-World");
///
/// assert!(parse_repo_url("https://gitlab.com/octocat/Hello-World").is_err());
/// ```
pub fn parse_repo_url(text: &str) -> AppResult<RepoRef> {
    let text = text.trim();
    let caps = REPO_URL_REGEX
        .captures(text)
        .ok_or_else(|| AppError::InvalidUrl(text.to_string()))?;

    Ok(RepoRef {
        owner: caps[1].to_string(),
        name: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_url() {
        let repo = parse_repo_url("https://github.com/octocat/Hello-World").unwrap();
        assert_eq!(repo.owner, "octocat");
        assert_eq!(repo.name, "Hello-World");
    }

    #[test]
    fn test_parse_http_and_www() {
        let repo = parse_repo_url("http://www.github.com/rust-lang/rust").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_trailing_slash() {
        let repo = parse_repo_url("https://github.com/octocat/Hello-World/").unwrap();
        assert_eq!(repo.name, "Hello-World");
    }

    #[test]
    fn test_parse_git_suffix() {
        let repo = parse_repo_url("https://github.com/octocat/Hello-World.git").unwrap();
        assert_eq!(repo.name, "Hello-World");
    }

    #[test]
    fn test_parse_deep_path() {
        let repo = parse_repo_url("https://github.com/rust-lang/rust/tree/master/library/std").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.name, "rust");
    }

    #[test]
    fn test_parse_query_and_fragment() {
        let repo = parse_repo_url("https://github.com/octocat/Hello-World?tab=readme-ov-file#readme").unwrap();
        assert_eq!(repo.name, "Hello-World");
    }

    #[test]
    fn test_parse_dotted_repo_name() {
        let repo = parse_repo_url("https://github.com/jquery/jquery.com").unwrap();
        assert_eq!(repo.name, "jquery.com");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let repo = parse_repo_url("  https://github.com/octocat/Hello-World \n").unwrap();
        assert_eq!(repo.owner, "octocat");
    }

    #[test]
    fn test_rejects_other_hosts() {
        assert!(parse_repo_url("https://gitlab.com/octocat/Hello-World").is_err());
        assert!(parse_repo_url("https://github.com.evil.example/octocat/repo").is_err());
    }

    #[test]
    fn test_rejects_missing_repo() {
        assert!(parse_repo_url("https://github.com/octocat").is_err());
        assert!(parse_repo_url("https://github.com/").is_err());
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(parse_repo_url("hello world").is_err());
        assert!(parse_repo_url("").is_err());
    }

    #[test]
    fn test_invalid_input_is_echoed() {
        match parse_repo_url("not a url") {
            Err(AppError::InvalidUrl(input)) => assert_eq!(input, "not a url"),
            other => panic!("expected InvalidUrl, got {:?}", other),
        }
    }
}
