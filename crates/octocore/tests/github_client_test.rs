//! Integration tests for the GitHub client and summarizer using a mocked
//! GitHub API (wiremock).
//!
//! These exercise the real request/response path of `GithubClient` with
//! canned GitHub payloads, including the degraded paths where tree or
//! README lookups fail while metadata succeeds.
//!
//! Run with: cargo test --test github_client_test

use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use octocore::github::{GithubClient, RepoRef};
use octocore::{summarize, AppError};

// "Hello World!\n"
const README_BASE64: &str = "SGVsbG8gV29ybGQhCg==";

/// Test harness: one mock GitHub API server plus a client pointed at it.
struct GithubApiTest {
    server: MockServer,
    client: GithubClient,
}

impl GithubApiTest {
    async fn new() -> Self {
        let server = MockServer::start().await;
        let client = GithubClient::new(server.uri(), None).unwrap();
        Self { server, client }
    }

    fn repo() -> RepoRef {
        RepoRef {
            owner: "octocat".to_string(),
            name: "Hello-World".to_string(),
        }
    }

    async fn mount_metadata(&self) {
        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "description": "My first repository on GitHub!",
                "stargazers_count": 1988,
                "forks_count": 1422,
                "open_issues_count": 206,
                "language": "C",
                "default_branch": "master"
            })))
            .mount(&self.server)
            .await;
    }

    async fn mount_tree(&self) {
        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/git/trees/master"))
            .and(query_param("recursive", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tree": [
                    { "path": "README", "type": "blob" },
                    { "path": "src", "type": "tree" },
                    { "path": "src/main.c", "type": "blob" }
                ],
                "truncated": false
            })))
            .mount(&self.server)
            .await;
    }

    async fn mount_readme(&self) {
        Mock::given(method("GET"))
            .and(path("/repos/octocat/Hello-World/readme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "name": "README",
                "content": README_BASE64,
                "encoding": "base64"
            })))
            .mount(&self.server)
            .await;
    }

    async fn mount_failure(&self, endpoint_path: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(endpoint_path))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}

#[tokio::test]
async fn test_full_summary_populates_every_field() {
    let harness = GithubApiTest::new().await;
    harness.mount_metadata().await;
    harness.mount_tree().await;
    harness.mount_readme().await;

    let summary = summarize(&harness.client, &GithubApiTest::repo()).await.unwrap();

    assert_eq!(summary.description.as_deref(), Some("My first repository on GitHub!"));
    assert_eq!(summary.stars, 1988);
    assert_eq!(summary.forks, 1422);
    assert_eq!(summary.open_issues, 206);
    assert_eq!(summary.language.as_deref(), Some("C"));
    assert_eq!(summary.default_branch, "master");
    // Directory entries are filtered out; blob order is preserved.
    assert_eq!(
        summary.file_tree,
        Some(vec!["README".to_string(), "src/main.c".to_string()])
    );
    assert_eq!(summary.readme.as_deref(), Some("Hello World!\n"));
}

#[tokio::test]
async fn test_metadata_404_is_repo_not_found() {
    let harness = GithubApiTest::new().await;
    harness.mount_failure("/repos/octocat/Hello-World", 404).await;

    let err = summarize(&harness.client, &GithubApiTest::repo()).await.unwrap_err();

    match err {
        AppError::RepoNotFound { owner, name } => {
            assert_eq!(owner, "octocat");
            assert_eq!(name, "Hello-World");
        }
        other => panic!("expected RepoNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_metadata_server_error_is_terminal() {
    let harness = GithubApiTest::new().await;
    harness.mount_failure("/repos/octocat/Hello-World", 500).await;

    let err = summarize(&harness.client, &GithubApiTest::repo()).await.unwrap_err();
    assert!(matches!(err, AppError::HttpStatus(status) if status.as_u16() == 500));
}

#[tokio::test]
async fn test_readme_failure_degrades_to_partial_summary() {
    let harness = GithubApiTest::new().await;
    harness.mount_metadata().await;
    harness.mount_tree().await;
    harness.mount_failure("/repos/octocat/Hello-World/readme", 500).await;

    let summary = summarize(&harness.client, &GithubApiTest::repo()).await.unwrap();

    assert_eq!(summary.readme, None);
    // Everything else is still populated.
    assert_eq!(summary.stars, 1988);
    assert!(summary.file_tree.is_some());
}

#[tokio::test]
async fn test_tree_failure_degrades_to_partial_summary() {
    let harness = GithubApiTest::new().await;
    harness.mount_metadata().await;
    harness
        .mount_failure("/repos/octocat/Hello-World/git/trees/master", 500)
        .await;
    harness.mount_readme().await;

    let summary = summarize(&harness.client, &GithubApiTest::repo()).await.unwrap();

    assert_eq!(summary.file_tree, None);
    assert_eq!(summary.readme.as_deref(), Some("Hello World!\n"));
}

#[tokio::test]
async fn test_summarize_is_idempotent() {
    let harness = GithubApiTest::new().await;
    harness.mount_metadata().await;
    harness.mount_tree().await;
    harness.mount_readme().await;

    let repo = GithubApiTest::repo();
    let first = summarize(&harness.client, &repo).await.unwrap();
    let second = summarize(&harness.client, &repo).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_readme_newline_wrapped_base64_decodes() {
    let harness = GithubApiTest::new().await;
    // GitHub wraps base64 content with newlines every 60 characters.
    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "SGVsbG8g\nV29ybGQh\nCg==\n",
            "encoding": "base64"
        })))
        .mount(&harness.server)
        .await;

    let readme = harness.client.readme(&GithubApiTest::repo()).await.unwrap();
    assert_eq!(readme, "Hello World!\n");
}

#[tokio::test]
async fn test_readme_unexpected_encoding_is_decode_error() {
    let harness = GithubApiTest::new().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": "Hello World!",
            "encoding": "utf-8"
        })))
        .mount(&harness.server)
        .await;

    let err = harness.client.readme(&GithubApiTest::repo()).await.unwrap_err();
    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_token_is_sent_as_bearer_auth() {
    let server = MockServer::start().await;
    let client = GithubClient::new(server.uri(), Some("test-token".to_string())).unwrap();

    Mock::given(method("GET"))
        .and(path("/repos/octocat/Hello-World"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "default_branch": "main"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let metadata = client.repo_metadata(&GithubApiTest::repo()).await.unwrap();
    assert_eq!(metadata.default_branch, "main");
}
