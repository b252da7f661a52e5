//! Commit-history client for the version-control hosting API.

use reqwest::Client;
use tracing::{debug, instrument};

use docpress_shared::{CommitRecord, DocpressError, Result};

/// Fetch the ordered commit history for `resource_path` at `git_ref`.
///
/// Issues exactly one GET to
/// `<api_root>/repos/<owner>/<repo>/commits?path=<resource_path>&sha=<git_ref>`
/// and decodes the JSON array. The hosting API returns records newest-first;
/// that ordering is preserved untouched because the reducers rely on it.
///
/// No retry and no caching here — failures surface to the caller.
#[instrument(skip_all, fields(owner = %owner, repo = %repo, path = %resource_path))]
pub async fn fetch_commits_history(
    client: &Client,
    api_root: &str,
    owner: &str,
    repo: &str,
    git_ref: &str,
    resource_path: &str,
) -> Result<Vec<CommitRecord>> {
    let url = format!(
        "{}/repos/{owner}/{repo}/commits",
        api_root.trim_end_matches('/')
    );

    let response = client
        .get(&url)
        .query(&[("path", resource_path), ("sha", git_ref)])
        .send()
        .await
        .map_err(|e| DocpressError::fetch(&url, e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocpressError::fetch_status(&url, status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| DocpressError::fetch(&url, format!("failed to read body: {e}")))?;

    let history: Vec<CommitRecord> = serde_json::from_str(&body)
        .map_err(|e| DocpressError::parse(format!("commit history from {url}: {e}")))?;

    debug!(records = history.len(), "commit history fetched");
    Ok(history)
}
