//! Navigation document loader.

use reqwest::Client;
use tracing::{debug, instrument};

use docpress_markdown::FragmentRenderer;
use docpress_shared::{DocpressError, FetchConfig, NavPayload, NavResource, Result};

/// File name of the navigation document at the repository root.
const NAV_DOCUMENT: &str = "SUMMARY.md";

/// Fetch the repository's navigation document and render it to fragments.
///
/// GETs `<raw_root>/<owner>/<repo>/<git_ref>/SUMMARY.md`, renders the body
/// with the injected renderer, and returns the raw text, the fragment list,
/// and the joined HTML. A missing document is a fetch failure, not a valid
/// empty nav — pages in these repositories always have a table of contents.
#[instrument(skip_all, fields(owner = %owner, repo = %repo, git_ref = %git_ref))]
pub async fn fetch_nav(
    client: &Client,
    renderer: &dyn FragmentRenderer,
    owner: &str,
    repo: &str,
    git_ref: &str,
    config: &FetchConfig,
) -> Result<NavPayload> {
    let url = format!(
        "{}/{owner}/{repo}/{git_ref}/{NAV_DOCUMENT}",
        config.raw_root.trim_end_matches('/')
    );

    let response = client
        .get(&url)
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

    let fragments = renderer.render(&body)?;
    let html = fragments.concat();

    debug!(
        bytes = body.len(),
        fragments = fragments.len(),
        "navigation document fetched"
    );

    Ok(NavPayload {
        resource: NavResource {
            body,
            html,
            fragments,
        },
    })
}
