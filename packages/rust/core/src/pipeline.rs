//! Per-page enrichment pipeline.
//!
//! For one page, fetch the commit history of its source file and the
//! repository navigation document concurrently, reduce both into the
//! derived facets, and merge them into a single [`PageFacets`] value.

use std::time::Duration;

use reqwest::Client;
use tracing::{info, instrument};

use docpress_history::{extract_committers, extract_last_modified, fetch_commits_history};
use docpress_markdown::FragmentRenderer;
use docpress_nav::{extract_nav, fetch_nav};
use docpress_shared::{DocpressError, FetchConfig, PageFacets, PageSource, Result};

/// User-Agent string for enrichment requests.
const USER_AGENT: &str = concat!("Docpress/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client from transport settings.
///
/// Timeouts and the redirect limit live here, on the transport, not in the
/// fetch functions.
pub fn build_client(config: &FetchConfig) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| DocpressError::config(format!("failed to build HTTP client: {e}")))
}

/// Enrich one page with its commit-history and navigation facets.
///
/// Both fetches run concurrently; either one failing aborts enrichment for
/// this page and propagates the error — no partial facets are produced.
/// Nothing here holds cross-call state, so callers may enrich independent
/// pages concurrently without interference.
#[instrument(skip_all, fields(owner = %page.owner, repo = %page.repo, path = %page.path))]
pub async fn enrich_page(
    client: &Client,
    renderer: &dyn FragmentRenderer,
    page: &PageSource,
    config: &FetchConfig,
) -> Result<PageFacets> {
    let (history, nav_payload) = tokio::join!(
        fetch_commits_history(
            client,
            &config.api_root,
            &page.owner,
            &page.repo,
            &page.git_ref,
            &page.path,
        ),
        fetch_nav(
            client,
            renderer,
            &page.owner,
            &page.repo,
            &page.git_ref,
            config,
        ),
    );
    let history = history?;
    let nav_payload = nav_payload?;

    let committers = extract_committers(&history);
    let last_modified = extract_last_modified(&history);
    let nav = extract_nav(&nav_payload.resource.fragments);

    info!(
        committers = committers.len(),
        nav_fragments = nav.len(),
        "page facets assembled"
    );

    Ok(PageFacets {
        committers,
        last_modified,
        nav,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpress_markdown::ComrakRenderer;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> FetchConfig {
        FetchConfig {
            api_root: server.uri(),
            raw_root: server.uri(),
            timeout_secs: 10,
            max_redirects: 3,
        }
    }

    fn page() -> PageSource {
        PageSource {
            owner: "owner".into(),
            repo: "repo".into(),
            git_ref: "main".into(),
            path: "docs/page.md".into(),
        }
    }

    async fn mount_commits(server: &MockServer) {
        let body = serde_json::json!([
            {
                "author": {"avatar_url": "a1_url"},
                "commit": {"author": {"email": "a1_email", "name": "a1", "date": "2018-01-02T00:00:00Z"}}
            },
            {
                "author": {"avatar_url": "a1_url"},
                "commit": {"author": {"email": "a1_old_email", "name": "a1", "date": "2018-01-01T00:00:00Z"}}
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/commits"))
            .and(query_param("path", "docs/page.md"))
            .and(query_param("sha", "main"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(server)
            .await;
    }

    async fn mount_summary(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/owner/repo/main/SUMMARY.md"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("# Table of contents\n\n* [link](link.md)\n"),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn merges_all_three_facets() {
        let server = MockServer::start().await;
        mount_commits(&server).await;
        mount_summary(&server).await;

        let config = config_for(&server);
        let client = build_client(&config).expect("client");
        let facets = enrich_page(&client, &ComrakRenderer, &page(), &config)
            .await
            .expect("enrich");

        // Two commits, one avatar: one committer, first-seen display
        assert_eq!(facets.committers.len(), 1);
        assert_eq!(facets.committers[0].display, "a1 | a1_email");

        let last_modified = facets.last_modified.expect("date present");
        assert_eq!(last_modified.raw, "2018-01-02T00:00:00Z");

        // Title fragment dropped, link retargeted
        assert_eq!(facets.nav.len(), 1);
        assert!(facets.nav[0].contains("href=\"/link.html\""));
    }

    #[tokio::test]
    async fn history_fetch_failure_aborts_enrichment() {
        let server = MockServer::start().await;
        mount_summary(&server).await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/commits"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = build_client(&config).expect("client");
        let err = enrich_page(&client, &ComrakRenderer, &page(), &config)
            .await
            .expect_err("must fail");

        assert!(matches!(err, DocpressError::Fetch { status: Some(500), .. }));
    }

    #[tokio::test]
    async fn nav_fetch_failure_aborts_enrichment() {
        let server = MockServer::start().await;
        mount_commits(&server).await;

        Mock::given(method("GET"))
            .and(path("/owner/repo/main/SUMMARY.md"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = build_client(&config).expect("client");
        let err = enrich_page(&client, &ComrakRenderer, &page(), &config)
            .await
            .expect_err("must fail");

        assert!(matches!(err, DocpressError::Fetch { status: Some(404), .. }));
    }

    #[tokio::test]
    async fn empty_history_still_enriches_nav() {
        let server = MockServer::start().await;
        mount_summary(&server).await;

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/commits"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let config = config_for(&server);
        let client = build_client(&config).expect("client");
        let facets = enrich_page(&client, &ComrakRenderer, &page(), &config)
            .await
            .expect("enrich");

        assert!(facets.committers.is_empty());
        assert!(facets.last_modified.is_none());
        assert_eq!(facets.nav.len(), 1);
    }
}
