//! Navigation fragment post-processing.
//!
//! The rendered `SUMMARY.md` arrives as a sequence of HTML block fragments.
//! Embedding it as a page's navigation tree needs two fixups: the document's
//! own title heading goes away, and links that point at markdown sources are
//! retargeted to the published pages.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;
use url::Url;

/// Markdown source extension recognized in link targets.
const SOURCE_EXT: &str = ".md";

/// Published page extension substituted for the source extension.
const RENDERED_EXT: &str = ".html";

/// Drop the first element of a fragment sequence.
///
/// Returns a new vector; the input is never mutated. Empty input stays
/// empty.
pub fn remove_first_title(fragments: &[String]) -> Vec<String> {
    fragments.iter().skip(1).cloned().collect()
}

/// Post-process rendered navigation fragments for embedding in a page.
///
/// Drops the leading title fragment (once per call, never per rewrite pass),
/// then rewrites relative markdown link targets inside the remaining
/// fragments. Fragment order is otherwise preserved.
pub fn extract_nav(fragments: &[String]) -> Vec<String> {
    let nav: Vec<String> = remove_first_title(fragments)
        .iter()
        .map(|fragment| rewrite_links(fragment))
        .collect();

    debug!(fragments = nav.len(), "navigation extracted");
    nav
}

static HREF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]*)""#).expect("valid regex"));

/// Rewrite every qualifying `href` in one HTML fragment.
fn rewrite_links(fragment: &str) -> String {
    HREF_RE
        .replace_all(fragment, |caps: &Captures<'_>| {
            match rendered_path(&caps[1]) {
                Some(rewritten) => format!(r#"href="{rewritten}""#),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// The published path for a link target (`dir/page.md` → `/dir/page.html`),
/// or `None` when the target must not be rewritten: absolute targets
/// (scheme or host present) and targets without the markdown extension stay
/// as they are.
fn rendered_path(target: &str) -> Option<String> {
    if Url::parse(target).is_ok() || target.starts_with("//") {
        return None;
    }

    let stem = target.strip_suffix(SOURCE_EXT)?;
    Some(format!("/{}{RENDERED_EXT}", stem.trim_start_matches('/')))
}
