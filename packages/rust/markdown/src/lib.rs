//! Markdown-to-HTML fragment rendering.
//!
//! Renders a markdown document to a sequence of HTML fragments, one per
//! top-level block (heading, list, paragraph, ...), in document order.
//! The navigation transformer operates on these fragments individually, so
//! the renderer never flattens the document into a single string.

use comrak::nodes::AstNode;
use comrak::{Arena, Options, format_html, parse_document};
use tracing::debug;

use docpress_shared::{DocpressError, Result};

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Renders markdown text to one HTML fragment per top-level block.
///
/// Injected into the navigation loader so tests can substitute a canned
/// renderer for the real one.
pub trait FragmentRenderer: Send + Sync {
    /// Render `markdown` to block fragments, in document order.
    fn render(&self, markdown: &str) -> Result<Vec<String>>;
}

// ---------------------------------------------------------------------------
// Default comrak-backed renderer
// ---------------------------------------------------------------------------

/// Default [`FragmentRenderer`] backed by `comrak`.
///
/// Options stay at CommonMark defaults: navigation documents are headings,
/// lists, and links, and raw HTML passthrough is not wanted for content
/// fetched from a repository.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComrakRenderer;

impl FragmentRenderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> Result<Vec<String>> {
        let arena = Arena::new();
        let options = Options::default();
        let root = parse_document(&arena, markdown, &options);

        let mut fragments = Vec::new();
        for block in root.children() {
            fragments.push(render_node(block, &options)?);
        }

        debug!(blocks = fragments.len(), "markdown rendered to fragments");
        Ok(fragments)
    }
}

/// Format a single AST node (and its subtree) to an HTML string.
fn render_node<'a>(node: &'a AstNode<'a>, options: &Options) -> Result<String> {
    let mut out = Vec::new();
    format_html(node, options, &mut out)
        .map_err(|e| DocpressError::Render(format!("html formatting failed: {e}")))?;

    String::from_utf8(out)
        .map_err(|e| DocpressError::Render(format!("renderer produced non-UTF-8 output: {e}")))
}
