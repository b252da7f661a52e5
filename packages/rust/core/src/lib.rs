//! Page-enrichment orchestration for Docpress.
//!
//! Ties the commit-history and navigation crates together into the
//! per-page enrichment entry point used by the CLI (and by any embedding
//! render pipeline).

pub mod pipeline;

pub use pipeline::{build_client, enrich_page};
