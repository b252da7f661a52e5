//! Commit-history enrichment.
//!
//! Fetches the hosting API's commit history for a page's source file and
//! reduces it into the contributor and last-modified facets. The fetch is
//! the only effect; both reducers are pure functions over the decoded
//! history and never mutate their input.

mod client;
mod committers;
mod recency;

pub use client::fetch_commits_history;
pub use committers::extract_committers;
pub use recency::extract_last_modified;
