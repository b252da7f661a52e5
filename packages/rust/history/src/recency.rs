//! Last-modified extraction from commit history.

use docpress_shared::{CommitRecord, LastModified};

/// Pick the last-modification timestamp from a commit history.
///
/// The hosting API returns history newest-first, so the first record
/// exposing `commit.author.date` is the most recent modification — position
/// decides, not a timestamp comparison. Records with any other shape are
/// not modification records and are skipped.
///
/// Returns `None` when no record qualifies (empty history, or none with the
/// recognized date shape).
pub fn extract_last_modified(history: &[CommitRecord]) -> Option<LastModified> {
    history
        .iter()
        .find_map(|record| record.author_date())
        .map(LastModified::new)
}
