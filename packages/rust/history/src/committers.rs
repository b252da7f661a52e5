//! Contributor extraction from commit history.

use std::collections::HashSet;

use tracing::trace;

use docpress_shared::{CommitRecord, CommitterIdentity};

/// Reduce a commit history to its distinct contributors, in order of first
/// appearance. With the hosting API's newest-first input, that puts the most
/// recent contributor first.
///
/// The deduplication key is the avatar URL: the first record seen for an
/// avatar fixes the display string, and later records with the same avatar
/// are discarded even when their signature name or email differ. Records
/// without a full git signature are skipped, not errors.
pub fn extract_committers(history: &[CommitRecord]) -> Vec<CommitterIdentity> {
    let mut seen: HashSet<Option<String>> = HashSet::new();
    let mut committers = Vec::new();

    for record in history {
        let Some(identity) = record.identity() else {
            trace!("skipping commit record without a git signature");
            continue;
        };

        if seen.insert(identity.avatar_url.clone()) {
            committers.push(identity);
        }
    }

    committers
}
