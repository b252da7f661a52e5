//! Core domain types for Docpress page enrichment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Commit history wire shapes
// ---------------------------------------------------------------------------

/// One version-control commit touching a resource, as returned by the
/// hosting API's commit-listing endpoint.
///
/// Hosting payloads are heterogeneous: some records carry the hosting-account
/// shape (`author.avatar_url`), some the git-signature shape
/// (`commit.author`), some both, some neither. Every nesting level is
/// optional so a single odd record never fails the whole decode; the
/// reducers pattern-match the shape they need via [`CommitRecord::identity`]
/// and [`CommitRecord::author_date`] and skip records that don't match.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitRecord {
    /// Hosting-account info for the commit author.
    #[serde(default)]
    pub author: Option<CommitActor>,
    /// The underlying git commit.
    #[serde(default)]
    pub commit: Option<CommitDetail>,
}

/// Hosting-account shape attached to a commit record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitActor {
    /// Avatar image URL for the hosting account.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Account login name.
    #[serde(default)]
    pub login: Option<String>,
}

/// Git commit detail nested in a commit record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitDetail {
    /// The git author signature.
    #[serde(default)]
    pub author: Option<CommitSignature>,
}

/// A git signature (name/email/date) as serialized by the hosting API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommitSignature {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Authoring timestamp, kept as the raw string the API sent.
    #[serde(default)]
    pub date: Option<String>,
}

impl CommitRecord {
    /// Derive the committer identity when this record has the recognized
    /// shape: a git signature with both name and email. The avatar comes
    /// from the hosting-account shape and may legitimately be absent.
    ///
    /// `None` means "not a committer record" — callers skip it.
    pub fn identity(&self) -> Option<CommitterIdentity> {
        let signature = self.commit.as_ref()?.author.as_ref()?;
        let name = signature.name.as_deref()?;
        let email = signature.email.as_deref()?;

        Some(CommitterIdentity {
            avatar_url: self
                .author
                .as_ref()
                .and_then(|actor| actor.avatar_url.clone()),
            display: format!("{name} | {email}"),
        })
    }

    /// The authoring date when this record has the recognized
    /// `commit.author.date` shape. `None` means "not a modification record".
    pub fn author_date(&self) -> Option<&str> {
        self.commit.as_ref()?.author.as_ref()?.date.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Derived facets
// ---------------------------------------------------------------------------

/// A deduplicated contributor derived from commit authorship metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitterIdentity {
    /// Avatar URL of the hosting account; also the deduplication key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// `"<name> | <email>"` from the git signature.
    pub display: String,
}

/// Last-modification facet for a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastModified {
    /// Unparsed date string, byte-identical to the hosting API field.
    pub raw: String,
    /// Best-effort parsed form of `raw`; `None` when unparseable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed: Option<DateTime<Utc>>,
}

impl LastModified {
    /// Wrap a raw date string, deriving the parsed timestamp when the
    /// string is RFC 3339 or RFC 2822.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = DateTime::parse_from_rfc3339(&raw)
            .or_else(|_| DateTime::parse_from_rfc2822(&raw))
            .ok()
            .map(|dt| dt.with_timezone(&Utc));

        Self { raw, parsed }
    }
}

// ---------------------------------------------------------------------------
// Navigation payload
// ---------------------------------------------------------------------------

/// The navigation document in raw and rendered form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavResource {
    /// Raw markdown text of the navigation document.
    pub body: String,
    /// Full rendered HTML (the fragments, joined).
    pub html: String,
    /// One HTML string per top-level block, in document order.
    pub fragments: Vec<String>,
}

/// Wrapper around [`NavResource`] as handed to the composition root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavPayload {
    pub resource: NavResource,
}

// ---------------------------------------------------------------------------
// Page identity and merged output
// ---------------------------------------------------------------------------

/// Identifies a page's source resource within a hosted repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSource {
    /// Repository owner (user or organization).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Branch, tag, or commit identifier.
    #[serde(rename = "ref")]
    pub git_ref: String,
    /// File path of the markdown source within the repository.
    pub path: String,
}

/// The merged metadata facets produced for one page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageFacets {
    /// Historical contributors, most-recent-first, deduplicated by avatar.
    pub committers: Vec<CommitterIdentity>,
    /// Last-modification timestamp; absent when the history exposes none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<LastModified>,
    /// Navigation fragments with the title dropped and links rewritten.
    pub nav: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_record_decodes_hosting_payload() {
        let json = r#"{
            "sha": "abc123",
            "author": {"login": "octo", "avatar_url": "https://img/octo.png"},
            "commit": {
                "author": {"name": "Octo Cat", "email": "octo@example.com", "date": "2018-01-01T00:01:00Z"},
                "message": "fix docs"
            }
        }"#;
        let record: CommitRecord = serde_json::from_str(json).expect("decode");

        let identity = record.identity().expect("recognized shape");
        assert_eq!(identity.avatar_url.as_deref(), Some("https://img/octo.png"));
        assert_eq!(identity.display, "Octo Cat | octo@example.com");
        assert_eq!(record.author_date(), Some("2018-01-01T00:01:00Z"));
    }

    #[test]
    fn commit_record_tolerates_alien_shapes() {
        // git-signature nested in the wrong place: both facets skip it
        let json = r#"{"author": {"commit": {"name": "a2", "date": "whenever"}}}"#;
        let record: CommitRecord = serde_json::from_str(json).expect("decode");

        assert!(record.identity().is_none());
        assert!(record.author_date().is_none());
    }

    #[test]
    fn identity_without_avatar_is_still_recognized() {
        let json = r#"{"commit": {"author": {"name": "a1", "email": "a1@example.com"}}}"#;
        let record: CommitRecord = serde_json::from_str(json).expect("decode");

        let identity = record.identity().expect("signature present");
        assert!(identity.avatar_url.is_none());
        assert_eq!(identity.display, "a1 | a1@example.com");
    }

    #[test]
    fn last_modified_parses_rfc3339() {
        let lm = LastModified::new("2018-01-01T00:01:00Z");
        assert_eq!(lm.raw, "2018-01-01T00:01:00Z");
        let parsed = lm.parsed.expect("rfc3339 parses");
        assert_eq!(parsed.to_rfc3339(), "2018-01-01T00:01:00+00:00");
    }

    #[test]
    fn last_modified_keeps_raw_when_unparseable() {
        let lm = LastModified::new("sometime last week");
        assert_eq!(lm.raw, "sometime last week");
        assert!(lm.parsed.is_none());
    }

    #[test]
    fn page_facets_serialization_omits_absent_fields() {
        let facets = PageFacets {
            committers: vec![CommitterIdentity {
                avatar_url: None,
                display: "a1 | a1@example.com".into(),
            }],
            last_modified: None,
            nav: vec!["<ul></ul>".into()],
        };

        let json = serde_json::to_string(&facets).expect("serialize");
        assert!(!json.contains("last_modified"));
        assert!(!json.contains("avatar_url"));

        let parsed: PageFacets = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.committers.len(), 1);
        assert!(parsed.last_modified.is_none());
    }
}
