//! Error types for Docpress.
//!
//! Library crates use [`DocpressError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all Docpress operations.
#[derive(Debug, thiserror::Error)]
pub enum DocpressError {
    /// Transport failure or non-success HTTP status from an upstream host.
    #[error("fetch error for {url}: {message}")]
    Fetch {
        url: String,
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
        message: String,
    },

    /// Response body not in the expected shape (malformed JSON, etc.).
    #[error("parse error: {message}")]
    Parse { message: String },

    /// Markdown-to-HTML fragment rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocpressError>;

impl DocpressError {
    /// Create a fetch error for a request that never produced a response.
    pub fn fetch(url: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.into(),
            status: None,
            message: msg.into(),
        }
    }

    /// Create a fetch error carrying the non-success status the host returned.
    pub fn fetch_status(url: impl Into<String>, status: u16) -> Self {
        Self::Fetch {
            url: url.into(),
            status: Some(status),
            message: format!("HTTP {status}"),
        }
    }

    /// Create a parse error from any displayable message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse {
            message: msg.into(),
        }
    }

    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
