//! Shared types, error model, and configuration for Docpress.
//!
//! This crate is the foundation depended on by all other Docpress crates.
//! It provides:
//! - [`DocpressError`] — the unified error type
//! - Domain types ([`CommitRecord`], [`CommitterIdentity`], [`LastModified`],
//!   [`NavPayload`], [`PageFacets`])
//! - Configuration ([`AppConfig`], [`FetchConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, EndpointsConfig, FetchConfig, HttpConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{DocpressError, Result};
pub use types::{
    CommitActor, CommitDetail, CommitRecord, CommitSignature, CommitterIdentity, LastModified,
    NavPayload, NavResource, PageFacets, PageSource,
};
