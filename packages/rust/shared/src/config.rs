//! Application configuration for Docpress.
//!
//! User config lives at `~/.docpress/docpress.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocpressError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docpress.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docpress";

// ---------------------------------------------------------------------------
// Config structs (matching docpress.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream host base URLs.
    #[serde(default)]
    pub endpoints: EndpointsConfig,

    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

/// `[endpoints]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL of the version-control hosting API.
    #[serde(default = "default_api_root")]
    pub repo_api_root: String,

    /// Base URL serving raw repository files.
    #[serde(default = "default_raw_root")]
    pub repo_raw_root: String,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            repo_api_root: default_api_root(),
            repo_raw_root: default_raw_root(),
        }
    }
}

fn default_api_root() -> String {
    "https://api.github.com".into()
}
fn default_raw_root() -> String {
    "https://raw.githubusercontent.com".into()
}

/// `[http]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum redirects to follow.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_redirects: default_max_redirects(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
fn default_max_redirects() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Fetch config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime fetch configuration — merged from config file + CLI flags.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Base URL of the hosting API (commit history endpoint).
    pub api_root: String,
    /// Base URL of the raw content host (navigation document).
    pub raw_root: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum redirects to follow.
    pub max_redirects: usize,
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            api_root: config.endpoints.repo_api_root.clone(),
            raw_root: config.endpoints.repo_raw_root.clone(),
            timeout_secs: config.http.timeout_secs,
            max_redirects: config.http.max_redirects,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docpress/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocpressError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docpress/docpress.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocpressError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        DocpressError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocpressError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocpressError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocpressError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("repo_api_root"));
        assert!(toml_str.contains("api.github.com"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.endpoints.repo_raw_root, "https://raw.githubusercontent.com");
        assert_eq!(parsed.http.timeout_secs, 10);
    }

    #[test]
    fn config_with_overrides() {
        let toml_str = r#"
[endpoints]
repo_api_root = "https://git.internal/api"

[http]
timeout_secs = 30
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.endpoints.repo_api_root, "https://git.internal/api");
        // Unset fields fall back to defaults
        assert_eq!(config.endpoints.repo_raw_root, "https://raw.githubusercontent.com");
        assert_eq!(config.http.timeout_secs, 30);
        assert_eq!(config.http.max_redirects, 3);
    }

    #[test]
    fn fetch_config_from_app_config() {
        let app = AppConfig::default();
        let fetch = FetchConfig::from(&app);
        assert_eq!(fetch.api_root, "https://api.github.com");
        assert_eq!(fetch.timeout_secs, 10);
        assert_eq!(fetch.max_redirects, 3);
    }
}
