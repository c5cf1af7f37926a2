//! Configuration file loading with precedence handling.

use crate::state::{ConfirmPolicy, DEFAULT_PAGE_SIZE};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Member list fetched when no other source is configured.
pub const DEFAULT_SOURCE_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Default HTTP timeout for the initial fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/memview/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// URL of the member list.
    #[serde(default)]
    pub source_url: Option<String>,

    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Bulk-delete confirmation policy ("when-selected" or "when-empty").
    #[serde(default)]
    pub confirm_policy: Option<ConfirmPolicy>,

    /// HTTP timeout for the initial fetch, in seconds.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// URL of the member list.
    pub source_url: String,
    /// Rows per page (at least 1).
    pub page_size: usize,
    /// Bulk-delete confirmation policy.
    pub confirm_policy: ConfirmPolicy,
    /// HTTP timeout for the initial fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            confirm_policy: ConfirmPolicy::default(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/memview/memview.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("memview").join("memview.log")
    } else {
        PathBuf::from("memview.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/memview/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("memview").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MEMVIEW_CONFIG` environment variable
/// 3. Default path `~/.config/memview/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("MEMVIEW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        source_url: config.source_url.unwrap_or(defaults.source_url),
        page_size: config.page_size.unwrap_or(defaults.page_size).max(1),
        confirm_policy: config.confirm_policy.unwrap_or(defaults.confirm_policy),
        fetch_timeout_secs: config
            .fetch_timeout_secs
            .unwrap_or(defaults.fetch_timeout_secs),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MEMVIEW_URL`: Override source URL
/// - `MEMVIEW_PAGE_SIZE`: Override page size (ignored unless a positive integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("MEMVIEW_URL") {
        config.source_url = url;
    }

    if let Some(page_size) = std::env::var("MEMVIEW_PAGE_SIZE")
        .ok()
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
    {
        config.page_size = page_size;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    url_override: Option<String>,
    page_size_override: Option<usize>,
    confirm_override: Option<ConfirmPolicy>,
) -> ResolvedConfig {
    if let Some(url) = url_override {
        config.source_url = url;
    }

    if let Some(page_size) = page_size_override {
        config.page_size = page_size.max(1);
    }

    if let Some(policy) = confirm_override {
        config.confirm_policy = policy;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
