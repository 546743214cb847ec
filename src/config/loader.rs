//! Configuration file loading with precedence handling.
//!
//! Precedence (lowest to highest): defaults → config file → environment →
//! CLI arguments.

use crate::model::DEFAULT_CATEGORIES;
use crate::state::{SortOrder, DEFAULT_LOG_CAPACITY};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "SHOPLIST_CONFIG";
/// Env var naming the data file.
pub const DATA_ENV: &str = "SHOPLIST_DATA";
/// Env var overriding the default sort order.
pub const SORT_ENV: &str = "SHOPLIST_SORT";
/// <https://no-color.org>
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Config file path.
        path: PathBuf,
        /// I/O error message.
        reason: String,
    },

    /// Invalid TOML, or a known key with a value of the wrong type.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Config file path.
        path: PathBuf,
        /// TOML error message.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to `~/.config/shoplist/config.toml`:
///
/// ```toml
/// data_file = "/home/me/lists.json"
/// default_sort = "asc"
/// confirm_destructive = true
/// categories = ["obst", "gemuese", "getraenke"]
/// log_buffer_capacity = 500
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial data file loaded at startup.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Entries kept by the in-app log pane.
    #[serde(default)]
    pub log_buffer_capacity: Option<usize>,

    /// Category catalog offered by the item form. Replaces the built-in list.
    #[serde(default)]
    pub categories: Option<Vec<String>>,

    /// Sort order a freshly opened list starts with.
    #[serde(default)]
    pub default_sort: Option<SortOrder>,

    /// Ask before deleting lists or items and before sharing.
    #[serde(default)]
    pub confirm_destructive: Option<bool>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` starts with no lists.
    pub data_file: Option<PathBuf>,
    /// Where tracing output is written.
    pub log_file_path: PathBuf,
    /// Entries kept by the log pane.
    pub log_buffer_capacity: usize,
    /// Initial category catalog.
    pub categories: Vec<String>,
    /// Sort order of a freshly opened list.
    pub default_sort: SortOrder,
    /// Ask before destructive commands.
    pub confirm_destructive: bool,
    /// Render without colors.
    pub no_color: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file_path: default_log_path(),
            log_buffer_capacity: DEFAULT_LOG_CAPACITY,
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            default_sort: SortOrder::Default,
            confirm_destructive: true,
            no_color: false,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/shoplist/shoplist.log` on Unix-like systems,
/// falling back to the current directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("shoplist").join("shoplist.log")
    } else {
        PathBuf::from("shoplist.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
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

/// Resolve default config file path: `~/.config/shoplist/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shoplist").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Path precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `SHOPLIST_CONFIG` environment variable
/// 3. Default path `~/.config/shoplist/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults.
///
/// An empty or all-blank `categories` array keeps the built-in catalog.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    let categories = config
        .categories
        .filter(|names| names.iter().any(|name| !name.trim().is_empty()))
        .unwrap_or(defaults.categories);

    ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        log_buffer_capacity: config
            .log_buffer_capacity
            .unwrap_or(defaults.log_buffer_capacity),
        categories,
        default_sort: config.default_sort.unwrap_or(defaults.default_sort),
        confirm_destructive: config
            .confirm_destructive
            .unwrap_or(defaults.confirm_destructive),
        no_color: defaults.no_color,
    }
}

/// An environment override whose value could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    /// Name of the environment variable.
    pub var: &'static str,
    /// The value as found in the environment.
    pub value: String,
    /// Why the value was rejected.
    pub reason: String,
}

impl std::fmt::Display for RejectedOverride {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={:?}: {}", self.var, self.value, self.reason)
    }
}

/// Apply environment variable overrides.
///
/// Checks `SHOPLIST_DATA`, `SHOPLIST_SORT` and `NO_COLOR`. An unparseable
/// sort order leaves the config unchanged and is returned in the rejected
/// list for the caller to report.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> (ResolvedConfig, Vec<RejectedOverride>) {
    let mut rejected = Vec::new();

    if let Ok(data) = std::env::var(DATA_ENV) {
        if !data.is_empty() {
            config.data_file = Some(PathBuf::from(data));
        }
    }

    if let Ok(sort) = std::env::var(SORT_ENV) {
        match sort.parse::<SortOrder>() {
            Ok(order) => config.default_sort = order,
            Err(reason) => rejected.push(RejectedOverride {
                var: SORT_ENV,
                value: sort,
                reason,
            }),
        }
    }

    if std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
        config.no_color = true;
    }

    (config, rejected)
}

/// Apply CLI argument overrides. Only flags the user actually set apply.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_file: Option<PathBuf>,
    sort_override: Option<SortOrder>,
    no_color: bool,
) -> ResolvedConfig {
    if let Some(path) = data_file {
        config.data_file = Some(path);
    }

    if let Some(sort) = sort_override {
        config.default_sort = sort;
    }

    if no_color {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
