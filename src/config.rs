// Configuration module for clipstash
// This module handles loading and parsing configuration from ~/.config/clipstash/config.toml

mod types;

pub use types::{
    ClipboardBackend, ClipboardConfig, Config, HistoryConfig, MIN_POLL_INTERVAL_MS, MIN_TIMEOUT_MS,
    MonitorConfig, expand_tilde,
};

use std::fs;
use std::path::{Path, PathBuf};

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/clipstash/config.toml
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    load_config_from_path(&get_config_path())
}

pub fn load_config_from_path(config_path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", config_path);

    // If file doesn't exist, return defaults silently
    if !config_path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => normalize(config),
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// A store must hold at least one entry.
fn normalize(mut config: Config) -> ConfigResult {
    let mut warnings = Vec::new();

    if config.history.max_entries == 0 {
        config.history.max_entries = 1;
        warnings.push("history.max_entries must be at least 1; using 1".to_string());
    }

    // A zero timeout fails every clipboard call; a zero interval busy-polls
    if config.clipboard.timeout_ms < MIN_TIMEOUT_MS {
        config.clipboard.timeout_ms = MIN_TIMEOUT_MS;
        warnings.push(format!(
            "clipboard.timeout_ms must be at least {MIN_TIMEOUT_MS}; using {MIN_TIMEOUT_MS}"
        ));
    }

    if config.monitor.poll_interval_ms < MIN_POLL_INTERVAL_MS {
        config.monitor.poll_interval_ms = MIN_POLL_INTERVAL_MS;
        warnings.push(format!(
            "monitor.poll_interval_ms must be at least {MIN_POLL_INTERVAL_MS}; using {MIN_POLL_INTERVAL_MS}"
        ));
    }

    let warning = (!warnings.is_empty()).then(|| warnings.join("; "));
    ConfigResult { config, warning }
}

impl Config {
    /// Apply command-line overrides on top of the file configuration.
    pub fn with_overrides(mut self, history_file: Option<PathBuf>, max_entries: Option<usize>) -> Self {
        if let Some(path) = history_file {
            self.history.file = path.to_string_lossy().into_owned();
        }
        if let Some(max) = max_entries {
            self.history.max_entries = max.max(1);
        }
        self
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/clipstash/config.toml on all platforms for consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("clipstash")
        .join("config.toml")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
