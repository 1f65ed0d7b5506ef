// Configuration type definitions

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_MAX_ENTRIES: usize = 5;
pub const DEFAULT_HISTORY_FILE: &str = "~/.clipboard_history";
pub const DEFAULT_TIMEOUT_MS: u64 = 500;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
pub const MIN_TIMEOUT_MS: u64 = 50;
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Command,
    Osc52,
}

impl ClipboardBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            ClipboardBackend::Auto => "auto",
            ClipboardBackend::System => "system",
            ClipboardBackend::Command => "command",
            ClipboardBackend::Osc52 => "osc52",
        }
    }
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClipboardConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// History configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    #[serde(default = "default_history_file")]
    pub file: String,
    #[serde(default = "default_promote_on_select")]
    pub promote_on_select: bool,
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}

fn default_history_file() -> String {
    DEFAULT_HISTORY_FILE.to_string()
}

fn default_promote_on_select() -> bool {
    true
}

impl Default for HistoryConfig {
    fn default() -> Self {
        HistoryConfig {
            max_entries: DEFAULT_MAX_ENTRIES,
            file: DEFAULT_HISTORY_FILE.to_string(),
            promote_on_select: true,
        }
    }
}

impl HistoryConfig {
    /// History file with a leading `~` expanded to the home directory.
    pub fn path(&self) -> PathBuf {
        expand_tilde(&self.file)
    }
}

/// Monitor configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl MonitorConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub monitor: MonitorConfig,
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        return dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    }

    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(rest),
        None => PathBuf::from(path),
    }
}
