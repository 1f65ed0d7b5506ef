//! clipstash library - clipboard history daemon and picker
//!
//! This library exposes the core functionality of clipstash for the binary
//! and for testing.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod history;
pub mod monitor;
pub mod notification;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use clipboard::Clipboard;
pub use config::Config;
pub use history::HistoryStore;
pub use monitor::Monitor;
