//! Clipboard history: the bounded, deduplicated, persisted store.

mod entry;
mod matcher;
pub mod storage;
mod store;

pub use entry::ClipboardEntry;
pub use matcher::HistoryMatcher;
pub use storage::{PersistenceError, default_history_path};
pub use store::{HistoryStore, IndexError, InsertOutcome};
