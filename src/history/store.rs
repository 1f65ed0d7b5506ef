use std::path::{Path, PathBuf};

use thiserror::Error;

use super::entry::ClipboardEntry;
use super::storage::{self, PersistenceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of range: history has {len} entries")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}

/// What an [`HistoryStore::insert`] did to the in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Empty or whitespace-only content; nothing stored.
    Ignored,
    /// Already the newest entry.
    Unchanged,
    /// New content at the front; `evicted` old entries fell off the end.
    Added { evicted: usize },
    /// Existing content moved up from `from` to the front.
    Promoted { from: usize },
}

impl InsertOutcome {
    pub fn changed(self) -> bool {
        matches!(self, InsertOutcome::Added { .. } | InsertOutcome::Promoted { .. })
    }
}

/// Bounded, deduplicated clipboard history, newest first.
///
/// Every mutation is written through to the backing file before returning.
/// When a write fails the in-memory list is still updated and the store is
/// marked dirty, so the next mutation retries the save.
///
/// Other processes share the file (a `clear` from the CLI while the daemon
/// runs), so `insert` re-reads it first and applies the change on top of
/// what is on disk.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Vec<ClipboardEntry>,
    capacity: usize,
    path: Option<PathBuf>,
    promote_on_select: bool,
    dirty: bool,
}

impl HistoryStore {
    /// Load the store from `path`. Missing, unreadable or corrupt files
    /// give an empty store; the cause is logged, never returned.
    pub fn load(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let capacity = capacity.max(1);

        let entries = match storage::load_history(&path, capacity) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("{}; starting with empty history", e);
                Vec::new()
            }
        };
        log::debug!("Loaded {} history entries from {:?}", entries.len(), path);

        Self {
            entries,
            capacity,
            path: Some(path),
            promote_on_select: true,
            dirty: false,
        }
    }

    /// A store with no backing file.
    pub fn in_memory(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            path: None,
            promote_on_select: true,
            dirty: false,
        }
    }

    /// Whether [`select`](Self::select) moves the chosen entry to the front.
    pub fn with_promotion(mut self, promote_on_select: bool) -> Self {
        self.promote_on_select = promote_on_select;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn promotes_on_select(&self) -> bool {
        self.promote_on_select
    }

    /// True when the last save failed and the file is behind memory.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Newest-first snapshot.
    pub fn list(&self) -> &[ClipboardEntry] {
        &self.entries
    }

    pub fn newest(&self) -> Option<&ClipboardEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Result<&ClipboardEntry, IndexError> {
        self.entries.get(index).ok_or(IndexError {
            index,
            len: self.entries.len(),
        })
    }

    /// Record `content` as the most recent clipboard value.
    ///
    /// The returned outcome describes the in-memory change, which happens
    /// even when persisting fails.
    pub fn insert(&mut self, content: &str) -> Result<InsertOutcome, PersistenceError> {
        self.reload();
        let outcome = self.insert_in_memory(content);

        if outcome.changed() || (outcome == InsertOutcome::Unchanged && self.dirty) {
            self.persist()?;
        }

        Ok(outcome)
    }

    /// Replace the in-memory list with the file contents.
    ///
    /// Skipped while dirty, since the file is then behind memory. A file
    /// that cannot be read leaves memory as it is.
    fn reload(&mut self) {
        if self.dirty {
            return;
        }
        let Some(path) = self.path.as_deref() else {
            return;
        };

        match storage::load_history(path, self.capacity) {
            Ok(entries) => {
                if entries != self.entries {
                    log::debug!("History file changed on disk; reloaded {} entries", entries.len());
                }
                self.entries = entries;
            }
            Err(e) => log::debug!("{}; keeping in-memory history", e),
        }
    }

    fn insert_in_memory(&mut self, content: &str) -> InsertOutcome {
        let Some(entry) = ClipboardEntry::new(content) else {
            return InsertOutcome::Ignored;
        };

        match self.entries.iter().position(|e| e == &entry) {
            Some(0) => InsertOutcome::Unchanged,
            Some(from) => {
                let existing = self.entries.remove(from);
                self.entries.insert(0, existing);
                InsertOutcome::Promoted { from }
            }
            None => {
                self.entries.insert(0, entry);
                let evicted = self.entries.len().saturating_sub(self.capacity);
                self.entries.truncate(self.capacity);
                InsertOutcome::Added { evicted }
            }
        }
    }

    /// Return the content at `index`, promoting it to the front when the
    /// store was built with promotion enabled (the default).
    ///
    /// A failed save of the promotion is logged; the content is still returned.
    pub fn select(&mut self, index: usize) -> Result<String, IndexError> {
        let content = self.get(index)?.content().to_string();

        if self.promote_on_select
            && let Err(e) = self.insert(&content)
        {
            log::warn!("{}; promotion kept in memory only", e);
        }

        Ok(content)
    }

    /// Remove every entry and persist the empty history.
    pub fn clear(&mut self) -> Result<(), PersistenceError> {
        self.entries.clear();
        self.persist()
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };

        match storage::save_history(path, &self.entries) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
