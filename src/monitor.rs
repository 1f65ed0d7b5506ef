//! Clipboard change monitor
//!
//! Polls the clipboard on a fixed interval and records every new value in
//! the history store. The clipboard utilities offer no change notification,
//! so polling is the only option; a poll that sees the same value as last
//! time touches neither the store nor the disk.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::clipboard::{AccessError, Clipboard};
use crate::history::{HistoryStore, InsertOutcome};

/// Result of a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Clipboard read failed; nothing changed.
    Skipped(AccessError),
    /// Same as last seen, or blank.
    Unchanged,
    /// New value stored and saved.
    Recorded(InsertOutcome),
    /// New value stored in memory only; the save will be retried.
    RecordedUnsaved,
}

pub struct Monitor {
    clipboard: Clipboard,
    store: HistoryStore,
    poll_interval: Duration,
    last_seen: String,
    consecutive_failures: u32,
}

impl Monitor {
    /// `last_seen` starts empty, so whatever is on the clipboard at startup
    /// is recorded by the first poll (a no-op if it is already the newest entry).
    pub fn new(clipboard: Clipboard, store: HistoryStore, poll_interval: Duration) -> Self {
        Self {
            clipboard,
            store,
            poll_interval,
            last_seen: String::new(),
            consecutive_failures: 0,
        }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// Sample the clipboard once and record a change.
    pub fn poll_once(&mut self) -> PollOutcome {
        let current = match self.clipboard.read() {
            Ok(text) => {
                if self.consecutive_failures > 0 {
                    log::info!(
                        "Clipboard readable again after {} failed polls",
                        self.consecutive_failures
                    );
                    self.consecutive_failures = 0;
                }
                text
            }
            Err(e) => {
                self.consecutive_failures += 1;
                if self.consecutive_failures == 1 {
                    log::warn!("Clipboard read failed: {}", e);
                } else {
                    log::debug!("Clipboard read failed ({} in a row): {}", self.consecutive_failures, e);
                }
                return PollOutcome::Skipped(e);
            }
        };

        if current == self.last_seen || current.trim().is_empty() {
            return PollOutcome::Unchanged;
        }

        let outcome = match self.store.insert(&current) {
            Ok(outcome) => {
                log::info!("Clipboard changed ({} bytes): {:?}", current.len(), outcome);
                PollOutcome::Recorded(outcome)
            }
            Err(e) => {
                log::warn!("{}; keeping history in memory until the next change", e);
                PollOutcome::RecordedUnsaved
            }
        };

        self.last_seen = current;
        outcome
    }

    /// Poll until `shutdown` is cancelled.
    ///
    /// Cancellation is observed between polls, so the loop exits within one
    /// poll interval plus at most one clipboard timeout.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        log::info!(
            "Monitoring clipboard via {} every {:?} (history: {} entries max)",
            self.clipboard.backend_name(),
            self.poll_interval,
            self.store.capacity()
        );

        loop {
            self.poll_once();

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        log::info!("Clipboard monitor stopped");
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod monitor_tests;
