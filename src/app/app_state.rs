use super::history_view::HistoryView;
use crate::clipboard::Clipboard;
use crate::history::HistoryStore;
use crate::notification::NotificationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    ConfirmClear,
}

/// The interactive history picker.
pub struct App {
    pub store: HistoryStore,
    pub clipboard: Clipboard,
    pub view: HistoryView,
    pub mode: Mode,
    pub notification: NotificationState,
    pub should_quit: bool,
    /// Content copied on exit, reported after the terminal is restored.
    pub copied: Option<String>,
}

impl App {
    pub fn new(store: HistoryStore, clipboard: Clipboard) -> Self {
        let view = HistoryView::new(store.list());

        Self {
            store,
            clipboard,
            view,
            mode: Mode::Browse,
            notification: NotificationState::new(),
            should_quit: false,
            copied: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Write the highlighted entry to the clipboard and quit.
    ///
    /// The entry is promoted (per store policy) only after the write succeeded.
    pub fn copy_selected(&mut self) {
        let Some(index) = self.view.selected_store_index() else {
            return;
        };

        let content = match self.store.get(index) {
            Ok(entry) => entry.content().to_string(),
            Err(e) => {
                self.notification.show_error(&e.to_string());
                return;
            }
        };

        if let Err(e) = self.clipboard.write(&content) {
            log::warn!("Failed to copy history entry {}: {}", index, e);
            self.notification.show_error(&format!("Copy failed: {}", e));
            return;
        }

        if let Err(e) = self.store.select(index) {
            log::warn!("Selected entry vanished before promotion: {}", e);
        }

        self.copied = Some(content);
        self.should_quit = true;
    }

    pub fn clear_history(&mut self) {
        let result = self.store.clear();
        self.view.refresh(self.store.list());
        self.mode = Mode::Browse;

        match result {
            Ok(()) => self.notification.show("History cleared"),
            Err(e) => self.notification.show_warning(&format!("Cleared in memory only: {}", e)),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
