//! Shared test utilities for clipstash
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::clipboard::{AccessError, AccessResult, Clipboard, ClipboardAccess};
    use crate::history::HistoryStore;

    /// Helper to create a key event without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    /// Helper to create a key event with modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// In-memory clipboard that replays a scripted sequence of reads.
    ///
    /// Once the script runs out, reads return the last successful value
    /// (or the last written text), like a clipboard nobody touches.
    #[derive(Debug, Default)]
    pub struct ScriptedClipboard {
        script: Mutex<VecDeque<AccessResult<String>>>,
        current: Mutex<Option<String>>,
        written: Mutex<Vec<String>>,
        fail_writes: bool,
    }

    impl ScriptedClipboard {
        pub fn new(script: Vec<AccessResult<String>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                ..Self::default()
            }
        }

        /// Same as `new`, but every write fails.
        pub fn failing_writes(script: Vec<AccessResult<String>>) -> Self {
            Self {
                fail_writes: true,
                ..Self::new(script)
            }
        }

        pub fn written(&self) -> Vec<String> {
            self.written.lock().unwrap().clone()
        }
    }

    impl ClipboardAccess for ScriptedClipboard {
        fn name(&self) -> &'static str {
            "scripted"
        }

        fn read(&self) -> AccessResult<String> {
            let next = self.script.lock().unwrap().pop_front();
            match next {
                Some(Ok(text)) => {
                    *self.current.lock().unwrap() = Some(text.clone());
                    Ok(text)
                }
                Some(Err(e)) => Err(e),
                None => self
                    .current
                    .lock()
                    .unwrap()
                    .clone()
                    .ok_or_else(|| AccessError::Unavailable("empty script".into())),
            }
        }

        fn write(&self, text: &str) -> AccessResult<()> {
            if self.fail_writes {
                return Err(AccessError::Failed("scripted write failure".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            *self.current.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    /// Wrap a scripted clipboard in the timeout adapter.
    pub fn scripted_clipboard(script: Vec<AccessResult<String>>) -> (Arc<ScriptedClipboard>, Clipboard) {
        let scripted = Arc::new(ScriptedClipboard::new(script));
        let clipboard = Clipboard::new(scripted.clone(), Duration::from_secs(1));
        (scripted, clipboard)
    }

    /// In-memory store pre-filled with `newest_first` values.
    pub fn store_with(capacity: usize, newest_first: &[&str]) -> HistoryStore {
        let mut store = HistoryStore::in_memory(capacity);
        for value in newest_first.iter().rev() {
            store.insert(value).unwrap();
        }
        store
    }

    /// Store contents as plain strings, newest first.
    pub fn contents(store: &HistoryStore) -> Vec<String> {
        store
            .list()
            .iter()
            .map(|e| e.content().to_string())
            .collect()
    }
}
