use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tui_textarea::Input;

use super::app_state::{App, Mode};

/// Timeout for event polling - allows periodic UI refresh for notifications
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.view.search_textarea_mut().insert_str(&text);
                    self.view.on_search_input_changed(self.store.list());
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        self.notification.dismiss_error();

        match self.mode {
            Mode::ConfirmClear => self.handle_confirm_key(key),
            Mode::Browse => self.handle_browse_key(key),
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => self.clear_history(),
            _ => self.mode = Mode::Browse,
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,

            KeyCode::Up => self.view.select_previous(),
            KeyCode::Char('p') if ctrl => self.view.select_previous(),
            KeyCode::Down => self.view.select_next(),
            KeyCode::Char('n') if ctrl => self.view.select_next(),

            KeyCode::Enter => self.copy_selected(),
            KeyCode::Tab => self.view.toggle_preview(),

            KeyCode::Char('d') if ctrl => {
                if self.store.is_empty() {
                    self.notification.show("History is already empty");
                } else {
                    self.mode = Mode::ConfirmClear;
                }
            }

            // Let TextArea handle all other input (chars, backspace, left/right arrows, etc.)
            _ => {
                if self.view.search_textarea_mut().input(Input::from(key)) {
                    self.view.on_search_input_changed(self.store.list());
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
