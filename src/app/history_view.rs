use ratatui::style::Style;
use tui_textarea::TextArea;

use crate::history::{ClipboardEntry, HistoryMatcher};
use crate::theme;

/// Creates a TextArea configured for history search input.
fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// Search filter and selection over the store's entries.
///
/// Holds indices into the store rather than copies, so it must be
/// refreshed whenever the store changes.
pub struct HistoryView {
    filtered_indices: Vec<usize>,
    search_textarea: TextArea<'static>,
    selected_index: usize,
    matcher: HistoryMatcher,
    preview_visible: bool,
}

impl HistoryView {
    pub fn new(entries: &[ClipboardEntry]) -> Self {
        Self {
            filtered_indices: (0..entries.len()).collect(),
            search_textarea: create_search_textarea(),
            selected_index: 0,
            matcher: HistoryMatcher::new(),
            preview_visible: false,
        }
    }

    /// Returns the current search query.
    pub fn search_query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Returns a mutable reference to the search TextArea for input handling.
    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    /// Called after TextArea input to update the filter.
    pub fn on_search_input_changed(&mut self, entries: &[ClipboardEntry]) {
        self.update_filter(entries);
        self.selected_index = 0;
    }

    /// Re-run the filter after the store changed, keeping the selection in range.
    pub fn refresh(&mut self, entries: &[ClipboardEntry]) {
        self.update_filter(entries);
        if self.selected_index >= self.filtered_indices.len() {
            self.selected_index = self.filtered_indices.len().saturating_sub(1);
        }
    }

    /// Selects the next item in the filtered list.
    pub fn select_next(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.filtered_indices.len();
        }
    }

    /// Selects the previous item in the filtered list.
    pub fn select_previous(&mut self) {
        if !self.filtered_indices.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.filtered_indices.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }

    /// Store index of the highlighted row, if any row is visible.
    pub fn selected_store_index(&self) -> Option<usize> {
        self.filtered_indices.get(self.selected_index).copied()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_indices.len()
    }

    pub fn toggle_preview(&mut self) {
        self.preview_visible = !self.preview_visible;
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview_visible
    }

    /// Visible rows as `(row, store_index, entry)`, in display order.
    pub fn rows<'a>(
        &'a self,
        entries: &'a [ClipboardEntry],
    ) -> impl Iterator<Item = (usize, usize, &'a ClipboardEntry)> + 'a {
        self.filtered_indices
            .iter()
            .enumerate()
            .filter_map(|(row, &idx)| entries.get(idx).map(|entry| (row, idx, entry)))
    }

    fn update_filter(&mut self, entries: &[ClipboardEntry]) {
        let query = self.search_query().to_string();
        self.filtered_indices = self.matcher.filter(&query, entries);
    }
}
