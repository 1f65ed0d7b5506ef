use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::app_state::{App, Mode};
use crate::history::ClipboardEntry;
use crate::notification::render_notification;
use crate::theme;
use crate::widgets::popup;

pub const SEARCH_HEIGHT: u16 = 3;
pub const PREVIEW_HEIGHT: u16 = 13;
/// Lines of an entry shown in the preview pane before truncating.
pub const PREVIEW_LINES: usize = 10;

const HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("Enter", "copy"),
    ("Tab", "preview"),
    ("Ctrl+D", "clear"),
    ("Esc", "quit"),
];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let preview_height = if self.view.is_preview_visible() {
            PREVIEW_HEIGHT
        } else {
            0
        };

        let layout = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(preview_height),
            Constraint::Length(SEARCH_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_list(frame, layout[0]);
        if preview_height > 0 {
            self.render_preview(frame, layout[1]);
        }
        self.render_search(frame, layout[2]);
        render_help_line(frame, layout[3]);

        if self.mode == Mode::ConfirmClear {
            self.render_confirm_clear(frame);
        }

        render_notification(frame, &mut self.notification);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        let entries = self.store.list();
        let title = format!(
            " Clipboard History ({}/{}) ",
            self.view.filtered_count(),
            entries.len()
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(theme::history::BORDER))
            .style(Style::default().bg(theme::history::BACKGROUND));

        if self.view.filtered_count() == 0 {
            let message = if entries.is_empty() {
                "Clipboard history is empty"
            } else {
                "No matches"
            };
            let empty = Paragraph::new(Line::from(Span::styled(
                format!("   {}", message),
                Style::default().fg(theme::history::EMPTY),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // " ► 12. " prefix plus borders
        let index_width = entries.len().to_string().len();
        let max_summary = (area.width as usize).saturating_sub(index_width + 8);

        let items: Vec<ListItem> = self
            .view
            .rows(entries)
            .map(|(row, store_index, entry)| {
                let selected = row == self.view.selected_index();
                list_item(entry, store_index + 1, index_width, max_summary, selected)
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(self.view.selected_index()));
        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let entry = self
            .view
            .selected_store_index()
            .and_then(|index| self.store.get(index).ok());

        let title = match entry {
            Some(entry) => format!(" Preview ({} lines) ", entry.line_count()),
            None => " Preview ".to_string(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(theme::preview::BORDER))
            .style(Style::default().bg(theme::preview::BACKGROUND));

        let lines = entry.map(preview_lines).unwrap_or_default();
        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_search(&mut self, frame: &mut Frame, area: Rect) {
        let textarea = self.view.search_textarea_mut();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Search ")
                .border_style(Style::default().fg(theme::history::SEARCH_BORDER))
                .style(Style::default().bg(theme::history::SEARCH_BG)),
        );
        textarea.set_style(
            Style::default()
                .fg(theme::history::SEARCH_TEXT)
                .bg(theme::history::SEARCH_BG),
        );
        frame.render_widget(&*textarea, area);
    }

    fn render_confirm_clear(&self, frame: &mut Frame) {
        let area = popup::centered_popup(frame.area(), 44, 5);
        popup::clear_area(frame, area);

        let text = vec![
            Line::from(Span::styled(
                format!("Delete all {} entries?", self.store.len()),
                Style::default().fg(theme::confirm::TEXT),
            )),
            Line::from(vec![
                Span::styled("y", theme::confirm::KEY),
                Span::styled(" confirm  ", Style::default().fg(theme::confirm::TEXT)),
                Span::styled("any key", theme::confirm::KEY),
                Span::styled(" cancel", Style::default().fg(theme::confirm::TEXT)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Clear History ")
            .border_style(Style::default().fg(theme::confirm::BORDER))
            .style(Style::default().bg(theme::confirm::BACKGROUND));

        frame.render_widget(Paragraph::new(text).block(block).centered(), area);
    }
}

fn list_item(
    entry: &ClipboardEntry,
    number: usize,
    index_width: usize,
    max_summary: usize,
    selected: bool,
) -> ListItem<'static> {
    let (marker, fg, bg) = if selected {
        (
            " ► ",
            theme::history::ITEM_SELECTED_FG,
            theme::history::ITEM_SELECTED_BG,
        )
    } else {
        (
            "   ",
            theme::history::ITEM_NORMAL_FG,
            theme::history::ITEM_NORMAL_BG,
        )
    };

    let mut text_style = Style::default().fg(fg).bg(bg);
    if selected {
        text_style = text_style.add_modifier(theme::history::ITEM_SELECTED_MODIFIER);
    }

    let summary = entry.summary(max_summary);
    // summary() appends the line count; draw it dimmed
    let (head, tail) = match summary.rfind(" [+") {
        Some(split) if summary.ends_with(" lines]") => summary.split_at(split),
        _ => (summary.as_str(), ""),
    };

    ListItem::new(Line::from(vec![
        Span::styled(marker, text_style),
        Span::styled(
            format!("{:>width$}. ", number, width = index_width),
            Style::default().fg(theme::history::INDEX).bg(bg),
        ),
        Span::styled(head.to_string(), text_style),
        Span::styled(
            tail.to_string(),
            Style::default().fg(theme::history::LINE_COUNT).bg(bg),
        ),
    ]))
}

/// First `PREVIEW_LINES` lines of the entry plus a note for the rest.
pub fn preview_lines(entry: &ClipboardEntry) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = entry
        .content()
        .lines()
        .take(PREVIEW_LINES)
        .map(|line| {
            Line::from(Span::styled(
                line.to_string(),
                Style::default().fg(theme::preview::TEXT),
            ))
        })
        .collect();

    let hidden = entry.line_count().saturating_sub(PREVIEW_LINES);
    if hidden > 0 {
        lines.push(Line::from(Span::styled(
            format!("... {} more lines", hidden),
            theme::preview::TRUNCATED,
        )));
    }

    lines
}

fn render_help_line(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                "• ",
                Style::default().fg(theme::help_line::SEPARATOR),
            ));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::help_line::KEY)));
        spans.push(Span::styled(
            format!(" {} ", desc),
            Style::default().fg(theme::help_line::DESCRIPTION),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
