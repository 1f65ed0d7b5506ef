use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_terminal(notification: &mut NotificationState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| render_notification(f, notification))
        .unwrap();
    terminal
}

fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_message_drawn_top_right() {
    let mut notification = NotificationState::new();
    notification.show("History cleared");

    let terminal = render_to_terminal(&mut notification, 60, 20);
    let line = row_text(&terminal, 3);

    assert!(line.contains(" History cleared "));
    let byte = line.find("History cleared").unwrap();
    let column = line[..byte].chars().count();
    assert!(column > 30, "expected right alignment, got column {column}");
}

#[test]
fn test_nothing_drawn_without_notification() {
    let mut notification = NotificationState::new();
    let terminal = render_to_terminal(&mut notification, 40, 10);

    for y in 0..10 {
        assert!(row_text(&terminal, y).trim().is_empty());
    }
}

#[test]
fn test_error_uses_error_colors() {
    let mut notification = NotificationState::new();
    notification.show_error("Copy failed");

    let terminal = render_to_terminal(&mut notification, 60, 20);
    let line = row_text(&terminal, 3);
    let byte = line.find("Copy failed").unwrap();
    let x = line[..byte].chars().count() as u16;

    let cell = &terminal.backend().buffer()[(x, 3)];
    assert_eq!(cell.bg, crate::theme::notification::ERROR.bg);
}

#[test]
fn test_too_small_frame_skips_render() {
    let mut notification = NotificationState::new();
    notification.show("History cleared");

    let terminal = render_to_terminal(&mut notification, 6, 5);
    for y in 0..5 {
        assert!(!row_text(&terminal, y).contains("History"));
    }
}
