use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Rect of at most `width` x `height`, centered inside `frame_area`.
pub fn centered_popup(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width);
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + (frame_area.width - popup_width) / 2,
        y: frame_area.y + (frame_area.height - popup_height) / 2,
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_basic() {
        let popup = centered_popup(Rect::new(0, 0, 100, 50), 40, 20);
        assert_eq!(popup, Rect::new(30, 15, 40, 20));
    }

    #[test]
    fn test_centered_popup_respects_origin() {
        let popup = centered_popup(Rect::new(10, 4, 20, 10), 10, 4);
        assert_eq!(popup, Rect::new(15, 7, 10, 4));
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let popup = centered_popup(Rect::new(0, 0, 100, 50), 200, 100);
        assert_eq!(popup, Rect::new(0, 0, 100, 50));
    }
}
