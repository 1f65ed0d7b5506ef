//! Colors and styles for the history viewer.
//!
//! Render code uses `theme::module::CONSTANT` instead of hardcoding `Color::*`.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette shared by several components.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);

    // Shared by every textarea
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// History list and search box
pub mod history {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    // Selected item - clear highlight with accent indicator
    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_FG: Color = palette::TEXT;
    pub const ITEM_SELECTED_MODIFIER: Modifier = Modifier::BOLD;

    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_NORMAL_FG: Color = Color::Rgb(180, 182, 200);

    // Row number column
    pub const INDEX: Color = palette::TEXT_MUTED;
    // " [+N lines]" suffix
    pub const LINE_COUNT: Color = palette::TEXT_DIM;

    pub const EMPTY: Color = palette::TEXT_DIM;

    pub const SEARCH_BORDER: Color = palette::PINK;
    pub const SEARCH_TEXT: Color = palette::TEXT;
    pub const SEARCH_BG: Color = palette::BG_DARK;
}

/// Full-content preview pane
pub mod preview {
    use super::*;

    pub const BORDER: Color = palette::TEXT_MUTED;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TEXT: Color = palette::TEXT;
    pub const TRUNCATED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .add_modifier(Modifier::ITALIC);
}

/// Clear-history confirmation popup
pub mod confirm {
    use super::*;

    pub const BORDER: Color = palette::RED;
    pub const BACKGROUND: Color = palette::BG_HIGHLIGHT;
    pub const TEXT: Color = palette::TEXT;
    pub const KEY: Style = Style::new()
        .fg(palette::YELLOW)
        .add_modifier(Modifier::BOLD);
}

/// Key hints at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };

    pub const ERROR: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::RED,
        border: Color::Rgb(255, 135, 145),
    };
}
