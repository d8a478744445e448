//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    // Background colors - deep space blue tints
    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    // Semantic colors - vibrant Galaxy palette
    pub const SUCCESS: Color = Color::Rgb(107, 203, 119);
    pub const WARNING: Color = Color::Rgb(255, 217, 61);
    pub const ERROR: Color = Color::Rgb(224, 108, 117);
    pub const INFO: Color = Color::Rgb(0, 217, 255);

    // Accent colors
    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style for every textarea
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Tab bar at the top of the screen
pub mod tabs {
    use super::*;

    pub const TITLE: Style = Style::new()
        .fg(palette::PINK)
        .add_modifier(Modifier::BOLD);
    pub const ACTIVE: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const INACTIVE: Color = palette::TEXT_MUTED;
    pub const KEY: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
}

/// Dashboard screen styles
pub mod dashboard {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;

    // Stat cards
    pub const STAT_LABEL: Color = palette::TEXT_MUTED;
    pub const STAT_TOTAL: Color = palette::INFO;
    pub const STAT_SENT: Color = palette::SUCCESS;
    pub const STAT_FAILED: Color = palette::ERROR;
    pub const STAT_PENDING: Color = palette::WARNING;

    // Filter buttons
    pub const FILTER_ACTIVE: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::PURPLE)
        .add_modifier(Modifier::BOLD);
    pub const FILTER_INACTIVE: Color = palette::TEXT_MUTED;
    pub const FILTER_KEY: Color = palette::PURPLE;

    // Table
    pub const HEADER: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const ROW: Color = palette::TEXT;
    pub const ROW_SELECTED_BG: Color = palette::BG_HOVER;
    pub const EMPTY: Color = palette::TEXT_DIM;
    pub const LOADING: Color = palette::TEXT_MUTED;

    // Detail overlay
    pub const DETAIL_BORDER: Color = palette::PURPLE;
    pub const DETAIL_LABEL: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const DETAIL_VALUE: Color = palette::TEXT;
    pub const DETAIL_CODE: Color = palette::WARNING;
    pub const DETAIL_ERROR: Color = palette::ERROR;
}

/// Status badge colors shared by the table and the detail overlay
pub mod status {
    use super::*;

    pub const SENT: Color = palette::SUCCESS;
    pub const FAILED: Color = palette::ERROR;
    pub const PENDING: Color = palette::WARNING;
}

/// Form styles (composer and template editor)
pub mod form {
    use super::*;

    pub const FIELD_ACTIVE_BORDER: Color = palette::WARNING;
    pub const FIELD_INACTIVE_BORDER: Color = palette::TEXT_DIM;
    pub const FIELD_TEXT: Color = palette::TEXT;
    pub const FIELD_BG: Color = palette::BG_DARK;
    pub const PLACEHOLDER_TEXT: Color = palette::TEXT_DIM;

    pub const SECTION_TITLE: Style = Style::new()
        .fg(palette::CYAN)
        .add_modifier(Modifier::BOLD);

    // `{{var}}` chips
    pub const SLOT: Color = palette::PURPLE;
    pub const SLOT_NONE: Color = palette::TEXT_DIM;

    // Buttons
    pub const BUTTON: Color = palette::TEXT_MUTED;
    pub const BUTTON_FOCUSED: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::WARNING)
        .add_modifier(Modifier::BOLD);
    pub const BUTTON_BUSY: Color = palette::TEXT_DIM;
}

/// Template manager styles
pub mod templates {
    use super::*;

    pub const BORDER: Color = palette::SUCCESS;
    pub const BACKGROUND: Color = palette::BG_DARK;

    pub const ITEM_NAME: Style = Style::new()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);
    pub const ITEM_SUBJECT: Color = palette::WARNING;
    pub const ITEM_BODY: Color = palette::TEXT_MUTED;
    pub const ITEM_DATE: Color = palette::TEXT_DIM;
    pub const ITEM_SELECTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_SELECTED_INDICATOR: Color = palette::SUCCESS;

    pub const EDITOR_BORDER: Color = palette::WARNING;
    pub const DELETE_BORDER: Color = palette::ERROR;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Alert styles (inline banners and toasts)
pub mod alert {
    use super::*;

    pub struct AlertColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const SUCCESS: AlertColors = AlertColors {
        fg: palette::BG_DARK,
        bg: palette::SUCCESS,
        border: Color::Rgb(140, 225, 150),
    };

    pub const WARNING: AlertColors = AlertColors {
        fg: palette::BG_DARK,
        bg: palette::WARNING,
        border: palette::WARNING,
    };

    pub const FAILURE: AlertColors = AlertColors {
        fg: palette::TEXT,
        bg: palette::ERROR,
        border: Color::Rgb(255, 135, 145),
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Border hint utilities - for building styled keyboard shortcuts on borders
pub mod border_hints {
    use super::*;
    use ratatui::text::{Line, Span};

    /// Build a single hint with key in full color and description dimmed
    pub fn hint(key: &'static str, desc: &'static str, color: Color) -> Vec<Span<'static>> {
        vec![
            Span::styled(key, Style::new().fg(color)),
            Span::styled(
                format!(" {} ", desc),
                Style::new().fg(color).add_modifier(Modifier::DIM),
            ),
        ]
    }

    /// Build a separator dot in dimmed color
    pub fn separator(color: Color) -> Span<'static> {
        Span::styled("• ", Style::new().fg(color).add_modifier(Modifier::DIM))
    }

    /// Build a line with multiple hints separated by dots
    pub fn build_hints(hints: &[(&'static str, &'static str)], color: Color) -> Line<'static> {
        let mut spans = vec![Span::raw(" ")];
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(separator(color));
            }
            spans.extend(hint(key, desc, color));
        }
        Line::from(spans)
    }
}
