//! Text field helpers built on tui-textarea

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};
use tui_textarea::{CursorMove, TextArea};

use crate::theme;

pub fn create_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea
}

/// A textarea pre-filled with `text`, cursor at the end
pub fn textarea_with_text(text: &str) -> TextArea<'static> {
    let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
    let mut textarea = TextArea::new(lines);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

/// Field content with lines joined by `\n`
pub fn textarea_text(textarea: &TextArea) -> String {
    textarea.lines().join("\n")
}

/// Draw a bordered field; the cursor is only shown while focused
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    textarea: &mut TextArea<'static>,
    title: &str,
    focused: bool,
) {
    let border = if focused {
        theme::form::FIELD_ACTIVE_BORDER
    } else {
        theme::form::FIELD_INACTIVE_BORDER
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Line::from(Span::styled(
                format!(" {} ", title),
                Style::default().fg(border),
            )))
            .style(Style::default().bg(theme::form::FIELD_BG)),
    );
    textarea.set_style(Style::default().fg(theme::form::FIELD_TEXT));
    textarea.set_placeholder_style(Style::default().fg(theme::form::PLACEHOLDER_TEXT));
    if focused {
        textarea.set_cursor_style(theme::palette::CURSOR);
    } else {
        textarea.set_cursor_style(Style::default());
    }

    frame.render_widget(&*textarea, area);
}
