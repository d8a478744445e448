//! Alert rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::alert_state::{AlertKind, AlertState};
use crate::widgets::popup;

fn prefix(kind: AlertKind) -> &'static str {
    match kind {
        AlertKind::Success => "✓",
        AlertKind::Failure => "✗",
        AlertKind::Warning => "!",
    }
}

/// Render a screen's alert as a bordered banner filling `area`
///
/// Draws nothing when no alert is visible.
pub fn render_inline(frame: &mut Frame, area: Rect, alert: &AlertState) {
    let Some(current) = alert.current() else {
        return;
    };
    if area.width < 5 || area.height < 3 {
        return;
    }

    let colors = current.kind.colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .title_bottom(Line::from(Span::styled(
            " Esc dismiss ",
            Style::default()
                .fg(colors.fg)
                .bg(colors.bg)
                .add_modifier(Modifier::DIM),
        )))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} {} ", prefix(current.kind), current.message),
        Style::default()
            .fg(colors.fg)
            .bg(colors.bg)
            .add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

/// Render the alert as a toast in the top-right corner of the frame
///
/// Call after the main UI so the toast sits on top. Expired alerts are
/// cleared first.
pub fn render_toast(frame: &mut Frame, alert: &mut AlertState) {
    alert.clear_if_expired();

    let Some(current) = alert.current() else {
        return;
    };

    let content_width = current.message.chars().count() as u16 + 2;
    let toast_width = content_width + 4;
    let toast_height = 3;

    let frame_area = frame.area();
    let margin = 2;
    let toast_area = Rect {
        x: frame_area.width.saturating_sub(toast_width + margin),
        y: margin,
        width: toast_width.min(frame_area.width.saturating_sub(margin * 2)),
        height: toast_height.min(frame_area.height.saturating_sub(margin * 2)),
    };

    if toast_area.width < 5 || toast_area.height < 3 {
        return;
    }

    popup::clear_area(frame, toast_area);

    let colors = current.kind.colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border).bg(colors.bg))
        .style(Style::default().bg(colors.bg));

    let text = Line::from(Span::styled(
        format!(" {} {} ", prefix(current.kind), current.message),
        Style::default().fg(colors.fg).bg(colors.bg),
    ));

    frame.render_widget(Paragraph::new(text).block(block), toast_area);
}

#[cfg(test)]
#[path = "alert_render_tests.rs"]
mod alert_render_tests;
