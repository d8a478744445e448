use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
};

use crate::theme;

/// A `width` x `height` rect centered inside `area`, clamped to fit
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    Rect {
        x: area.x + (area.width.saturating_sub(popup_width)) / 2,
        y: area.y + (area.height.saturating_sub(popup_height)) / 2,
        width: popup_width,
        height: popup_height,
    }
}

/// Centered rect sized as a percentage of `area`
pub fn centered_percent(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = (area.height as u32 * percent_y.min(100) as u32 / 100) as u16;
    centered_popup(area, width, height)
}

pub fn inset_rect(area: Rect, horizontal_margin: u16, vertical_margin: u16) -> Rect {
    Rect {
        x: area.x + horizontal_margin,
        y: area.y + vertical_margin,
        width: area.width.saturating_sub(horizontal_margin * 2),
        height: area.height.saturating_sub(vertical_margin * 2),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

/// Clear `area` and draw a rounded popup frame; returns the inner rect
pub fn render_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    hints: &[(&'static str, &'static str)],
    border: ratatui::style::Color,
) -> Rect {
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default().fg(border).add_modifier(Modifier::BOLD),
        )))
        .title_bottom(theme::border_hints::build_hints(hints, border))
        .style(Style::default().bg(theme::palette::BG_DARK));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    #[test]
    fn test_centered_popup_basic() {
        let popup = centered_popup(rect(0, 0, 100, 50), 40, 20);
        assert_eq!(popup, rect(30, 15, 40, 20));
    }

    #[test]
    fn test_centered_popup_respects_area_origin() {
        let popup = centered_popup(rect(10, 4, 100, 50), 40, 20);
        assert_eq!(popup, rect(40, 19, 40, 20));
    }

    #[test]
    fn test_centered_popup_too_large_is_clamped() {
        let popup = centered_popup(rect(0, 0, 100, 50), 200, 100);
        assert_eq!(popup, rect(0, 0, 100, 50));
    }

    #[test]
    fn test_centered_percent() {
        let popup = centered_percent(rect(0, 0, 100, 40), 80, 50);
        assert_eq!(popup, rect(10, 10, 80, 20));

        let full = centered_percent(rect(0, 0, 100, 40), 150, 150);
        assert_eq!(full, rect(0, 0, 100, 40));
    }

    #[test]
    fn test_inset_rect_basic() {
        let inset = inset_rect(rect(10, 20, 100, 50), 5, 3);
        assert_eq!(inset, rect(15, 23, 90, 44));
    }

    #[test]
    fn test_inset_rect_saturates() {
        let inset = inset_rect(rect(0, 0, 10, 10), 20, 20);
        assert_eq!(inset.width, 0);
        assert_eq!(inset.height, 0);
    }
}
