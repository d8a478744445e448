//! Dashboard rendering: stat cards, filter bar, notification table, detail overlay

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::dashboard_state::DashboardState;
use crate::api::{Notification, NotificationStatus, StatusFilter, format_timestamp};
use crate::theme;
use crate::widgets::popup;

const STAT_CARD_HEIGHT: u16 = 4;

pub fn status_color(status: NotificationStatus) -> Color {
    match status {
        NotificationStatus::Sent => theme::status::SENT,
        NotificationStatus::Failed => theme::status::FAILED,
        NotificationStatus::Pending => theme::status::PENDING,
    }
}

pub fn render_dashboard(state: &mut DashboardState, frame: &mut Frame, area: Rect) {
    let [stats_area, filter_area, table_area] = Layout::vertical([
        Constraint::Length(STAT_CARD_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    render_stats(state, frame, stats_area);
    render_filter_bar(state.filter(), frame, filter_area);
    render_table(state, frame, table_area);

    if state.detail().is_some() {
        render_detail(state, frame, area);
    }
}

fn render_stats(state: &DashboardState, frame: &mut Frame, area: Rect) {
    let cards = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(area);
    let stats = state.stats;
    let values = [
        ("Total", stats.total_notifications, theme::dashboard::STAT_TOTAL),
        ("Sent", stats.sent_notifications, theme::dashboard::STAT_SENT),
        ("Failed", stats.failed_notifications, theme::dashboard::STAT_FAILED),
        ("Pending", stats.pending_notifications, theme::dashboard::STAT_PENDING),
    ];

    for ((label, value, color), card) in values.into_iter().zip(cards.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .title(Span::styled(
                format!(" {} ", label),
                Style::default().fg(theme::dashboard::STAT_LABEL),
            ))
            .style(Style::default().bg(theme::dashboard::BACKGROUND));

        let text = Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);

        frame.render_widget(Paragraph::new(text).block(block), *card);
    }
}

fn filter_key(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "a",
        StatusFilter::Sent => "s",
        StatusFilter::Failed => "f",
        StatusFilter::Pending => "p",
    }
}

fn render_filter_bar(active: StatusFilter, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        " Filter: ",
        Style::default().fg(theme::dashboard::STAT_LABEL),
    )];

    for filter in StatusFilter::ALL {
        spans.push(Span::styled(
            filter_key(filter),
            Style::default().fg(theme::dashboard::FILTER_KEY),
        ));
        let label = format!(" {} ", filter.label());
        if filter == active {
            spans.push(Span::styled(label, theme::dashboard::FILTER_ACTIVE));
        } else {
            spans.push(Span::styled(
                label,
                Style::default().fg(theme::dashboard::FILTER_INACTIVE),
            ));
        }
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(state: &mut DashboardState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::dashboard::BORDER))
        .title(Span::styled(
            format!(" Notifications ({}) ", state.filter().label()),
            Style::default()
                .fg(theme::dashboard::BORDER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(theme::border_hints::build_hints(
            &[("↑↓", "Select"), ("Enter", "Details"), ("r", "Refresh")],
            theme::dashboard::BORDER,
        ))
        .style(Style::default().bg(theme::dashboard::BACKGROUND));

    if state.notifications().is_empty() {
        let (message, color) = if state.is_loading() {
            ("Loading...", theme::dashboard::LOADING)
        } else {
            ("No notifications found", theme::dashboard::EMPTY)
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["ID", "Recipient", "Template", "Status", "Created", "Sent"])
        .style(theme::dashboard::HEADER);

    let rows: Vec<Row> = state
        .notifications()
        .iter()
        .map(|n| {
            Row::new(vec![
                Cell::from(n.id.to_string()),
                Cell::from(n.recipient.clone()),
                Cell::from(n.template.name.clone()),
                Cell::from(Span::styled(
                    n.status.label(),
                    Style::default()
                        .fg(status_color(n.status))
                        .add_modifier(Modifier::BOLD),
                )),
                Cell::from(format_timestamp(n.created_at.as_ref())),
                Cell::from(format_timestamp(n.sent_at.as_ref())),
            ])
            .style(Style::default().fg(theme::dashboard::ROW))
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(19),
        Constraint::Length(19),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(theme::dashboard::ROW_SELECTED_BG))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut state.table_state);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, theme::dashboard::DETAIL_LABEL))
}

fn field(label: &'static str, value: String, value_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<11}", label),
            Style::default().fg(theme::dashboard::STAT_LABEL),
        ),
        Span::styled(value, value_style),
    ])
}

fn indented(text: &str, color: Color) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::from(Span::styled(format!("  {}", line), Style::default().fg(color))))
        .collect()
}

/// Lines of the detail overlay for `notification`
pub fn build_detail_lines(notification: &Notification) -> Vec<Line<'static>> {
    let value = Style::default().fg(theme::dashboard::DETAIL_VALUE);
    let mut lines = vec![
        section("Basic Information"),
        field("ID:", notification.id.to_string(), value),
        field("Recipient:", notification.recipient.clone(), value),
        field(
            "Status:",
            notification.status.label().to_string(),
            Style::default()
                .fg(status_color(notification.status))
                .add_modifier(Modifier::BOLD),
        ),
        field(
            "Created:",
            format_timestamp(notification.created_at.as_ref()),
            value,
        ),
        field(
            "Sent:",
            format_timestamp(notification.sent_at.as_ref()),
            value,
        ),
        Line::default(),
        section("Template"),
        field("Name:", notification.template.name.clone(), value),
        field("Subject:", notification.template.subject.clone(), value),
        Line::default(),
        section("Variables"),
    ];

    lines.extend(indented(
        &notification.pretty_variables(),
        theme::dashboard::DETAIL_CODE,
    ));
    lines.push(Line::default());
    lines.push(section("Template Body"));
    lines.extend(indented(
        &notification.template.body,
        theme::dashboard::DETAIL_VALUE,
    ));

    if let Some(error) = notification
        .error_message
        .as_deref()
        .filter(|e| !e.is_empty())
    {
        lines.push(Line::default());
        lines.push(section("Error"));
        lines.extend(indented(error, theme::dashboard::DETAIL_ERROR));
    }

    lines
}

fn render_detail(state: &mut DashboardState, frame: &mut Frame, area: Rect) {
    let Some(notification) = state.detail() else {
        return;
    };
    let title = format!("Notification #{}", notification.id);
    let lines = build_detail_lines(notification);

    let popup_area = popup::centered_percent(area, 80, 85);
    let inner = popup::render_frame(
        frame,
        popup_area,
        &title,
        &[("Esc", "Close"), ("↑↓", "Scroll")],
        theme::dashboard::DETAIL_BORDER,
    );
    let content = popup::inset_rect(inner, 1, 0);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    // Bounds count wrapped rows, not source lines
    state
        .detail_scroll
        .update_bounds(paragraph.line_count(content.width), content.height);
    let paragraph = paragraph.scroll((state.detail_scroll.offset, 0));
    frame.render_widget(paragraph, content);
}

#[cfg(test)]
#[path = "dashboard_render_tests.rs"]
mod dashboard_render_tests;
