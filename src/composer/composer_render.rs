//! Composer rendering: the send form and the quick test panel

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::composer_state::{ComposerField, ComposerState};
use crate::alert;
use crate::api::QuickTest;
use crate::theme;
use crate::widgets::field::render_field;

const FIELD_HEIGHT: u16 = 3;
const ALERT_HEIGHT: u16 = 3;
const PREVIEW_MAX_HEIGHT: u16 = 8;

pub fn render_composer(state: &mut ComposerState, frame: &mut Frame, area: Rect) {
    let [form_area, quick_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);

    render_form(state, frame, form_area);
    render_quick_test(state, frame, quick_area);
}

fn panel(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::palette::CYAN))
        .title(Span::styled(format!(" {} ", title), theme::form::SECTION_TITLE))
        .style(Style::default().bg(theme::palette::BG_DARK))
}

fn preview_height(state: &ComposerState) -> u16 {
    match state.selected_template() {
        Some(t) => t
            .body
            .lines()
            .count()
            .saturating_add(3)
            .min(PREVIEW_MAX_HEIGHT as usize) as u16,
        None => 0,
    }
}

fn render_form(state: &mut ComposerState, frame: &mut Frame, area: Rect) {
    let block = panel("Send Notification").title_bottom(theme::border_hints::build_hints(
        &[
            ("Tab", "Next field"),
            ("↑↓", "Template"),
            ("Enter", "Send"),
            ("Esc", "Dismiss"),
        ],
        theme::palette::CYAN,
    ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let alert_height = if state.alert.is_visible() {
        ALERT_HEIGHT
    } else {
        0
    };
    let preview_height = preview_height(state);
    // Whatever the fixed rows leave over; the field list scrolls inside it
    let variables_height = if state.selected_template().is_some() {
        let wanted = 1 + FIELD_HEIGHT as usize * state.variables().len().max(1);
        let available = inner
            .height
            .saturating_sub(alert_height + FIELD_HEIGHT * 2 + preview_height + 1);
        wanted.min(available as usize) as u16
    } else {
        0
    };

    let [
        alert_area,
        template_area,
        recipient_area,
        preview_area,
        variables_area,
        button_area,
        _,
    ] = Layout::vertical([
        Constraint::Length(alert_height),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(preview_height),
        Constraint::Length(variables_height),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    alert::render_inline(frame, alert_area, &state.alert);
    render_template_selector(state, frame, template_area);

    let recipient_focused = state.focus() == ComposerField::Recipient;
    render_field(
        frame,
        recipient_area,
        &mut state.recipient,
        "Recipient Email",
        recipient_focused,
    );

    render_preview(state, frame, preview_area);
    render_variables(state, frame, variables_area);
    render_send_button(state, frame, button_area);
}

fn render_template_selector(state: &ComposerState, frame: &mut Frame, area: Rect) {
    let focused = state.focus() == ComposerField::Template;
    let border = if focused {
        theme::form::FIELD_ACTIVE_BORDER
    } else {
        theme::form::FIELD_INACTIVE_BORDER
    };

    let content = match state.selected_template() {
        Some(t) => Span::styled(
            format!("◀ {} ▶", t.name),
            Style::default().fg(theme::form::FIELD_TEXT),
        ),
        None if state.is_loading_templates() => Span::styled(
            "Loading templates...",
            Style::default().fg(theme::form::PLACEHOLDER_TEXT),
        ),
        None if state.templates().is_empty() => Span::styled(
            "No templates available",
            Style::default().fg(theme::form::PLACEHOLDER_TEXT),
        ),
        None => Span::styled(
            "Select a template",
            Style::default().fg(theme::form::PLACEHOLDER_TEXT),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" Template ", Style::default().fg(border)))
        .style(Style::default().bg(theme::form::FIELD_BG));

    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}

fn render_preview(state: &ComposerState, frame: &mut Frame, area: Rect) {
    let Some(template) = state.selected_template() else {
        return;
    };
    if area.height == 0 {
        return;
    }

    let mut lines = vec![Line::from(vec![
        Span::styled("Subject: ", theme::form::SECTION_TITLE),
        Span::styled(
            template.subject.clone(),
            Style::default().fg(theme::form::FIELD_TEXT),
        ),
    ])];
    lines.extend(template.body.lines().map(|l| {
        Line::from(Span::styled(
            l.to_string(),
            Style::default().fg(theme::palette::TEXT_MUTED),
        ))
    }));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::form::FIELD_INACTIVE_BORDER))
        .title(Span::styled(" Template Preview ", theme::form::SECTION_TITLE));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// First slot index to draw so the focused slot stays in view
fn variables_window_start(focus: ComposerField, visible: usize) -> usize {
    match focus {
        ComposerField::Variable(index) if index >= visible => index + 1 - visible,
        _ => 0,
    }
}

fn render_variables(state: &mut ComposerState, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let [header_area, fields_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let total = state.variables().len();
    let visible = ((fields_area.height / FIELD_HEIGHT) as usize).max(1).min(total.max(1));
    let focus = state.focus();
    let start = variables_window_start(focus, visible);

    let header = if total > visible {
        format!(
            " Template Variables ({}-{} of {})",
            start + 1,
            start + visible,
            total
        )
    } else {
        " Template Variables".to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(header, theme::form::SECTION_TITLE)),
        header_area,
    );

    if total == 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                " This template has no variables",
                Style::default().fg(theme::form::SLOT_NONE),
            )),
            fields_area,
        );
        return;
    }

    let rows = Layout::vertical(vec![Constraint::Length(FIELD_HEIGHT); visible]).split(fields_area);

    for (row, index) in rows.iter().zip(start..start + visible) {
        let Some(name) = state.variables().get(index).map(|v| v.name.clone()) else {
            continue;
        };
        let focused = focus == ComposerField::Variable(index);
        if let Some(textarea) = state.variable_mut(index) {
            render_field(frame, *row, textarea, &format!("{{{{{}}}}}", name), focused);
        }
    }
}

fn render_send_button(state: &ComposerState, frame: &mut Frame, area: Rect) {
    let label = if state.is_submitting() {
        Span::styled(
            " Sending... ",
            Style::default().fg(theme::form::BUTTON_BUSY),
        )
    } else {
        Span::styled(
            " Send Notification ",
            Style::default()
                .fg(theme::form::BUTTON)
                .add_modifier(Modifier::BOLD),
        )
    };
    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), label])), area);
}

fn render_quick_test(state: &ComposerState, frame: &mut Frame, area: Rect) {
    let block = panel("Quick Test");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let muted = Style::default().fg(theme::palette::TEXT_MUTED);
    let mut lines = vec![
        Line::from(Span::styled("Send test emails with predefined data", muted)),
        Line::default(),
    ];

    for test in QuickTest::ALL {
        let label = format!(" {} ", test.label());
        let style = if state.is_submitting() {
            Style::default().fg(theme::form::BUTTON_BUSY)
        } else if state.focus() == ComposerField::QuickTest(test) {
            theme::form::BUTTON_FOCUSED
        } else {
            Style::default().fg(theme::form::BUTTON)
        };
        lines.push(Line::from(Span::styled(label, style)));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled(
        "Note: test emails go to predefined addresses:",
        muted,
    )));
    lines.push(Line::from(Span::styled(
        format!("  Welcome: {}", QuickTest::Welcome.recipient()),
        muted,
    )));
    lines.push(Line::from(Span::styled(
        format!("  Order: {}", QuickTest::OrderConfirmation.recipient()),
        muted,
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

#[cfg(test)]
#[path = "composer_render_tests.rs"]
mod composer_render_tests;
