//! Template manager rendering: list, editor popup, delete prompt

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Wrap},
};

use super::templates_state::{EditorField, TemplateMode, TemplatesState};
use crate::alert;
use crate::api::{Template, format_timestamp};
use crate::placeholders;
use crate::theme;
use crate::widgets::field::render_field;
use crate::widgets::popup;

const ALERT_HEIGHT: u16 = 3;
const FIELD_HEIGHT: u16 = 3;
const EDITOR_WIDTH: u16 = 80;
const EDITOR_HEIGHT: u16 = 26;
const CONFIRM_WIDTH: u16 = 50;
const CONFIRM_HEIGHT: u16 = 7;

pub fn render_templates(state: &mut TemplatesState, frame: &mut Frame, area: Rect) {
    let alert_height = if state.mode() == &TemplateMode::Browse && state.alert.is_visible() {
        ALERT_HEIGHT
    } else {
        0
    };
    let [alert_area, list_area] =
        Layout::vertical([Constraint::Length(alert_height), Constraint::Min(3)]).areas(area);

    if alert_height > 0 {
        alert::render_inline(frame, alert_area, &state.alert);
    }
    render_list(state, frame, list_area);

    match state.mode().clone() {
        TemplateMode::Browse => {}
        TemplateMode::Editor => render_editor(state, frame, area),
        TemplateMode::ConfirmDelete { name, .. } => render_confirm_delete(&name, frame, area),
    }
}

/// `{{slot}}` badges, or "None"
fn slot_badges(slots: &[String]) -> Line<'static> {
    if slots.is_empty() {
        return Line::from(Span::styled(
            "None",
            Style::default().fg(theme::form::SLOT_NONE),
        ));
    }
    let spans: Vec<Span> = slots
        .iter()
        .flat_map(|slot| {
            [
                Span::styled(
                    format!("{{{{{}}}}}", slot),
                    Style::default().fg(theme::form::SLOT),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn template_row(template: &Template) -> Row<'static> {
    let slots = placeholders::template_slots(&template.subject, &template.body);
    Row::new(vec![
        Cell::from(Span::styled(template.name.clone(), theme::templates::ITEM_NAME)),
        Cell::from(Span::styled(
            template.subject.clone(),
            Style::default().fg(theme::templates::ITEM_SUBJECT),
        )),
        Cell::from(slot_badges(&slots)),
        Cell::from(Span::styled(
            format_timestamp(template.created_at.as_ref()),
            Style::default().fg(theme::templates::ITEM_DATE),
        )),
    ])
}

fn render_list(state: &mut TemplatesState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::templates::BORDER))
        .title(Span::styled(
            format!(" Email Templates ({}) ", state.templates().len()),
            Style::default()
                .fg(theme::templates::BORDER)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(theme::border_hints::build_hints(
            &[
                ("n", "New"),
                ("e", "Edit"),
                ("d", "Delete"),
                ("r", "Reload"),
            ],
            theme::templates::BORDER,
        ))
        .style(Style::default().bg(theme::templates::BACKGROUND));

    if state.templates().is_empty() {
        let message = if state.is_loading() {
            "Loading..."
        } else {
            "No templates found. Press n to create one"
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(theme::templates::EMPTY),
        )))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["Name", "Subject", "Variables", "Created"])
        .style(theme::dashboard::HEADER);
    let rows: Vec<Row> = state.templates().iter().map(template_row).collect();
    let widths = [
        Constraint::Fill(1),
        Constraint::Fill(2),
        Constraint::Fill(2),
        Constraint::Length(19),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().bg(theme::templates::ITEM_SELECTED_BG))
        .highlight_symbol(Span::styled(
            "▌ ",
            Style::default().fg(theme::templates::ITEM_SELECTED_INDICATOR),
        ));

    frame.render_stateful_widget(table, area, &mut state.table_state);
}

fn render_editor(state: &mut TemplatesState, frame: &mut Frame, area: Rect) {
    let title = if state.editing().is_some() {
        "Edit Template"
    } else {
        "Create New Template"
    };
    let hints: &[(&'static str, &'static str)] = if state.is_saving() {
        &[("", "Saving...")]
    } else {
        &[("Tab", "Next field"), ("Ctrl+S", "Save"), ("Esc", "Cancel")]
    };

    let popup_area = popup::centered_popup(area, EDITOR_WIDTH, EDITOR_HEIGHT);
    let inner = popup::render_frame(
        frame,
        popup_area,
        title,
        hints,
        theme::templates::EDITOR_BORDER,
    );

    let alert_height = if state.alert.is_visible() {
        ALERT_HEIGHT
    } else {
        0
    };
    let [alert_area, name_area, subject_area, body_area, slots_area] = Layout::vertical([
        Constraint::Length(alert_height),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Length(FIELD_HEIGHT),
        Constraint::Min(FIELD_HEIGHT),
        Constraint::Length(1),
    ])
    .areas(inner);

    alert::render_inline(frame, alert_area, &state.alert);

    let field = state.field();
    render_field(
        frame,
        name_area,
        &mut state.name,
        "Template Name",
        field == EditorField::Name,
    );
    render_field(
        frame,
        subject_area,
        &mut state.subject,
        "Subject",
        field == EditorField::Subject,
    );
    render_field(
        frame,
        body_area,
        &mut state.body,
        "Body",
        field == EditorField::Body,
    );

    let mut slots = vec![Span::styled(
        " Detected variables: ",
        Style::default().fg(theme::palette::TEXT_MUTED),
    )];
    slots.extend(slot_badges(&state.editor_slots()).spans);
    frame.render_widget(Paragraph::new(Line::from(slots)), slots_area);
}

fn render_confirm_delete(name: &str, frame: &mut Frame, area: Rect) {
    let popup_area = popup::centered_popup(area, CONFIRM_WIDTH, CONFIRM_HEIGHT);
    let inner = popup::render_frame(
        frame,
        popup_area,
        "Delete Template",
        &[("y", "Delete"), ("n", "Cancel")],
        theme::templates::DELETE_BORDER,
    );

    let lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(
                "Delete template ",
                Style::default().fg(theme::palette::TEXT),
            ),
            Span::styled(name.to_string(), theme::templates::ITEM_NAME),
            Span::styled("?", Style::default().fg(theme::palette::TEXT)),
        ]),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(theme::palette::TEXT_MUTED),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        inner,
    );
}

#[cfg(test)]
#[path = "templates_render_tests.rs"]
mod templates_render_tests;
