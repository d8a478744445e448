use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::{ActiveScreen, App, Screen};
use crate::alert::render_toast;
use crate::composer::{self, ComposerField};
use crate::dashboard;
use crate::templates::{self, TemplateMode};
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let [tabs_area, body_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        render_tab_bar(self.current_screen(), self.server_label(), frame, tabs_area);

        match &mut self.screen {
            ActiveScreen::Dashboard(state) => dashboard::render_dashboard(state, frame, body_area),
            ActiveScreen::Compose(state) => composer::render_composer(state, frame, body_area),
            ActiveScreen::Templates(state) => templates::render_templates(state, frame, body_area),
        }

        render_help_line(&self.screen, frame, help_area);
        render_toast(frame, &mut self.toast);
    }
}

fn render_tab_bar(active: Screen, server: &str, frame: &mut Frame, area: Rect) {
    let background = Style::default().bg(theme::tabs::BACKGROUND);
    let mut spans = vec![Span::styled(" NotifyMe ", theme::tabs::TITLE), Span::raw(" ")];

    for screen in Screen::ALL {
        spans.push(Span::styled(
            format!("F{} ", screen.function_key()),
            Style::default().fg(theme::tabs::KEY),
        ));
        let label = format!(" {} ", screen.title());
        if screen == active {
            spans.push(Span::styled(label, theme::tabs::ACTIVE));
        } else {
            spans.push(Span::styled(
                label,
                Style::default().fg(theme::tabs::INACTIVE),
            ));
        }
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(background), area);

    let server = Paragraph::new(Line::from(Span::styled(
        format!("{} ", server),
        Style::default().fg(theme::tabs::KEY),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(server, area);
}

fn context_hints(screen: &ActiveScreen) -> Vec<(&'static str, &'static str)> {
    match screen {
        ActiveScreen::Dashboard(state) if state.detail().is_some() => {
            hints!["Esc" => "Close", "↑↓" => "Scroll", "Ctrl+C" => "Quit"]
        }
        ActiveScreen::Dashboard(_) => {
            hints!["F1-F3" => "Screens", "a/s/f/p" => "Filter", "Enter" => "Details", "r" => "Refresh", "q" => "Quit"]
        }
        ActiveScreen::Compose(state) => match state.focus() {
            ComposerField::Template => {
                hints!["F1-F3" => "Screens", "↑↓" => "Template", "Tab" => "Next Field", "Enter" => "Send", "q" => "Quit"]
            }
            ComposerField::QuickTest(_) => {
                hints!["F1-F3" => "Screens", "Enter" => "Send Test", "Tab" => "Next Field", "q" => "Quit"]
            }
            _ => hints!["F1-F3" => "Screens", "Tab" => "Next Field", "Enter" => "Send", "Ctrl+C" => "Quit"],
        },
        ActiveScreen::Templates(state) => match state.mode() {
            TemplateMode::Browse => {
                hints!["F1-F3" => "Screens", "n" => "New", "e" => "Edit", "d" => "Delete", "q" => "Quit"]
            }
            TemplateMode::Editor => {
                hints!["Tab" => "Next Field", "Ctrl+S" => "Save", "Esc" => "Cancel", "Ctrl+C" => "Quit"]
            }
            TemplateMode::ConfirmDelete { .. } => {
                hints!["y" => "Delete", "n" => "Cancel", "Ctrl+C" => "Quit"]
            }
        },
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let mut spans = Vec::with_capacity(hints.len() * 4 + 1);
    spans.push(Span::raw(" "));

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{2022} ", sep_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, desc_style));
    }

    spans
}

fn render_help_line(screen: &ActiveScreen, frame: &mut Frame, area: Rect) {
    let hints = context_hints(screen);
    frame.render_widget(Paragraph::new(Line::from(build_styled_spans(&hints))), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
