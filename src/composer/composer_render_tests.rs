//! Tests for composer_render

use super::*;
use crate::api::{ApiHandle, ApiPayload, ApiRequest};
use crate::test_utils::test_helpers::{FakeWorker, reply, template, test_api};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn render_to_string(state: &mut ComposerState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|f| render_composer(state, f, f.area()))
        .unwrap();
    terminal.backend().to_string()
}

fn mounted() -> (ComposerState, ApiHandle, FakeWorker) {
    let (mut api, mut worker) = test_api();
    let mut state = ComposerState::mount(&mut api);
    let job = worker.expect_job(|r| *r == ApiRequest::Templates);
    state.handle_response(reply(
        &job,
        ApiPayload::Templates(Ok(vec![
            template(1, "welcome", "Welcome {{name}}", "Hi {{name}}, code {{code}}"),
            template(2, "plain", "Hello", "No variables"),
        ])),
    ));
    (state, api, worker)
}

#[test]
fn test_loading_templates_placeholder() {
    let (mut api, _worker) = test_api();
    let mut state = ComposerState::mount(&mut api);
    let output = render_to_string(&mut state, 120, 40);
    assert!(output.contains("Loading templates..."));
}

#[test]
fn test_initial_form() {
    let (mut state, _api, _worker) = mounted();
    let output = render_to_string(&mut state, 120, 40);

    assert!(output.contains("Send Notification"));
    assert!(output.contains("Select a template"));
    assert!(output.contains("Recipient Email"));
    assert!(output.contains("recipient@example.com"));
    assert!(!output.contains("Template Variables"));
}

#[test]
fn test_selected_template_shows_preview_and_variable_fields() {
    let (mut state, _api, _worker) = mounted();
    state.select_template(Some(0));
    let output = render_to_string(&mut state, 120, 40);

    assert!(output.contains("◀ welcome ▶"));
    assert!(output.contains("Template Preview"));
    assert!(output.contains("Subject: Welcome {{name}}"));
    assert!(output.contains("Template Variables"));
    assert!(output.contains("{{name}}"));
    assert!(output.contains("{{code}}"));
}

#[test]
fn test_template_without_variables_note() {
    let (mut state, _api, _worker) = mounted();
    state.select_template(Some(1));
    let output = render_to_string(&mut state, 120, 40);
    assert!(output.contains("This template has no variables"));
}

#[test]
fn test_quick_test_panel() {
    let (mut state, _api, _worker) = mounted();
    let output = render_to_string(&mut state, 120, 40);

    assert!(output.contains("Quick Test"));
    assert!(output.contains("Test Welcome Email"));
    assert!(output.contains("Test Order Confirmation"));
    assert!(output.contains("test@example.com"));
    assert!(output.contains("customer@example.com"));
}

#[test]
fn test_alert_and_busy_button() {
    let (mut state, mut api, _worker) = mounted();
    state.select_template(Some(1));
    state.recipient.insert_str("ann@example.com");
    state.submit(&mut api);

    let output = render_to_string(&mut state, 120, 40);
    assert!(output.contains("Sending..."));

    state.alert.show_failure("Template not found");
    let output = render_to_string(&mut state, 120, 40);
    assert!(output.contains("Template not found"));
}

fn mounted_with(templates: Vec<crate::api::Template>) -> ComposerState {
    let (mut api, mut worker) = test_api();
    let mut state = ComposerState::mount(&mut api);
    let job = worker.expect_job(|r| *r == ApiRequest::Templates);
    state.handle_response(reply(&job, ApiPayload::Templates(Ok(templates))));
    state
}

#[test]
fn test_focused_variable_past_the_fold_stays_visible() {
    let body: String = (0..12).map(|i| format!("{{{{v{}}}}} ", i)).collect();
    let mut state = mounted_with(vec![template(3, "many", "Many", &body)]);
    state.select_template(Some(0));
    for _ in 0..13 {
        state.focus_next();
    }
    assert_eq!(state.focus(), ComposerField::Variable(11));
    if let Some(textarea) = state.variable_mut(11) {
        textarea.insert_str("ZZTOP");
    }

    let output = render_to_string(&mut state, 120, 40);

    assert!(output.contains("ZZTOP"));
    assert!(output.contains("Template Variables (5-12 of 12)"));
    assert!(!output.contains("Enter value for v0"));
}

#[test]
fn test_variables_window_start_follows_focus() {
    assert_eq!(variables_window_start(ComposerField::Template, 4), 0);
    assert_eq!(variables_window_start(ComposerField::Variable(3), 4), 0);
    assert_eq!(variables_window_start(ComposerField::Variable(4), 4), 1);
    assert_eq!(variables_window_start(ComposerField::Variable(11), 8), 4);
}

#[test]
fn test_very_long_template_body_renders() {
    let body = "x\n".repeat(usize::from(u16::MAX));
    let mut state = mounted_with(vec![template(4, "huge", "Huge", &body)]);
    state.select_template(Some(0));

    let output = render_to_string(&mut state, 120, 40);

    assert!(output.contains("Template Preview"));
    assert!(output.contains("This template has no variables"));
}
