//! Tests for alert_render

use super::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;

fn create_test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).unwrap()
}

fn render_toast_to_string(alert: &mut AlertState, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal(width, height);
    terminal.draw(|f| render_toast(f, alert)).unwrap();
    terminal.backend().to_string()
}

fn render_inline_to_string(alert: &AlertState, width: u16) -> String {
    let mut terminal = create_test_terminal(width, 3);
    terminal
        .draw(|f| render_inline(f, f.area(), alert))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_toast_shows_message_in_top_right() {
    let mut alert = AlertState::new();
    alert.show_warning("Invalid config");

    let output = render_toast_to_string(&mut alert, 80, 24);
    let line = output
        .lines()
        .find(|l| l.contains("Invalid config"))
        .expect("toast line");
    let column = line.find("Invalid config").unwrap();
    assert!(column > 40, "toast should sit on the right: {}", line);
}

#[test]
fn test_toast_without_alert_renders_nothing() {
    let mut alert = AlertState::new();
    let output = render_toast_to_string(&mut alert, 80, 24);
    assert!(output.chars().all(|c| c == ' ' || c == '"' || c == '\n'));
}

#[test]
fn test_toast_skipped_on_tiny_terminal() {
    let mut alert = AlertState::new();
    alert.show_warning("Invalid config");
    let output = render_toast_to_string(&mut alert, 6, 4);
    assert!(!output.contains("Invalid"));
}

#[test]
fn test_inline_success_banner() {
    let mut alert = AlertState::new();
    alert.show_success("Notification sent successfully! ID: 42");

    let output = render_inline_to_string(&alert, 60);
    assert!(output.contains("✓ Notification sent successfully! ID: 42"));
    assert!(output.contains("Esc dismiss"));
}

#[test]
fn test_inline_failure_banner() {
    let mut alert = AlertState::new();
    alert.show_failure("Template not found");

    let output = render_inline_to_string(&alert, 60);
    assert!(output.contains("✗ Template not found"));
}

#[test]
fn test_inline_hidden_without_alert() {
    let alert = AlertState::new();
    let output = render_inline_to_string(&alert, 40);
    assert!(!output.contains("dismiss"));
}
