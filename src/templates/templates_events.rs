use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::Input;

use super::templates_state::{EditorField, TemplateMode, TemplatesState};
use crate::api::ApiHandle;

pub fn handle_templates_key(state: &mut TemplatesState, api: &mut ApiHandle, key: KeyEvent) {
    match state.mode() {
        TemplateMode::Browse => handle_browse_mode(state, api, key),
        TemplateMode::Editor => handle_editor_mode(state, api, key),
        TemplateMode::ConfirmDelete { .. } => handle_confirm_delete_mode(state, api, key),
    }
}

fn handle_browse_mode(state: &mut TemplatesState, api: &mut ApiHandle, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.alert.dismiss(),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Char('n') => state.open_create(),
        KeyCode::Char('e') | KeyCode::Enter => state.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => state.request_delete(),
        KeyCode::Char('r') => state.reload(api),
        _ => {}
    }
}

fn handle_editor_mode(state: &mut TemplatesState, api: &mut ApiHandle, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.close_editor(),
        KeyCode::Tab => state.next_field(),
        KeyCode::BackTab => state.prev_field(),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => state.save(api),
        // Single-line fields submit on Enter; the body takes newlines
        KeyCode::Enter if state.field() != EditorField::Body => state.save(api),
        _ => {
            state.active_textarea_mut().input(Input::from(key));
        }
    }
}

fn handle_confirm_delete_mode(state: &mut TemplatesState, api: &mut ApiHandle, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => state.confirm_delete(api),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.cancel_delete(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "templates_events_tests.rs"]
mod templates_events_tests;
