use ratatui::crossterm::event::{KeyCode, KeyEvent};
use tui_textarea::Input;

use super::composer_state::{ComposerField, ComposerState};
use crate::api::ApiHandle;

pub fn handle_composer_key(state: &mut ComposerState, api: &mut ApiHandle, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.alert.dismiss();
            return;
        }
        KeyCode::Tab => {
            state.focus_next();
            return;
        }
        KeyCode::BackTab => {
            state.focus_prev();
            return;
        }
        KeyCode::Enter => {
            match state.focus() {
                ComposerField::QuickTest(test) => state.send_quick_test(test, api),
                _ => state.submit(api),
            }
            return;
        }
        _ => {}
    }

    match state.focus() {
        ComposerField::Template => match key.code {
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => state.select_next_template(),
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => state.select_prev_template(),
            _ => {}
        },
        ComposerField::Recipient => {
            state.recipient.input(Input::from(key));
        }
        ComposerField::Variable(index) => {
            if let Some(textarea) = state.variable_mut(index) {
                textarea.input(Input::from(key));
            }
        }
        ComposerField::QuickTest(_) => match key.code {
            KeyCode::Down | KeyCode::Right => state.focus_next(),
            KeyCode::Up | KeyCode::Left => state.focus_prev(),
            _ => {}
        },
    }
}

#[cfg(test)]
#[path = "composer_events_tests.rs"]
mod composer_events_tests;
