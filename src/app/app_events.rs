use std::io;
use std::time::{Duration, Instant};

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::{ActiveScreen, App, Screen};
use crate::composer::{self, ComposerField};
use crate::dashboard;
use crate::templates::{self, EditorField, TemplateMode};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        self.poll_responses();
        self.tick(Instant::now());

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Paste(text) => {
                    self.handle_paste_event(&text);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match &mut self.screen {
            ActiveScreen::Dashboard(state) => {
                dashboard::handle_dashboard_key(state, &mut self.api, key)
            }
            ActiveScreen::Compose(state) => composer::handle_composer_key(state, &mut self.api, key),
            ActiveScreen::Templates(state) => {
                templates::handle_templates_key(state, &mut self.api, key)
            }
        }
    }

    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                true
            }
            KeyCode::F(n) => match Screen::ALL.into_iter().find(|s| s.function_key() == n) {
                Some(screen) => {
                    self.switch_to(screen);
                    true
                }
                None => false,
            },
            KeyCode::Char('q')
                if !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !self.screen.captures_input() =>
            {
                self.should_quit = true;
                true
            }
            _ => false,
        }
    }

    /// Paste into whichever text field has focus
    ///
    /// Only the template body keeps line breaks.
    pub fn handle_paste_event(&mut self, text: &str) {
        match &mut self.screen {
            ActiveScreen::Compose(state) => match state.focus() {
                ComposerField::Recipient => {
                    state.recipient.insert_str(single_line(text));
                }
                ComposerField::Variable(index) => {
                    if let Some(textarea) = state.variable_mut(index) {
                        textarea.insert_str(single_line(text));
                    }
                }
                _ => {}
            },
            ActiveScreen::Templates(state) if state.mode() == &TemplateMode::Editor => {
                let text = if state.field() == EditorField::Body {
                    text.replace("\r\n", "\n")
                } else {
                    single_line(text)
                };
                state.active_textarea_mut().insert_str(text);
            }
            _ => {}
        }
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
