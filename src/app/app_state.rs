use std::time::{Duration, Instant};

use crate::alert::AlertState;
use crate::api::ApiHandle;
use crate::composer::ComposerState;
use crate::config::Config;
use crate::dashboard::DashboardState;
use crate::templates::TemplatesState;

pub const WORKER_LOST: &str = "Lost connection to the API worker. Restart the console to reconnect";

/// Top-level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Screen {
    #[default]
    Dashboard,
    #[value(name = "send")]
    Compose,
    Templates,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Dashboard, Screen::Compose, Screen::Templates];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Compose => "Send Notification",
            Screen::Templates => "Templates",
        }
    }

    pub fn function_key(self) -> u8 {
        match self {
            Screen::Dashboard => 1,
            Screen::Compose => 2,
            Screen::Templates => 3,
        }
    }
}

/// State of the mounted screen
///
/// Only one screen exists at a time; switching drops the old state, which
/// cancels its in-flight requests.
pub enum ActiveScreen {
    Dashboard(DashboardState),
    Compose(ComposerState),
    Templates(TemplatesState),
}

impl ActiveScreen {
    pub fn kind(&self) -> Screen {
        match self {
            ActiveScreen::Dashboard(_) => Screen::Dashboard,
            ActiveScreen::Compose(_) => Screen::Compose,
            ActiveScreen::Templates(_) => Screen::Templates,
        }
    }

    /// True while the screen wants plain letters for itself
    pub fn captures_input(&self) -> bool {
        match self {
            ActiveScreen::Dashboard(state) => state.detail().is_some(),
            ActiveScreen::Compose(state) => state.is_editing_text(),
            ActiveScreen::Templates(state) => state.is_modal(),
        }
    }
}

pub struct App {
    pub api: ApiHandle,
    pub screen: ActiveScreen,
    /// Start-up warnings and worker failures
    pub toast: AlertState,
    pub should_quit: bool,
    refresh_interval: Duration,
    server_label: String,
}

impl App {
    pub fn new(mut api: ApiHandle, config: &Config, initial: Screen) -> Self {
        let refresh_interval = config.dashboard.refresh_interval();
        let screen = mount(initial, &mut api, refresh_interval);

        Self {
            api,
            screen,
            toast: AlertState::new(),
            should_quit: false,
            refresh_interval,
            server_label: config.server.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_screen(&self) -> Screen {
        self.screen.kind()
    }

    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    /// Mount `screen` in place of the current one
    pub fn switch_to(&mut self, screen: Screen) {
        if self.current_screen() == screen {
            return;
        }
        log::debug!("Switching to {:?}", screen);
        self.screen = mount(screen, &mut self.api, self.refresh_interval);
    }

    /// Hand every pending API reply to the mounted screen
    pub fn poll_responses(&mut self) {
        let drained = self.api.drain();
        if drained.disconnected {
            self.toast.show_failure(WORKER_LOST);
        }

        for response in drained.responses {
            match &mut self.screen {
                ActiveScreen::Dashboard(state) => state.handle_response(response),
                ActiveScreen::Compose(state) => state.handle_response(response),
                ActiveScreen::Templates(state) => state.handle_response(response, &mut self.api),
            }
        }
    }

    /// Advance refresh timers, auto-close and alert timeouts
    pub fn tick(&mut self, now: Instant) {
        self.toast.clear_if_expired_at(now);
        match &mut self.screen {
            ActiveScreen::Dashboard(state) => state.tick(now, &mut self.api),
            ActiveScreen::Compose(state) => {
                state.alert.clear_if_expired_at(now);
            }
            ActiveScreen::Templates(state) => state.tick(now),
        }
    }
}

fn mount(screen: Screen, api: &mut ApiHandle, refresh_interval: Duration) -> ActiveScreen {
    match screen {
        Screen::Dashboard => ActiveScreen::Dashboard(DashboardState::mount(refresh_interval, api)),
        Screen::Compose => ActiveScreen::Compose(ComposerState::mount(api)),
        Screen::Templates => ActiveScreen::Templates(TemplatesState::mount(api)),
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
