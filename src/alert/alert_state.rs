//! Alert state management

use std::time::{Duration, Instant};

use crate::theme;

/// Alert kind - determines colors and default lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Failure,
    Warning,
}

impl AlertKind {
    fn default_duration(self) -> Option<Duration> {
        match self {
            AlertKind::Success | AlertKind::Failure => None,
            AlertKind::Warning => Some(Duration::from_secs(10)),
        }
    }

    pub fn colors(self) -> &'static theme::alert::AlertColors {
        match self {
            AlertKind::Success => &theme::alert::SUCCESS,
            AlertKind::Failure => &theme::alert::FAILURE,
            AlertKind::Warning => &theme::alert::WARNING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub created_at: Instant,
    /// `None` keeps the alert until it is dismissed or replaced
    pub duration: Option<Duration>,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
            duration: kind.default_duration(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        match self.duration {
            Some(d) => now.duration_since(self.created_at) > d,
            None => false,
        }
    }
}

/// Holds at most one alert; showing a new one replaces the old
#[derive(Debug, Default)]
pub struct AlertState {
    current: Option<Alert>,
}

impl AlertState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, alert: Alert) {
        self.current = Some(alert);
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show(Alert::new(AlertKind::Success, message));
    }

    pub fn show_failure(&mut self, message: impl Into<String>) {
        self.show(Alert::new(AlertKind::Failure, message));
    }

    pub fn show_warning(&mut self, message: impl Into<String>) {
        self.show(Alert::new(AlertKind::Warning, message));
    }

    /// Success alert that dismisses itself after `duration`
    pub fn show_transient_success(&mut self, message: impl Into<String>, duration: Duration) {
        let mut alert = Alert::new(AlertKind::Success, message);
        alert.duration = Some(duration);
        self.show(alert);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear an expired alert, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        self.clear_if_expired_at(Instant::now())
    }

    pub fn clear_if_expired_at(&mut self, now: Instant) -> bool {
        if let Some(ref alert) = self.current
            && alert.is_expired_at(now)
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.message.as_str())
    }

    pub fn kind(&self) -> Option<AlertKind> {
        self.current.as_ref().map(|a| a.kind)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
#[path = "alert_state_tests.rs"]
mod alert_state_tests;
