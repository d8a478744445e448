use std::time::{Duration, Instant};

/// Fires every `interval` while the owning screen is mounted
///
/// The timer has no thread or task of its own; the event loop asks it whether
/// it is due. Dropping the screen state drops the timer with it.
#[derive(Debug)]
pub struct RefreshTimer {
    interval: Duration,
    last_fired: Instant,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_due_at(&self, now: Instant) -> bool {
        now.duration_since(self.last_fired) >= self.interval
    }

    /// Restart the countdown, e.g. after a manual refresh
    pub fn reset_at(&mut self, now: Instant) {
        self.last_fired = now;
    }
}

#[cfg(test)]
#[path = "refresh_timer_tests.rs"]
mod refresh_timer_tests;
