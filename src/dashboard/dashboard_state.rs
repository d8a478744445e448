//! Dashboard state: counters, filtered list and the detail overlay

use std::time::{Duration, Instant};

use ratatui::widgets::TableState;
use tokio_util::sync::CancellationToken;

use super::refresh_timer::RefreshTimer;
use crate::api::{
    ApiHandle, ApiPayload, ApiRequest, ApiResponse, DashboardStats, Notification, StatusFilter,
};
use crate::scroll::ScrollState;

pub struct DashboardState {
    pub stats: DashboardStats,
    filter: StatusFilter,
    notifications: Vec<Notification>,
    pub table_state: TableState,
    detail: Option<Notification>,
    pub detail_scroll: ScrollState,
    /// A list request for the active filter is in flight
    loading: bool,
    refresh: RefreshTimer,
    cancel_token: CancellationToken,
    pending_stats: Option<u64>,
    pending_list: Option<u64>,
    pending_detail: Option<u64>,
}

impl DashboardState {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            stats: DashboardStats::default(),
            filter: StatusFilter::All,
            notifications: Vec::new(),
            table_state: TableState::default(),
            detail: None,
            detail_scroll: ScrollState::new(),
            loading: false,
            refresh: RefreshTimer::new(refresh_interval),
            cancel_token: CancellationToken::new(),
            pending_stats: None,
            pending_list: None,
            pending_detail: None,
        }
    }

    /// Create the screen and issue its initial loads
    pub fn mount(refresh_interval: Duration, api: &mut ApiHandle) -> Self {
        let mut state = Self::new(refresh_interval);
        state.refresh(api);
        state
    }

    pub fn filter(&self) -> StatusFilter {
        self.filter
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn detail(&self) -> Option<&Notification> {
        self.detail.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel_token
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh.interval()
    }

    /// Fetch counters and the list for the active filter
    pub fn refresh(&mut self, api: &mut ApiHandle) {
        self.refresh.reset_at(Instant::now());

        match api.dispatch(ApiRequest::DashboardStats, &self.cancel_token) {
            Ok(id) => self.pending_stats = Some(id),
            Err(e) => log::warn!("Failed to request dashboard stats: {}", e),
        }

        match api.dispatch(ApiRequest::Notifications(self.filter), &self.cancel_token) {
            Ok(id) => {
                self.pending_list = Some(id);
                self.loading = true;
            }
            Err(e) => {
                log::warn!("Failed to request notifications: {}", e);
                self.pending_list = None;
                self.loading = false;
            }
        }
    }

    /// Switch filter; the old list is dropped right away and refetched
    pub fn set_filter(&mut self, filter: StatusFilter, api: &mut ApiHandle) {
        self.filter = filter;
        self.notifications.clear();
        self.table_state.select(None);
        self.refresh(api);
    }

    pub fn cycle_filter(&mut self, forward: bool, api: &mut ApiHandle) {
        let all = StatusFilter::ALL;
        let current = all.iter().position(|f| *f == self.filter).unwrap_or(0);
        let next = if forward {
            (current + 1) % all.len()
        } else {
            (current + all.len() - 1) % all.len()
        };
        self.set_filter(all[next], api);
    }

    /// Refresh when the polling interval has elapsed
    pub fn tick(&mut self, now: Instant, api: &mut ApiHandle) {
        if self.refresh.is_due_at(now) {
            log::debug!("Dashboard refresh timer fired");
            self.refresh(api);
        }
    }

    pub fn selected_notification(&self) -> Option<&Notification> {
        self.table_state
            .selected()
            .and_then(|i| self.notifications.get(i))
    }

    pub fn select_next(&mut self) {
        if self.notifications.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.notifications.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self) {
        if self.notifications.is_empty() {
            return;
        }
        let prev = self.table_state.selected().unwrap_or(0).saturating_sub(1);
        self.table_state.select(Some(prev));
    }

    pub fn select_first(&mut self) {
        if !self.notifications.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.notifications.is_empty() {
            self.table_state.select(Some(self.notifications.len() - 1));
        }
    }

    /// Fetch the selected notification; the overlay opens when it arrives
    pub fn open_selected(&mut self, api: &mut ApiHandle) {
        let Some(id) = self.selected_notification().map(|n| n.id) else {
            return;
        };
        match api.dispatch(ApiRequest::NotificationDetail(id), &self.cancel_token) {
            Ok(request_id) => self.pending_detail = Some(request_id),
            Err(e) => log::warn!("Failed to request notification {}: {}", id, e),
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
        self.pending_detail = None;
        self.detail_scroll = ScrollState::new();
    }

    /// Apply a worker reply; replies this screen is not waiting on are ignored
    pub fn handle_response(&mut self, response: ApiResponse) {
        let id = Some(response.request_id);
        match response.payload {
            ApiPayload::DashboardStats(result) if id == self.pending_stats => {
                self.pending_stats = None;
                match result {
                    Ok(stats) => self.stats = stats,
                    Err(e) => log::warn!("Error fetching stats: {}", e),
                }
            }
            ApiPayload::Notifications { filter, result } if id == self.pending_list => {
                self.pending_list = None;
                self.loading = false;
                if filter != self.filter {
                    return;
                }
                match result {
                    Ok(notifications) => self.replace_notifications(notifications),
                    Err(e) => log::warn!("Error fetching notifications: {}", e),
                }
            }
            ApiPayload::NotificationDetail(result) if id == self.pending_detail => {
                self.pending_detail = None;
                match result {
                    Ok(notification) => {
                        self.detail = Some(notification);
                        self.detail_scroll = ScrollState::new();
                    }
                    Err(e) => log::warn!("Error fetching notification details: {}", e),
                }
            }
            _ => {
                #[cfg(debug_assertions)]
                log::debug!("Dashboard ignored response {}", response.request_id);
            }
        }
    }

    /// Replace the list, keeping the selected row by id when it survived
    fn replace_notifications(&mut self, notifications: Vec<Notification>) {
        let selected_id = self.selected_notification().map(|n| n.id);
        self.notifications = notifications;

        let index = selected_id
            .and_then(|id| self.notifications.iter().position(|n| n.id == id))
            .or(if self.notifications.is_empty() {
                None
            } else {
                Some(0)
            });
        self.table_state.select(index);
    }
}

impl Drop for DashboardState {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}

#[cfg(test)]
#[path = "dashboard_state_tests.rs"]
mod dashboard_state_tests;
