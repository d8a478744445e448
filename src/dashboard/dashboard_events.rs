use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::dashboard_state::DashboardState;
use crate::api::{ApiHandle, StatusFilter};

/// Lines moved per PageUp/PageDown in the detail overlay
const DETAIL_PAGE: u16 = 10;

pub fn handle_dashboard_key(state: &mut DashboardState, api: &mut ApiHandle, key: KeyEvent) {
    if state.detail().is_some() {
        handle_detail_key(state, key);
        return;
    }

    match key.code {
        KeyCode::Char('a') => state.set_filter(StatusFilter::All, api),
        KeyCode::Char('s') => state.set_filter(StatusFilter::Sent, api),
        KeyCode::Char('f') => state.set_filter(StatusFilter::Failed, api),
        KeyCode::Char('p') => state.set_filter(StatusFilter::Pending, api),
        KeyCode::Right | KeyCode::Tab => state.cycle_filter(true, api),
        KeyCode::Left | KeyCode::BackTab => state.cycle_filter(false, api),
        KeyCode::Char('r') => state.refresh(api),
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => state.select_first(),
        KeyCode::End | KeyCode::Char('G') => state.select_last(),
        KeyCode::Enter => state.open_selected(api),
        _ => {}
    }
}

fn handle_detail_key(state: &mut DashboardState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => state.close_detail(),
        KeyCode::Down | KeyCode::Char('j') => state.detail_scroll.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => state.detail_scroll.scroll_up(1),
        KeyCode::PageDown => state.detail_scroll.scroll_down(DETAIL_PAGE),
        KeyCode::PageUp => state.detail_scroll.scroll_up(DETAIL_PAGE),
        KeyCode::Home | KeyCode::Char('g') => state.detail_scroll.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => state.detail_scroll.jump_to_bottom(),
        _ => {}
    }
}

#[cfg(test)]
#[path = "dashboard_events_tests.rs"]
mod dashboard_events_tests;
