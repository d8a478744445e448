//! Dashboard screen
//!
//! Shows the aggregate counters, a status-filtered list of notifications and
//! a detail overlay for the selected one. Data is polled while the screen is
//! mounted.

mod dashboard_events;
mod dashboard_render;
mod dashboard_state;
mod refresh_timer;

pub use dashboard_events::handle_dashboard_key;
pub use dashboard_render::{build_detail_lines, render_dashboard, status_color};
pub use dashboard_state::DashboardState;
pub use refresh_timer::RefreshTimer;
