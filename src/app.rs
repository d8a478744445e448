//! Top-level shell: tab navigation, the event loop and response routing

mod app_events;
mod app_render;
mod app_state;

pub use app_state::{ActiveScreen, App, Screen, WORKER_LOST};
