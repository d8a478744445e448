//! Alerts shown to the user
//!
//! Screens keep an [`AlertState`] for their inline banner (send results,
//! save failures). The app keeps one more for start-up warnings, rendered as
//! a toast in the top-right corner.

mod alert_render;
mod alert_state;

pub use alert_render::{render_inline, render_toast};
pub use alert_state::{Alert, AlertKind, AlertState};
