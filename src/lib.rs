//! notifyme-console library - Terminal admin console for NotifyMe
//!
//! This library exposes the console's screens and API plumbing for testing purposes.

pub mod alert;
pub mod api;
pub mod app;
pub mod composer;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod placeholders;
pub mod scroll;
pub mod templates;
#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, Screen};
pub use config::Config;
