//! Backend API access
//!
//! The console talks to the NotifyMe backend over HTTP/JSON. Calls never run on
//! the UI thread: screens hand an [`ApiRequest`] to the [`ApiHandle`], a
//! background worker executes it with a tokio runtime, and the reply comes back
//! as an [`ApiResponse`] tagged with the request id it answers.

mod client;
mod error;
mod handle;
mod messages;
mod types;
pub mod worker;

pub use client::{API_KEY_HEADER, ApiClient};
pub use error::ApiError;
pub use handle::{ApiHandle, Drained};
pub use messages::{ApiJob, ApiPayload, ApiRequest, ApiResponse};
pub use types::{
    DashboardStats, Notification, NotificationStatus, QuickTest, SendRequest, SendResponse,
    StatusFilter, Template, TemplateInput, format_timestamp,
};
