//! Wire types for the backend API
//!
//! Field names follow the backend's camelCase JSON. Timestamps are local
//! date-times without an offset (`2024-05-01T10:15:30.123`).

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::placeholders;

const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lifecycle status of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
}

impl NotificationStatus {
    pub fn label(self) -> &'static str {
        match self {
            NotificationStatus::Pending => "PENDING",
            NotificationStatus::Sent => "SENT",
            NotificationStatus::Failed => "FAILED",
        }
    }
}

/// Dashboard list filter; `All` sends no `status` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Sent,
    Failed,
    Pending,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Sent,
        StatusFilter::Failed,
        StatusFilter::Pending,
    ];

    /// Value of the `status` query parameter
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Sent => Some("sent"),
            StatusFilter::Failed => Some("failed"),
            StatusFilter::Pending => Some("pending"),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Sent => "Sent",
            StatusFilter::Failed => "Failed",
            StatusFilter::Pending => "Pending",
        }
    }
}

/// Aggregate counters from `/api/dashboard/stats`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_notifications: u64,
    pub sent_notifications: u64,
    pub failed_notifications: u64,
    pub pending_notifications: u64,
}

/// A message template as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub body: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl Template {
    /// Variable slots referenced by the subject and body
    pub fn slots(&self) -> Vec<String> {
        placeholders::template_slots(&self.subject, &self.body)
    }
}

/// A single send attempt and its delivery status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub recipient: String,
    pub template: Template,
    pub status: NotificationStatus,
    /// Substituted values, serialized by the backend as a JSON object string
    #[serde(default)]
    pub variables: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub sent_at: Option<NaiveDateTime>,
}

impl Notification {
    /// Variables payload pretty-printed as JSON, or the raw text when it isn't JSON
    pub fn pretty_variables(&self) -> String {
        let Some(raw) = self.variables.as_deref() else {
            return "{}".to_string();
        };
        serde_json::from_str::<serde_json::Value>(raw)
            .and_then(|value| serde_json::to_string_pretty(&value))
            .unwrap_or_else(|_| raw.to_string())
    }
}

/// Body of template create/update calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInput {
    pub name: String,
    pub subject: String,
    pub body: String,
}

/// Body of `POST /api/notify`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendRequest {
    pub recipient: String,
    pub template_id: i64,
    pub variables: BTreeMap<String, String>,
}

/// Reply of the send and test-send endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SendResponse {
    pub success: bool,
    pub notification_id: Option<i64>,
    pub message: Option<String>,
}

/// Predefined test sends exposed by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickTest {
    Welcome,
    OrderConfirmation,
}

impl QuickTest {
    pub const ALL: [QuickTest; 2] = [QuickTest::Welcome, QuickTest::OrderConfirmation];

    /// Template name used in `/api/test/send-{name}`
    pub fn template_name(self) -> &'static str {
        match self {
            QuickTest::Welcome => "welcome",
            QuickTest::OrderConfirmation => "order-confirmation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QuickTest::Welcome => "Test Welcome Email",
            QuickTest::OrderConfirmation => "Test Order Confirmation",
        }
    }

    /// Address the backend sends this test to
    pub fn recipient(self) -> &'static str {
        match self {
            QuickTest::Welcome => "test@example.com",
            QuickTest::OrderConfirmation => "customer@example.com",
        }
    }
}

/// Formats an optional timestamp for tables and detail views
pub fn format_timestamp(timestamp: Option<&NaiveDateTime>) -> String {
    match timestamp {
        Some(ts) => ts.format(TIMESTAMP_DISPLAY_FORMAT).to_string(),
        None => "N/A".to_string(),
    }
}

/// A string that the backend may send as `null`
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts local date-times and, for tolerance, RFC 3339 timestamps with an offset
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(naive));
    }

    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| Some(dt.naive_local()))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{}': {}", raw, e)))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
