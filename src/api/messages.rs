//! Messages exchanged between the UI thread and the API worker

use tokio_util::sync::CancellationToken;

use super::error::ApiError;
use super::types::{
    DashboardStats, Notification, QuickTest, SendRequest, SendResponse, StatusFilter, Template,
    TemplateInput,
};

/// A backend call requested by a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRequest {
    DashboardStats,
    Notifications(StatusFilter),
    NotificationDetail(i64),
    Templates,
    CreateTemplate(TemplateInput),
    UpdateTemplate { id: i64, input: TemplateInput },
    DeleteTemplate(i64),
    SendNotification(SendRequest),
    SendTest(QuickTest),
}

/// A request queued for the worker
///
/// `cancel_token` belongs to the screen that issued the request; once the
/// screen is torn down the worker drops the call without replying.
#[derive(Debug, Clone)]
pub struct ApiJob {
    pub request_id: u64,
    pub request: ApiRequest,
    pub cancel_token: CancellationToken,
}

/// Outcome of a backend call
///
/// Variants carry enough of the original request (filter, template id) for the
/// receiving screen to decide whether the reply still applies.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    DashboardStats(Result<DashboardStats, ApiError>),
    Notifications {
        filter: StatusFilter,
        result: Result<Vec<Notification>, ApiError>,
    },
    NotificationDetail(Result<Notification, ApiError>),
    Templates(Result<Vec<Template>, ApiError>),
    TemplateSaved {
        created: bool,
        result: Result<Template, ApiError>,
    },
    TemplateDeleted {
        id: i64,
        result: Result<(), ApiError>,
    },
    NotificationSent(Result<SendResponse, ApiError>),
    TestSent {
        test: QuickTest,
        result: Result<SendResponse, ApiError>,
    },
}

/// Reply from the worker, tagged with the id returned by `ApiHandle::dispatch`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub request_id: u64,
    pub payload: ApiPayload,
}
