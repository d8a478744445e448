//! Shared test utilities
//!
//! Fixtures and helpers used across the screen and app test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};

    use chrono::NaiveDate;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crate::api::{
        ApiHandle, ApiJob, ApiPayload, ApiRequest, ApiResponse, Notification, NotificationStatus,
        Template,
    };

    /// Worker side of a test API handle
    ///
    /// Jobs the screens dispatch land in `requests`; tests answer them by
    /// sending on `responses`.
    pub struct FakeWorker {
        pub requests: UnboundedReceiver<ApiJob>,
        pub responses: Sender<ApiResponse>,
    }

    impl FakeWorker {
        /// All jobs dispatched since the last call
        pub fn take_jobs(&mut self) -> Vec<ApiJob> {
            let mut jobs = Vec::new();
            while let Ok(job) = self.requests.try_recv() {
                jobs.push(job);
            }
            jobs
        }

        /// Requests dispatched since the last call, without ids
        pub fn take_requests(&mut self) -> Vec<ApiRequest> {
            self.take_jobs().into_iter().map(|j| j.request).collect()
        }

        /// The single job dispatched since the last call matching `pred`
        pub fn expect_job(&mut self, pred: impl Fn(&ApiRequest) -> bool) -> ApiJob {
            let jobs = self.take_jobs();
            let mut matching: Vec<ApiJob> = jobs.into_iter().filter(|j| pred(&j.request)).collect();
            assert_eq!(matching.len(), 1, "expected exactly one matching request");
            matching.remove(0)
        }
    }

    /// An `ApiHandle` wired to in-memory channels
    pub fn test_api() -> (ApiHandle, FakeWorker) {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut handle = ApiHandle::new();
        handle.set_channels(request_tx, response_rx);
        (
            handle,
            FakeWorker {
                requests: request_rx,
                responses: response_tx,
            },
        )
    }

    pub fn reply(job: &ApiJob, payload: ApiPayload) -> ApiResponse {
        ApiResponse {
            request_id: job.request_id,
            payload,
        }
    }

    pub fn template(id: i64, name: &str, subject: &str, body: &str) -> Template {
        Template {
            id,
            name: name.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
                .and_then(|d| d.and_hms_opt(9, 30, 0)),
        }
    }

    pub fn notification(id: i64, status: NotificationStatus) -> Notification {
        Notification {
            id,
            recipient: format!("user{}@example.com", id),
            template: template(1, "welcome", "Welcome {{name}}", "Hi {{name}}!"),
            status,
            variables: Some(r#"{"name":"Ann"}"#.to_string()),
            error_message: None,
            created_at: NaiveDate::from_ymd_opt(2024, 5, 2)
                .and_then(|d| d.and_hms_opt(10, 15, 30)),
            sent_at: None,
        }
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn char_key(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    /// Key events for typing `text`
    pub fn type_keys(text: &str) -> Vec<KeyEvent> {
        text.chars().map(char_key).collect()
    }
}
