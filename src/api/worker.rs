//! API worker thread
//!
//! Runs backend calls on a dedicated thread with a single-threaded tokio
//! runtime so the render loop never blocks on the network. Every job runs as
//! its own task, so a slow notification list does not hold up a template save.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::thread;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::ApiClient;
use super::messages::{ApiJob, ApiPayload, ApiRequest, ApiResponse};
use crate::error::ConsoleError;

/// Name of the worker thread, checked by the panic hook in `main`
pub const WORKER_THREAD_NAME: &str = "api-worker";

/// Spawn the API worker thread
///
/// The thread exits once every request sender has been dropped. If the
/// runtime cannot be built the thread ends immediately; the UI notices the
/// closed channel and reports the worker as unavailable.
pub fn spawn_worker(
    client: ApiClient,
    request_rx: UnboundedReceiver<ApiJob>,
    response_tx: Sender<ApiResponse>,
) -> Result<(), ConsoleError> {
    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime: {}", e);
                        return;
                    }
                };
                rt.block_on(worker_loop(client, request_rx, response_tx));
            }));

            if let Err(e) = result {
                let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = e.downcast_ref::<String>() {
                    s.clone()
                } else {
                    "Unknown panic".to_string()
                };
                log::error!("API worker thread panicked: {}", panic_msg);
            }
        })?;
    Ok(())
}

/// Processes jobs until the request channel is closed
async fn worker_loop(
    client: ApiClient,
    mut request_rx: UnboundedReceiver<ApiJob>,
    response_tx: Sender<ApiResponse>,
) {
    while let Some(job) = request_rx.recv().await {
        tokio::spawn(handle_job(client.clone(), job, response_tx.clone()));
    }
    log::debug!("API worker shutting down");
}

/// Runs one job, racing it against its cancellation token
///
/// Cancelled jobs produce no response.
async fn handle_job(client: ApiClient, job: ApiJob, response_tx: Sender<ApiResponse>) {
    let ApiJob {
        request_id,
        request,
        cancel_token,
    } = job;

    if cancel_token.is_cancelled() {
        log::debug!("Request {} cancelled before start", request_id);
        return;
    }

    let payload = tokio::select! {
        biased;

        _ = cancel_token.cancelled() => {
            log::debug!("Request {} cancelled in flight", request_id);
            return;
        }
        payload = execute(&client, request) => payload,
    };

    // The receiver is gone only when the app is shutting down
    let _ = response_tx.send(ApiResponse {
        request_id,
        payload,
    });
}

/// Maps a request onto the matching client call
async fn execute(client: &ApiClient, request: ApiRequest) -> ApiPayload {
    match request {
        ApiRequest::DashboardStats => ApiPayload::DashboardStats(client.dashboard_stats().await),
        ApiRequest::Notifications(filter) => ApiPayload::Notifications {
            filter,
            result: client.notifications(filter).await,
        },
        ApiRequest::NotificationDetail(id) => {
            ApiPayload::NotificationDetail(client.notification(id).await)
        }
        ApiRequest::Templates => ApiPayload::Templates(client.templates().await),
        ApiRequest::CreateTemplate(input) => ApiPayload::TemplateSaved {
            created: true,
            result: client.create_template(&input).await,
        },
        ApiRequest::UpdateTemplate { id, input } => ApiPayload::TemplateSaved {
            created: false,
            result: client.update_template(id, &input).await,
        },
        ApiRequest::DeleteTemplate(id) => ApiPayload::TemplateDeleted {
            id,
            result: client.delete_template(id).await,
        },
        ApiRequest::SendNotification(request) => {
            ApiPayload::NotificationSent(client.send_notification(&request).await)
        }
        ApiRequest::SendTest(test) => ApiPayload::TestSent {
            test,
            result: client.send_test(test).await,
        },
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
