//! Tests for the API worker thread

use super::*;
use crate::api::error::ApiError;
use crate::api::types::{QuickTest, StatusFilter};
use crate::config::ServerConfig;
use serde_json::json;
use std::sync::mpsc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ServerConfig {
        base_url: server.uri(),
        api_key: None,
        timeout_secs: 5,
    })
    .unwrap()
}

fn job(request_id: u64, request: ApiRequest, cancel_token: &CancellationToken) -> ApiJob {
    ApiJob {
        request_id,
        request,
        cancel_token: cancel_token.clone(),
    }
}

async fn mount_stats(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalNotifications": 3,
            "sentNotifications": 1,
            "failedNotifications": 1,
            "pendingNotifications": 1
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_handle_job_sends_tagged_response() {
    let server = MockServer::start().await;
    mount_stats(&server).await;

    let (response_tx, response_rx) = mpsc::channel();
    let token = CancellationToken::new();
    handle_job(
        client_for(&server),
        job(7, ApiRequest::DashboardStats, &token),
        response_tx,
    )
    .await;

    let response = response_rx.try_recv().unwrap();
    assert_eq!(response.request_id, 7);
    match response.payload {
        ApiPayload::DashboardStats(Ok(stats)) => assert_eq!(stats.total_notifications, 3),
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test]
async fn test_pre_cancelled_job_sends_nothing() {
    let server = MockServer::start().await;
    mount_stats(&server).await;

    let (response_tx, response_rx) = mpsc::channel();
    let token = CancellationToken::new();
    token.cancel();
    handle_job(
        client_for(&server),
        job(1, ApiRequest::DashboardStats, &token),
        response_tx,
    )
    .await;

    assert!(response_rx.try_recv().is_err());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_in_flight_cancellation_drops_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/templates"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let (response_tx, response_rx) = mpsc::channel();
    let token = CancellationToken::new();
    let canceller = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        canceller.cancel();
    });

    handle_job(
        client_for(&server),
        job(2, ApiRequest::Templates, &token),
        response_tx,
    )
    .await;

    assert!(response_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_payload_keeps_request_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/test/send-welcome"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = client_for(&server);

    match execute(&client, ApiRequest::Notifications(StatusFilter::Pending)).await {
        ApiPayload::Notifications { filter, result } => {
            assert_eq!(filter, StatusFilter::Pending);
            assert!(matches!(result, Err(ApiError::Status { code: 500, .. })));
        }
        other => panic!("unexpected payload: {:?}", other),
    }

    match execute(&client, ApiRequest::SendTest(QuickTest::Welcome)).await {
        ApiPayload::TestSent { test, result } => {
            assert_eq!(test, QuickTest::Welcome);
            assert!(result.unwrap().success);
        }
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_spawned_worker_round_trip_and_shutdown() {
    let server = MockServer::start().await;
    mount_stats(&server).await;

    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    spawn_worker(client_for(&server), request_rx, response_tx).unwrap();

    let token = CancellationToken::new();
    request_tx
        .send(job(11, ApiRequest::DashboardStats, &token))
        .unwrap();

    let response = tokio::task::spawn_blocking(move || {
        let response = response_rx.recv_timeout(RECV_TIMEOUT);
        (response, response_rx)
    })
    .await
    .unwrap();
    let (response, response_rx) = response;
    assert_eq!(response.unwrap().request_id, 11);

    // Dropping the sender stops the worker, which drops its response sender
    drop(request_tx);
    let closed = tokio::task::spawn_blocking(move || response_rx.recv_timeout(RECV_TIMEOUT))
        .await
        .unwrap();
    assert_eq!(closed, Err(mpsc::RecvTimeoutError::Disconnected));
}
