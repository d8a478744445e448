//! UI-side handle to the API worker

use std::sync::mpsc::{self, Receiver, TryRecvError};

use tokio::sync::mpsc::{UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::client::ApiClient;
use super::error::ApiError;
use super::messages::{ApiJob, ApiRequest, ApiResponse};
use super::worker;
use crate::error::ConsoleError;

/// Everything pulled off the response channel in one poll
#[derive(Debug, Default)]
pub struct Drained {
    pub responses: Vec<ApiResponse>,
    /// True on the poll that first noticed the worker is gone
    pub disconnected: bool,
}

/// Sends requests to the worker and collects its replies
///
/// Request ids increase monotonically; screens remember the id of the call
/// they are waiting on and ignore any other reply.
#[derive(Debug, Default)]
pub struct ApiHandle {
    request_tx: Option<UnboundedSender<ApiJob>>,
    response_rx: Option<Receiver<ApiResponse>>,
    next_request_id: u64,
}

impl ApiHandle {
    /// A handle with no worker; every dispatch fails with `WorkerUnavailable`
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn the worker thread for `client` and connect to it
    pub fn connect(client: ApiClient) -> Result<Self, ConsoleError> {
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        worker::spawn_worker(client, request_rx, response_tx)?;

        let mut handle = Self::new();
        handle.set_channels(request_tx, response_rx);
        Ok(handle)
    }

    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<ApiJob>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Queue `request` and return the id its reply will carry
    pub fn dispatch(
        &mut self,
        request: ApiRequest,
        cancel_token: &CancellationToken,
    ) -> Result<u64, ApiError> {
        let Some(tx) = &self.request_tx else {
            return Err(ApiError::WorkerUnavailable);
        };

        self.next_request_id += 1;
        let request_id = self.next_request_id;

        #[cfg(debug_assertions)]
        log::debug!("Dispatching request {}: {:?}", request_id, request);

        tx.send(ApiJob {
            request_id,
            request,
            cancel_token: cancel_token.clone(),
        })
        .map_err(|_| {
            log::error!("API worker channel closed");
            ApiError::WorkerUnavailable
        })?;

        Ok(request_id)
    }

    /// Collect every reply that has arrived, without blocking
    pub fn drain(&mut self) -> Drained {
        let mut drained = Drained::default();
        let Some(rx) = &self.response_rx else {
            return drained;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => drained.responses.push(response),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    drained.disconnected = true;
                    break;
                }
            }
        }

        if drained.disconnected {
            log::error!("API worker disconnected");
            self.request_tx = None;
            self.response_rx = None;
        }

        drained
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::messages::ApiPayload;
    use crate::api::types::DashboardStats;

    #[test]
    fn test_dispatch_without_worker_fails() {
        let mut handle = ApiHandle::new();
        let token = CancellationToken::new();
        assert_eq!(
            handle.dispatch(ApiRequest::Templates, &token),
            Err(ApiError::WorkerUnavailable)
        );
        let drained = handle.drain();
        assert!(drained.responses.is_empty());
        assert!(!drained.disconnected);
    }

    #[test]
    fn test_dispatch_assigns_increasing_ids() {
        let (request_tx, mut request_rx) = unbounded_channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut handle = ApiHandle::new();
        handle.set_channels(request_tx, response_rx);

        let token = CancellationToken::new();
        let first = handle.dispatch(ApiRequest::Templates, &token).unwrap();
        let second = handle.dispatch(ApiRequest::DashboardStats, &token).unwrap();
        assert!(second > first);

        let job = request_rx.try_recv().unwrap();
        assert_eq!(job.request_id, first);
        assert_eq!(job.request, ApiRequest::Templates);
        assert_eq!(request_rx.try_recv().unwrap().request_id, second);
    }

    #[test]
    fn test_dispatch_shares_cancel_token() {
        let (request_tx, mut request_rx) = unbounded_channel();
        let (_response_tx, response_rx) = mpsc::channel();
        let mut handle = ApiHandle::new();
        handle.set_channels(request_tx, response_rx);

        let token = CancellationToken::new();
        handle.dispatch(ApiRequest::Templates, &token).unwrap();
        token.cancel();
        assert!(request_rx.try_recv().unwrap().cancel_token.is_cancelled());
    }

    #[test]
    fn test_drain_collects_responses() {
        let (request_tx, _request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        let mut handle = ApiHandle::new();
        handle.set_channels(request_tx, response_rx);

        for id in 1..=2 {
            response_tx
                .send(ApiResponse {
                    request_id: id,
                    payload: ApiPayload::DashboardStats(Ok(DashboardStats::default())),
                })
                .unwrap();
        }

        let drained = handle.drain();
        assert_eq!(drained.responses.len(), 2);
        assert!(!drained.disconnected);
        let drained = handle.drain();
        assert!(drained.responses.is_empty());
        assert!(!drained.disconnected);
    }

    #[test]
    fn test_drain_reports_disconnect_once() {
        let (request_tx, _request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel::<ApiResponse>();
        let mut handle = ApiHandle::new();
        handle.set_channels(request_tx, response_rx);
        drop(response_tx);

        assert!(handle.drain().disconnected);
        assert!(!handle.drain().disconnected);

        let token = CancellationToken::new();
        assert_eq!(
            handle.dispatch(ApiRequest::Templates, &token),
            Err(ApiError::WorkerUnavailable)
        );
    }
}
