//! Recording transport double for unit tests

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;

use super::{HttpTransport, TransportError, TransportRequest, TransportResponse};

/// Replays queued responses in order and records every request it sees
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .push_back(Ok(TransportResponse::new(status, body.to_string())));
        self
    }

    pub fn fail(self, error: TransportError) -> Self {
        self.responses.lock().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    pub fn last_request(&self) -> TransportRequest {
        self.requests.lock().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Other("no response queued".to_string())))
    }
}
