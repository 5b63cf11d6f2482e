//! HTTP transport seam
//!
//! The products client never talks to the network directly. It hands a
//! fully built [`TransportRequest`] to an [`HttpTransport`] and gets back a
//! status code and raw body. Production code uses [`ReqwestTransport`];
//! tests swap in a recording double.
//!
//! Cancellation is done by dropping the future returned from `send`.

mod http_client;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub use http_client::ReqwestTransport;
pub use reqwest::Method;

// ============================================================================
// Error Types
// ============================================================================

/// Failures below the HTTP status level
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Other(String),
}

impl TransportError {
    /// Whether the failure was a timeout (connect or total)
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}

// ============================================================================
// Request / Response
// ============================================================================

/// A single outbound HTTP request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,

    /// Absolute URL including any query string
    pub url: String,

    pub headers: Vec<(String, String)>,

    pub body: Option<Bytes>,

    /// Overrides the transport's default timeout for this request only
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        TransportRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Add a header to the request
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Serialize `payload` as the body and mark it as JSON
    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_vec(payload)?;
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(Bytes::from(body));
        Ok(request)
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// First header value matching `key`, case-insensitively
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a completed exchange
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        TransportResponse {
            status,
            body: body.into(),
        }
    }

    /// Status in the 200-299 success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============================================================================
// Transport Trait
// ============================================================================

/// Sends one request and returns the status and body
///
/// Implementations must not retry; a non-2xx status is a successful
/// exchange at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}
