//! reqwest-backed transport
//!
//! Wraps a pooled [`reqwest::Client`] configured from [`ApiSettings`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use tracing::debug;

use super::{HttpTransport, TransportError, TransportRequest, TransportResponse};
use crate::config::ApiSettings;

/// HTTP transport over a shared reqwest connection pool
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the timeouts, pool size and user agent from `settings`
    pub fn new(settings: &ApiSettings) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .connect_timeout(settings.connect_timeout())
            .pool_max_idle_per_host(settings.pool_max_idle_per_host)
            .user_agent(settings.user_agent.as_str())
            .build()?;

        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let TransportRequest { method, url, headers, body, timeout } = request;

        debug!(method = %method, url = %url, "Sending request");

        let headers = header_map(&headers)?;

        let mut builder = self.client.request(method, &url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!(status, bytes = body.len(), "Received response");

        Ok(TransportResponse { status, body })
    }
}

/// Convert header pairs, rejecting names or values HTTP cannot carry
fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, TransportError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (key, value) in headers {
        let name = HeaderName::from_bytes(key.as_bytes())
            .map_err(|_| TransportError::InvalidRequest(format!("invalid header name {:?}", key)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| TransportError::InvalidRequest(format!("invalid value for header {:?}", key)))?;
        map.append(name, value);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = ReqwestTransport::new(&ApiSettings::default());
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_transport_error() {
        let transport = ReqwestTransport::new(&ApiSettings::default()).unwrap();
        let result = transport
            .send(TransportRequest::new(crate::transport::Method::GET, "not a url"))
            .await;

        assert!(matches!(result, Err(TransportError::Http(_))));
    }

    #[tokio::test]
    async fn test_bad_header_name_is_invalid_request() {
        let transport = ReqwestTransport::new(&ApiSettings::default()).unwrap();
        let request = TransportRequest::new(crate::transport::Method::GET, "http://127.0.0.1:9/products")
            .header("bad header", "x");

        let result = transport.send(request).await;
        assert!(matches!(result, Err(TransportError::InvalidRequest(ref m)) if m.contains("bad header")));
    }

    #[test]
    fn test_header_value_with_newline_rejected() {
        let headers = vec![("X-Trace".to_string(), "a\nb".to_string())];
        assert!(matches!(header_map(&headers), Err(TransportError::InvalidRequest(_))));
    }

    #[test]
    fn test_header_map_keeps_repeated_headers() {
        let headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("accept".to_string(), "text/plain".to_string()),
        ];
        let map = header_map(&headers).unwrap();
        assert_eq!(map.get_all("accept").iter().count(), 2);
    }
}
