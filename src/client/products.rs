//! Products API client
//!
//! One method per REST operation on `/products`. Every call builds exactly
//! one [`TransportRequest`], sends it, and maps the outcome:
//!
//! ```text
//!   2xx          -> decode JSON body (skipped for remove)
//!   non-2xx      -> ClientError::Status with best-effort message
//!   no response  -> ClientError::Transport
//! ```

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use super::error::{ClientError, ClientResult, Operation};
use crate::config::{ApiSettings, Settings};
use crate::domain::{Product, ProductQueryParams, ProductResponse};
use crate::transport::{HttpTransport, Method, ReqwestTransport, TransportRequest, TransportResponse};

/// Characters escaped when an identifier is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Client for the remote products resource
///
/// Holds no mutable state; a single instance can serve concurrent calls.
pub struct ProductsClient<T: HttpTransport = ReqwestTransport> {
    /// Transport used for every request
    transport: T,

    /// API base URL, without a trailing slash
    base_url: String,

    /// Per-request timeout stamped on every outgoing request
    request_timeout: Option<Duration>,
}

impl ProductsClient<ReqwestTransport> {
    /// Create a client backed by a pooled reqwest transport
    pub fn new(settings: &ApiSettings) -> ClientResult<Self> {
        let transport = ReqwestTransport::new(settings)?;
        Self::with_transport(settings, transport)
    }

    /// Create a client from loaded [`Settings`]
    pub fn from_settings(settings: &Settings) -> ClientResult<Self> {
        Self::new(&settings.api)
    }
}

impl<T: HttpTransport> ProductsClient<T> {
    /// Create a client over any transport
    ///
    /// Fails with [`ClientError::Config`] when the base URL is not absolute.
    pub fn with_transport(settings: &ApiSettings, transport: T) -> ClientResult<Self> {
        let base_url = settings.base_url.trim_end_matches('/');

        Url::parse(base_url).map_err(|e| {
            ClientError::Config(format!("invalid base_url {:?}: {}", settings.base_url, e))
        })?;

        Ok(ProductsClient {
            transport,
            base_url: base_url.to_string(),
            request_timeout: None,
        })
    }

    /// Apply `timeout` to every request this client sends
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List products matching `params`
    ///
    /// Only present, non-zero, non-empty parameters are sent.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn list(&self, params: &ProductQueryParams) -> ClientResult<ProductResponse> {
        let request = TransportRequest::new(Method::GET, self.collection_url(&params.to_query_string()));
        let response = self.execute(Operation::List, request).await?;
        decode(Operation::List, &response)
    }

    /// Fetch a single product by identifier
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        let request = TransportRequest::new(Method::GET, self.product_url(id));
        let response = self.execute(Operation::Get, request).await?;
        decode(Operation::Get, &response)
    }

    /// Create a product from a partial payload
    ///
    /// # Arguments
    /// * `data` - Any serializable subset of product fields, sent as-is
    #[instrument(skip(self, data), fields(base_url = %self.base_url))]
    pub async fn create<P>(&self, data: &P) -> ClientResult<Product>
    where
        P: Serialize + ?Sized + Sync,
    {
        let request = TransportRequest::new(Method::POST, self.collection_url(""))
            .json(data)
            .map_err(|source| ClientError::Encode { operation: Operation::Create, source })?;
        let response = self.execute(Operation::Create, request).await?;
        decode(Operation::Create, &response)
    }

    /// Update a product with a partial payload
    ///
    /// # Arguments
    /// * `id` - Product identifier
    /// * `data` - Fields to change
    #[instrument(skip(self, data), fields(base_url = %self.base_url))]
    pub async fn update<P>(&self, id: &str, data: &P) -> ClientResult<Product>
    where
        P: Serialize + ?Sized + Sync,
    {
        let request = TransportRequest::new(Method::PUT, self.product_url(id))
            .json(data)
            .map_err(|source| ClientError::Encode { operation: Operation::Update, source })?;
        let response = self.execute(Operation::Update, request).await?;
        decode(Operation::Update, &response)
    }

    /// Delete a product
    ///
    /// A success body is ignored without being parsed.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn remove(&self, id: &str) -> ClientResult<()> {
        let request = TransportRequest::new(Method::DELETE, self.product_url(id));
        self.execute(Operation::Remove, request).await?;
        Ok(())
    }

    fn collection_url(&self, query: &str) -> String {
        if query.is_empty() {
            format!("{}/products", self.base_url)
        } else {
            format!("{}/products?{}", self.base_url, query)
        }
    }

    fn product_url(&self, id: &str) -> String {
        format!("{}/products/{}", self.base_url, utf8_percent_encode(id, PATH_SEGMENT))
    }

    /// Send one request and turn a non-success status into an error
    async fn execute(
        &self,
        operation: Operation,
        request: TransportRequest,
    ) -> ClientResult<TransportResponse> {
        let request = match self.request_timeout {
            Some(timeout) => request.timeout(timeout),
            None => request,
        };

        debug!(operation = %operation, method = %request.method, url = %request.url, "Products API request");

        let response = self.transport.send(request).await.map_err(|e| {
            warn!(operation = %operation, error = %e, "Products API transport failure");
            ClientError::from(e)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let error = ClientError::from_error_body(operation, response.status, &response.body);
        warn!(
            operation = %operation,
            status = response.status,
            message = %error.message(),
            "Products API returned an error"
        );
        Err(error)
    }
}

fn decode<R: DeserializeOwned>(operation: Operation, response: &TransportResponse) -> ClientResult<R> {
    serde_json::from_slice(&response.body).map_err(|source| ClientError::Decode { operation, source })
}
