//! Products API trait
//!
//! Application code can depend on `dyn ProductsApi` instead of the concrete
//! client, keeping transport details out of its signatures.

use async_trait::async_trait;

use super::error::ClientResult;
use super::products::ProductsClient;
use crate::domain::{Product, ProductPatch, ProductQueryParams, ProductResponse};
use crate::transport::HttpTransport;

/// CRUD operations on the products resource
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// List products, filtered, sorted and paginated by `params`
    async fn list(&self, params: &ProductQueryParams) -> ClientResult<ProductResponse>;

    /// Fetch one product by identifier
    async fn get(&self, id: &str) -> ClientResult<Product>;

    /// Create a product from a partial payload
    async fn create(&self, data: &ProductPatch) -> ClientResult<Product>;

    /// Apply a partial payload to an existing product
    async fn update(&self, id: &str, data: &ProductPatch) -> ClientResult<Product>;

    /// Delete a product
    async fn remove(&self, id: &str) -> ClientResult<()>;
}

#[async_trait]
impl<T: HttpTransport> ProductsApi for ProductsClient<T> {
    async fn list(&self, params: &ProductQueryParams) -> ClientResult<ProductResponse> {
        ProductsClient::list(self, params).await
    }

    async fn get(&self, id: &str) -> ClientResult<Product> {
        ProductsClient::get(self, id).await
    }

    async fn create(&self, data: &ProductPatch) -> ClientResult<Product> {
        ProductsClient::create(self, data).await
    }

    async fn update(&self, id: &str, data: &ProductPatch) -> ClientResult<Product> {
        ProductsClient::update(self, id, data).await
    }

    async fn remove(&self, id: &str) -> ClientResult<()> {
        ProductsClient::remove(self, id).await
    }
}
