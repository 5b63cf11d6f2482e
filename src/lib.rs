//! Products Client
//!
//! Typed async HTTP client for a remote `/products` REST resource.
//!
//! ```no_run
//! use products_client::{ApiSettings, ProductQueryParams, ProductsClient, SortOrder};
//!
//! # async fn run() -> Result<(), products_client::ClientError> {
//! let client = ProductsClient::new(&ApiSettings::new("https://shop.example.com/api"))?;
//!
//! let page = client
//!     .list(&ProductQueryParams::new().search("lamp").sort_order(SortOrder::Asc))
//!     .await?;
//! println!("{} of {} products", page.products.len(), page.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod telemetry;
pub mod transport;

pub use client::{ClientError, ClientResult, Operation, ProductsApi, ProductsClient};
pub use config::{ApiSettings, Settings};
pub use domain::{Product, ProductPatch, ProductQueryParams, ProductResponse, SortOrder};
pub use transport::{HttpTransport, ReqwestTransport, TransportError, TransportRequest, TransportResponse};
