//! Products API client module

mod error;
mod products;
mod traits;

pub use error::{ClientError, ClientResult, Operation, GENERIC_ERROR_MESSAGE};
pub use products::ProductsClient;
pub use traits::ProductsApi;
