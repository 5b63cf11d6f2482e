//! Domain types and models

pub mod product;
mod query;

pub use product::{Product, ProductPatch, ProductResponse};
pub use query::{ProductQueryParams, SortOrder};
