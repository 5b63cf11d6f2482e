//! Listing query parameters

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Sort direction for product listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter, sort and pagination options for listing products
///
/// Nothing is validated. A field that is `None`, zero or an empty string is
/// left out of the query string entirely, so `page: Some(0)` behaves like
/// no page at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Items per page
    pub limit: Option<u32>,
    /// Free-text search
    pub search: Option<String>,
    /// Filter by manufacturer
    pub manufacturer: Option<String>,
    /// Field name to sort by
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ProductQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }

    pub fn sort_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Key/value pairs that will be sent, in wire order
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        let numbers = [("page", self.page), ("limit", self.limit)];
        for (key, value) in numbers {
            if let Some(n) = value.filter(|n| *n != 0) {
                pairs.push((key, n.to_string()));
            }
        }

        let texts = [
            ("search", &self.search),
            ("manufacturer", &self.manufacturer),
            ("sortBy", &self.sort_by),
        ];
        for (key, value) in texts {
            if let Some(s) = value.as_deref().filter(|s| !s.is_empty()) {
                pairs.push((key, s.to_string()));
            }
        }

        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }

        pairs
    }

    /// Form-urlencoded query string, empty when nothing is set
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.to_query_pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}
