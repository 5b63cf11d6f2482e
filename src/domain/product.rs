//! Product Domain Models
//!
//! The client treats a product as an opaque record: only the identifier is
//! typed, every other field is carried through as JSON.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Product
// ============================================================================

/// A product record as returned by the products service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier, normalized to a string (the service may send a number)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    /// All remaining fields, untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Look up a field other than `id`
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ============================================================================
// Partial payloads
// ============================================================================

/// Any subset of a product's fields, sent as the body of create/update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductPatch(Map<String, Value>);

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ProductPatch {
    fn from(fields: Map<String, Value>) -> Self {
        ProductPatch(fields)
    }
}

// ============================================================================
// List envelope
// ============================================================================

/// Result envelope of a product listing
///
/// `total` and `total_pages` are reported by the server and not checked
/// against `products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub total_pages: u32,
}
