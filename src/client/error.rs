//! Client error types

use thiserror::Error;

use crate::transport::TransportError;

/// Message used when an error body is not JSON at all
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The products operations, used to pick default error messages and label logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Remove => "remove",
        }
    }

    /// Message used when an error body is JSON but carries no `message`
    pub fn default_error_message(&self) -> &'static str {
        match self {
            Operation::Remove => "Failed to delete product",
            _ => "Failed to fetch products",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Products client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered outside the success range
    #[error("{message}")]
    Status {
        status: u16,
        /// Best-effort message: the server's, else a fallback
        message: String,
        /// The server-provided message, when one could be extracted
        server_message: Option<String>,
    },

    /// A success body did not match the expected shape
    #[error("Failed to decode {operation} response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    /// A request payload could not be serialized
    #[error("Failed to encode {operation} payload: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Human-readable message for display to callers
    pub fn message(&self) -> String {
        match self {
            ClientError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status for non-success responses
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Build the error for a non-success response body
    ///
    /// A JSON body with a non-empty string `message` supplies the message.
    /// Any other JSON body falls back to the operation default; a body that
    /// is not JSON falls back to [`GENERIC_ERROR_MESSAGE`].
    pub fn from_error_body(operation: Operation, status: u16, body: &[u8]) -> Self {
        let (message, server_message) = match serde_json::from_slice::<serde_json::Value>(body) {
            // Only a string `message` counts; numbers, objects and blank text fall back.
            Ok(value) => match value.get("message").and_then(|m| m.as_str()) {
                Some(m) if !m.trim().is_empty() => (m.to_string(), Some(m.to_string())),
                _ => (operation.default_error_message().to_string(), None),
            },
            Err(_) => (GENERIC_ERROR_MESSAGE.to_string(), None),
        };

        ClientError::Status { status, message, server_message }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
