//! Error types for the layers around the cache
//!
//! The cache itself never fails: absent and expired keys read as `None`. These
//! errors belong to the callers that need a key to exist (the HTTP surface and
//! the OAuth flow helpers).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache service and OAuth helpers.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key absent, expired or already consumed
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Cached value could not be converted to or from its typed form
    #[error("Malformed cache entry '{key}': {source}")]
    MalformedEntry {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            CacheError::MalformedEntry { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache service.
pub type Result<T> = std::result::Result<T, CacheError>;
