//! Errors raised at the Client API boundary

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("invalid API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The backend could not be reached or the connection failed mid-request
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },

    /// The backend answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Rejected {
        url: String,
        status: u16,
        /// Error payload, if the response carried a non-empty body
        body: Option<Value>,
    },

    #[error("failed to decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    /// The task running the request ended without reporting back
    #[error("request ended before a response was received")]
    Dropped,
}

impl ApiError {
    /// Error payload returned by the backend, if any
    pub fn payload(&self) -> Option<&Value> {
        match self {
            ApiError::Rejected { body, .. } => body.as_ref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Interpret an error response body
///
/// JSON bodies are kept as parsed, other text becomes a JSON string, and an
/// empty body carries no payload.
pub(crate) fn error_payload(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}
