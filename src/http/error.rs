//! HTTP Error Normalization
//!
//! Every failed call surfaces as one `ApiError` whose display text is the
//! message shown to the user.

use serde::Deserialize;
use thiserror::Error;

/// Raw outcome of a request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Failure below the HTTP layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    /// Request went out but nothing came back (includes timeouts)
    NoResponse(String),
    /// Request could not be constructed or sent
    Build(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("unauthorized, please log in again")]
    Unauthorized,
    #[error("access forbidden")]
    Forbidden,
    #[error("requested resource not found")]
    NotFound,
    #[error("internal server error")]
    ServerError,
    /// Any other non-2xx status
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error, no response from server")]
    NoResponse,
    /// Construction error, message passed through unchanged
    #[error("{0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: serde_json::Value,
}

impl ErrorBody {
    /// Server-provided message in any JSON shape; strings are taken verbatim
    fn text(self) -> Option<String> {
        match self.message {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

impl ApiError {
    /// Map a non-2xx response to its user-facing error
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            500 => ApiError::ServerError,
            _ => {
                let message = serde_json::from_str::<ErrorBody>(body)
                    .ok()
                    .and_then(ErrorBody::text)
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| format!("request failed with status code {}", status));
                ApiError::Status { status, message }
            }
        }
    }

    pub fn from_failure(failure: TransportFailure) -> Self {
        match failure {
            TransportFailure::NoResponse(_) => ApiError::NoResponse,
            TransportFailure::Build(message) => ApiError::Request(message),
        }
    }
}
