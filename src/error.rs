//
//  foxnose-sdk
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Error Types
//!
//! Every fallible operation in the SDK returns [`FoxnoseError`]. A logical
//! request that reaches the network ends in exactly one of two leaves:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`FoxnoseError::Transport`] | No HTTP response was obtained for the final attempt |
//! | [`FoxnoseError::Api`] | A response was obtained and its status signals failure |
//!
//! The remaining variants describe problems on the caller's side of the wire:
//! bad configuration, a request issued after shutdown, or a successful body
//! that cannot be decoded into the type a resource client asked for.
//!
//! ## Example
//!
//! ```rust
//! use foxnose_sdk::FoxnoseError;
//!
//! fn describe(err: &FoxnoseError) -> String {
//!     match err {
//!         FoxnoseError::Api(api) => format!("server said {}: {}", api.status, api.message),
//!         FoxnoseError::Transport(t) => format!("network failure: {}", t),
//!         other => other.to_string(),
//!     }
//! }
//! ```

use std::error::Error as StdError;
use std::fmt;

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FoxnoseError>;

/// Unified error type for all SDK operations.
#[derive(Error, Debug)]
pub enum FoxnoseError {
    /// No HTTP response was obtained (DNS failure, refused connection,
    /// timeout, socket reset). Raised once retries are exhausted.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a failing status and no further retry
    /// was warranted.
    #[error(transparent)]
    Api(#[from] ApiErrorDetails),

    /// The SDK was configured with values it cannot use.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request was issued through a network handle that has been shut down.
    #[error("Transport closed: the {path} client has been shut down")]
    Closed {
        /// Which execution path was closed (`"blocking"` or `"async"`).
        path: &'static str,
    },

    /// A successful response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FoxnoseError {
    /// Returns the HTTP status for API-level failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(details) => Some(details.status),
            _ => None,
        }
    }

    /// Returns `true` when no response was obtained.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` when the server answered with a failing status.
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }
}

/// A network-level failure with its root cause attached.
#[derive(Debug)]
pub struct TransportError {
    message: String,
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl TransportError {
    /// Wraps an arbitrary cause with a short description.
    pub fn new<E>(message: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Self {
            message: message.into(),
            source: source.into(),
        }
    }

    /// Short description of what failed.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` if the underlying cause was a timeout.
    pub fn is_timeout(&self) -> bool {
        self.source
            .downcast_ref::<reqwest::Error>()
            .is_some_and(|e| e.is_timeout())
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transport error: {}: {}", self.message, self.source)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "request timed out"
        } else if error.is_connect() {
            "connection failed"
        } else if error.is_body() || error.is_decode() {
            "failed to read response body"
        } else {
            "request failed"
        };
        Self::new(message, error)
    }
}

/// Details of an API-level failure.
///
/// The message and error code are extracted from the body when it is JSON;
/// otherwise the canonical reason phrase for the status is used. The raw body
/// is always kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiErrorDetails {
    /// HTTP status code of the final attempt.
    pub status: u16,
    /// Machine-readable error code (`error_code` or `code`), when present.
    pub error_code: Option<String>,
    /// Human-readable description.
    pub message: String,
    /// The response body as text.
    pub body: String,
    /// The parsed JSON body, when the body was valid JSON.
    pub detail: Option<Value>,
}

impl ApiErrorDetails {
    /// Builds error details from a failing status and its body text.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body).ok();

        let message = detail
            .as_ref()
            .and_then(extract_message)
            .unwrap_or_else(|| generic_message(status));
        let error_code = detail.as_ref().and_then(extract_error_code);

        Self {
            status,
            error_code,
            message,
            body: body.to_string(),
            detail,
        }
    }
}

impl fmt::Display for ApiErrorDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_code {
            Some(code) => write!(f, "API error ({}, {}): {}", self.status, code, self.message),
            None => write!(f, "API error ({}): {}", self.status, self.message),
        }
    }
}

impl StdError for ApiErrorDetails {}

/// Pulls a readable message out of the common error body shapes:
/// `{"message": ..}`, `{"detail": ..}`, `{"error": ".."}`,
/// `{"error": {"message": ..}}` and `{"errors": [{"message": ..}]}`.
fn extract_message(json: &Value) -> Option<String> {
    if let Some(message) = json.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }

    if let Some(detail) = json.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }

    if let Some(error) = json.get("error") {
        if let Some(text) = error.as_str() {
            return Some(text.to_string());
        }
        if let Some(message) = error.get("message").and_then(Value::as_str) {
            return Some(message.to_string());
        }
    }

    json.get("errors")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn extract_error_code(json: &Value) -> Option<String> {
    ["error_code", "code"].iter().find_map(|field| match json.get(*field) {
        Some(Value::String(code)) => Some(code.clone()),
        Some(Value::Number(code)) => Some(code.to_string()),
        _ => None,
    })
}

fn generic_message(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .map(|reason| format!("HTTP {} {}", status, reason))
        .unwrap_or_else(|| format!("HTTP {} error", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_extracts_message_and_code() {
        let details = ApiErrorDetails::from_body(404, r#"{"message": "nope", "error_code": "oops"}"#);
        assert_eq!(details.status, 404);
        assert_eq!(details.message, "nope");
        assert_eq!(details.error_code.as_deref(), Some("oops"));
        assert!(details.detail.is_some());
    }

    #[test]
    fn test_api_error_nested_shapes() {
        let details = ApiErrorDetails::from_body(400, r#"{"error": {"message": "bad field"}}"#);
        assert_eq!(details.message, "bad field");

        let details = ApiErrorDetails::from_body(409, r#"{"errors": [{"message": "conflict"}], "code": 17}"#);
        assert_eq!(details.message, "conflict");
        assert_eq!(details.error_code.as_deref(), Some("17"));

        let details = ApiErrorDetails::from_body(403, r#"{"detail": "forbidden"}"#);
        assert_eq!(details.message, "forbidden");
    }

    #[test]
    fn test_api_error_non_json_body() {
        let details = ApiErrorDetails::from_body(500, "Internal Server Error");
        assert_eq!(details.body, "Internal Server Error");
        assert_eq!(details.message, "HTTP 500 Internal Server Error");
        assert!(details.error_code.is_none());
        assert!(details.detail.is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = FoxnoseError::from(ApiErrorDetails::from_body(403, r#"{"message": "forbidden", "error_code": "auth_failed"}"#));
        assert_eq!(err.to_string(), "API error (403, auth_failed): forbidden");
        assert_eq!(err.status(), Some(403));
        assert!(err.is_api());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = TransportError::new("connection failed", io);
        assert_eq!(err.message(), "connection failed");
        assert!(err.source().is_some());
        assert!(!err.is_timeout());
        assert!(err.to_string().contains("refused"));
    }
}
