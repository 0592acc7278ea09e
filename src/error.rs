//! Error types for the tempmail client.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for all tempmail client operations.
pub enum Error {
    /// Alias was empty when building a mailbox.
    #[error("alias can't be empty")]
    InvalidAlias,
    /// Domain is not one of the service's registered domains.
    #[error("invalid domain: {0}")]
    InvalidDomain(String),
    /// Underlying HTTP client error (connection, TLS, timeout, proxy).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// HTTP response returned a non-success status with body.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Response body was not valid JSON or did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),
    /// An expected field was absent from the response.
    #[error("missing field `{0}` in response")]
    MissingField(&'static str),
    /// A response field was present but had the wrong JSON type.
    #[error("field `{field}` has wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}
