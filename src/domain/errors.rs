//! Domain error types
//!
//! This module defines the error hierarchy for the quickstart.
//! All errors are domain-specific and don't expose third-party SDK types.

use azure_core::error::ErrorKind;
use azure_core::http::StatusCode;
use thiserror::Error;

/// Main quickstart error type
///
/// Every failure surfaces to the process boundary through this type.
/// Nothing is caught and retried locally.
#[derive(Debug, Error)]
pub enum QuickstartError {
    /// Configuration-related errors (missing `COSMOS_ENDPOINT`, bad TOML, ...)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The credential could not produce a valid token, or the service rejected it
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The endpoint is unreachable or misconfigured
    #[error("Connection error: {0}")]
    Connection(String),

    /// A document is missing required fields or was rejected as malformed
    #[error("Validation error: {0}")]
    Validation(String),

    /// No document exists for the requested id and partition key
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The query text is malformed
    #[error("Query syntax error: {0}")]
    QuerySyntax(String),

    /// Any other failure reported by the remote service
    #[error("Service error: {0}")]
    Service(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl QuickstartError {
    /// Process exit code for this error
    ///
    /// - `2` configuration
    /// - `3` authentication
    /// - `4` connection
    /// - `5` everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            QuickstartError::Configuration(_) => 2,
            QuickstartError::Authentication(_) => 3,
            QuickstartError::Connection(_) => 4,
            _ => 5,
        }
    }
}

/// The kind of request an SDK error came from
///
/// A 400 from the service means different things for a write and a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Client construction, token request or container read
    Connect,
    /// Upsert
    Write,
    /// Point read
    Read,
    /// Query
    Query,
}

/// Classify an `azure_core` error into the quickstart taxonomy
///
/// # Arguments
///
/// * `err` - Error returned by the Cosmos DB SDK or the identity crate
/// * `kind` - The request that failed
/// * `context` - Human-readable prefix for the message
pub fn classify_azure_error(
    err: &azure_core::Error,
    kind: RequestKind,
    context: &str,
) -> QuickstartError {
    let message = format!("{context}: {err}");

    if let Some(status) = err.http_status() {
        return classify_status(status, kind, message);
    }

    match err.kind() {
        ErrorKind::Credential => QuickstartError::Authentication(message),
        ErrorKind::Io => QuickstartError::Connection(message),
        ErrorKind::DataConversion => QuickstartError::Serialization(message),
        _ if kind == RequestKind::Connect => QuickstartError::Connection(message),
        _ => QuickstartError::Service(message),
    }
}

fn classify_status(status: StatusCode, kind: RequestKind, message: String) -> QuickstartError {
    match status {
        StatusCode::Unauthorized | StatusCode::Forbidden => {
            QuickstartError::Authentication(message)
        }
        StatusCode::NotFound if kind == RequestKind::Connect => {
            QuickstartError::Connection(message)
        }
        StatusCode::NotFound => QuickstartError::NotFound(message),
        StatusCode::BadRequest if kind == RequestKind::Query => {
            QuickstartError::QuerySyntax(message)
        }
        StatusCode::BadRequest => QuickstartError::Validation(message),
        _ => QuickstartError::Service(message),
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for QuickstartError {
    fn from(err: std::io::Error) -> Self {
        QuickstartError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for QuickstartError {
    fn from(err: serde_json::Error) -> Self {
        QuickstartError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for QuickstartError {
    fn from(err: toml::de::Error) -> Self {
        QuickstartError::Configuration(format!("TOML parse error: {err}"))
    }
}
