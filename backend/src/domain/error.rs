//! Domain-level error type.
//!
//! Transport agnostic: the inbound HTTP adapter maps the code to a status
//! and serialises the detail payload; nothing here knows about actix.

use serde_json::Value;

/// Stable failure category describing what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Malformed or missing input fields.
    Validation,
    /// The referenced id has no live record.
    NotFound,
    /// Backend-level failure: connectivity, constraint violation.
    Internal,
}

/// Domain error payload carried to inbound adapters.
///
/// The detail is either a plain message or, for validation failures, a
/// structured list of field errors built by the HTTP validation helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    detail: Value,
}

impl Error {
    /// Validation failure with structured field-level detail.
    #[must_use]
    pub fn validation(detail: Value) -> Self {
        Self {
            code: ErrorCode::Validation,
            detail,
        }
    }

    /// Missing-record failure with a human-readable message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::NotFound,
            detail: Value::String(message.into()),
        }
    }

    /// Backend failure. The message is for logs; the HTTP adapter replaces
    /// it with a generic one before it reaches a client.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            detail: Value::String(message.into()),
        }
    }

    /// Stable machine-readable failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Detail payload handed to adapters.
    #[must_use]
    pub fn detail(&self) -> &Value {
        &self.detail
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.detail {
            Value::String(message) => f.write_str(message),
            other => write!(f, "{other}"),
        }
    }
}

impl std::error::Error for Error {}
