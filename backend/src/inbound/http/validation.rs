//! Shared validation helpers for the inbound HTTP adapter.
//!
//! Validation failures carry a structured, field-level detail list so
//! clients can tell which input was rejected and why.

use actix_web::web;
use serde_json::json;

use crate::domain::Error;

/// Build a validation error for a single offending field.
pub(crate) fn field_error(
    field: &str,
    message: impl Into<String>,
    code: &str,
) -> Error {
    Error::validation(json!([{
        "field": field,
        "message": message.into(),
        "code": code,
    }]))
}

/// The one domain validation surfaced through HTTP: blank titles.
pub(crate) fn empty_title_error() -> Error {
    field_error("title", "title must not be empty", "empty_title")
}

/// JSON extractor configuration mapping malformed or missing bodies to the
/// structured validation response instead of actix's default 400.
pub(crate) fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| field_error("body", err.to_string(), "invalid_body").into())
}

/// Path extractor configuration mapping non-integer ids to the structured
/// validation response.
pub(crate) fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        field_error("id", err.to_string(), "invalid_path_parameter").into()
    })
}
