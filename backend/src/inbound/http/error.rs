//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting actix handlers
//! turn failures into consistent `{"detail": ...}` bodies and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};
use tracing::error;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let detail = if matches!(self.code(), ErrorCode::Internal) {
            // Do not leak backend detail to clients; it is already logged.
            error!(detail = %self, "internal error returned to client");
            Value::String("Internal server error".into())
        } else {
            self.detail().clone()
        };

        HttpResponse::build(self.status_code()).json(json!({ "detail": detail }))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::json;

    async fn body_of(error: &Error) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("JSON body")
    }

    #[rstest]
    #[case(Error::validation(json!([])), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::not_found("Todo not found"), StatusCode::NOT_FOUND)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_error_code(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn not_found_body_carries_fixed_detail_string() {
        let body = body_of(&Error::not_found("Todo not found")).await;
        assert_eq!(body, json!({ "detail": "Todo not found" }));
    }

    #[actix_web::test]
    async fn validation_body_passes_structured_detail_through() {
        let detail = json!([{ "field": "title", "code": "empty_title" }]);
        let body = body_of(&Error::validation(detail.clone())).await;
        assert_eq!(body, json!({ "detail": detail }));
    }

    #[actix_web::test]
    async fn internal_detail_is_redacted() {
        let body = body_of(&Error::internal("password=hunter2")).await;
        assert_eq!(body, json!({ "detail": "Internal server error" }));
    }
}
