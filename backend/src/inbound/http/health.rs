//! Liveness endpoint.

use actix_web::{HttpResponse, get};
use serde::Serialize;
use utoipa::ToSchema;

/// Static liveness payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LivenessResponse {
    /// Fixed human-readable status line.
    #[schema(value_type = String, example = "Todo API is running")]
    pub message: &'static str,
}

/// Liveness probe; answers without touching storage.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is running", body = LivenessResponse)),
    tags = ["health"],
    operation_id = "root"
)]
#[get("/")]
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(LivenessResponse {
        message: "Todo API is running",
    })
}
