use axum::Json;

use crate::incoming::http_axum::dto::responses::{HealthResponse, ServerTestResponse};

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse,
         example = json!({"status": "healthy", "service": "watermark-app"}))
    ),
    tag = "system",
    summary = "Liveness check",
    operation_id = "health_check"
))]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/test",
    responses(
        (status = 200, description = "Server answers requests", body = ServerTestResponse,
         example = json!({"message": "Server is running!", "status": "ok"}))
    ),
    tag = "system",
    operation_id = "server_test"
))]
pub async fn server_test() -> Json<ServerTestResponse> {
    Json(ServerTestResponse::ok())
}
