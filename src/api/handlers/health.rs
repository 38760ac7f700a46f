//! Healthcheck handler

use axum::Json;

use crate::api::response::HealthResponse;

/// Handler for GET /healthcheck.
pub(super) async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
