//! Shift handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::request::ShiftRequest;
use crate::api::response::ApiErrorResponse;
use crate::api::state::AppState;
use crate::models::Shift;

use super::service_failure;

/// Handler for GET /api/shifts.
pub(super) async fn list_shifts(
    State(state): State<AppState>,
) -> Result<Json<Vec<Shift>>, ApiErrorResponse> {
    let shifts = state
        .shifts()
        .list_shifts()
        .await
        .map_err(service_failure("list_shifts"))?;

    Ok(Json(shifts))
}

/// Handler for POST /api/shifts.
///
/// The cost is computed from the shift date; any cost in the body is ignored.
pub(super) async fn create_shift(
    State(state): State<AppState>,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Result<Json<Shift>, ApiErrorResponse> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected shift payload"
        );
        ApiErrorResponse::from(rejection)
    })?;

    let shift = state
        .shifts()
        .create_shift(request.into())
        .await
        .map_err(service_failure("create_shift"))?;

    info!(
        correlation_id = %correlation_id,
        shift_id = shift.id,
        date = %shift.date,
        cost = shift.cost,
        "Shift recorded"
    );

    Ok(Json(shift))
}

/// Handler for DELETE /api/shifts/{id}.
pub(super) async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiErrorResponse> {
    state
        .shifts()
        .delete_shift(id)
        .await
        .map_err(service_failure("delete_shift"))?;

    info!(shift_id = id, "Shift deleted");

    Ok(StatusCode::OK)
}
