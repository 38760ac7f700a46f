//! Statistics handlers

use axum::{Json, extract::State, http::StatusCode};
use tracing::info;
use uuid::Uuid;

use crate::api::response::ApiErrorResponse;
use crate::api::state::AppState;
use crate::models::Earnings;

use super::service_failure;

/// Handler for GET /api/stats/earnings.
pub(super) async fn get_earnings(
    State(state): State<AppState>,
) -> Result<Json<Earnings>, ApiErrorResponse> {
    let earnings = state
        .statistics()
        .get_earnings()
        .await
        .map_err(service_failure("get_earnings"))?;

    Ok(Json(earnings))
}

/// Handler for POST /api/stats/payout.
///
/// Marks every unpaid shift and song as paid. The response body is empty.
pub(super) async fn payout(State(state): State<AppState>) -> Result<StatusCode, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let summary = state
        .statistics()
        .payout()
        .await
        .map_err(service_failure("payout"))?;

    info!(
        correlation_id = %correlation_id,
        shifts_paid = summary.shifts_paid,
        songs_paid = summary.songs_paid,
        "Payout completed"
    );

    Ok(StatusCode::OK)
}
