//! HTTP request handlers for the Memorizer API.
//!
//! This module wires the handler functions for all endpoints into a router.

mod health;
mod shifts;
mod songs;
mod stats;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tracing::error;

use crate::error::MemorizerError;

use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthcheck", get(health::healthcheck))
        .route(
            "/api/shifts",
            get(shifts::list_shifts).post(shifts::create_shift),
        )
        .route("/api/shifts/:id", delete(shifts::delete_shift))
        .route("/api/songs", get(songs::list_songs).post(songs::create_song))
        .route("/api/songs/:id", delete(songs::delete_song))
        .route("/api/stats/earnings", get(stats::get_earnings))
        .route("/api/stats/payout", post(stats::payout))
        .with_state(state)
}

/// Logs a failed service call and converts it into an error response.
fn service_failure(operation: &'static str) -> impl FnOnce(MemorizerError) -> ApiErrorResponse {
    move |err| {
        error!(operation, error = %err, "Service call failed");
        err.into()
    }
}
