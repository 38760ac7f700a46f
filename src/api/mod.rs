//! HTTP API module for the Memorizer service.
//!
//! This module provides the REST endpoints for shifts, songs and
//! earnings statistics.

mod handlers;
mod request;
mod response;
mod state;
#[cfg(test)]
mod test_helpers;

pub use handlers::create_router;
pub use request::{ShiftRequest, SongRequest};
pub use response::{ApiError, ApiErrorResponse, HealthResponse};
pub use state::AppState;
