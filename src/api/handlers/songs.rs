//! Song handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::api::request::SongRequest;
use crate::api::response::ApiErrorResponse;
use crate::api::state::AppState;
use crate::models::Song;

use super::service_failure;

/// Handler for GET /api/songs.
pub(super) async fn list_songs(
    State(state): State<AppState>,
) -> Result<Json<Vec<Song>>, ApiErrorResponse> {
    let songs = state
        .songs()
        .list_songs()
        .await
        .map_err(service_failure("list_songs"))?;

    Ok(Json(songs))
}

/// Handler for POST /api/songs. The stored cost is always the song price.
pub(super) async fn create_song(
    State(state): State<AppState>,
    payload: Result<Json<SongRequest>, JsonRejection>,
) -> Result<Json<Song>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();

    let Json(request) = payload.map_err(|rejection| {
        warn!(
            correlation_id = %correlation_id,
            error = %rejection.body_text(),
            "Rejected song payload"
        );
        ApiErrorResponse::from(rejection)
    })?;

    let song = state
        .songs()
        .create_song(request.into())
        .await
        .map_err(service_failure("create_song"))?;

    info!(
        correlation_id = %correlation_id,
        song_id = song.id,
        cost = song.cost,
        "Song recorded"
    );

    Ok(Json(song))
}

/// Handler for DELETE /api/songs/{id}.
pub(super) async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiErrorResponse> {
    state
        .songs()
        .delete_song(id)
        .await
        .map_err(service_failure("delete_song"))?;

    info!(song_id = id, "Song deleted");

    Ok(StatusCode::OK)
}
