//! Handlers for the `/songs` resource.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use setlist_core::catalog::SongInput;
use setlist_core::error::CoreError;
use setlist_db::models::song::SongSummary;
use setlist_db::repositories::SongRepo;

use super::conflict_on_duplicate;
use crate::error::AppResult;
use crate::query::NameParams;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Song";

/// POST /songs
///
/// Create a song from `{name, genre, artist}`.
pub async fn create_song(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let input = SongInput::from_json(&body)?;

    let song = SongRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::Conflict(format!("{ENTITY} '{}' already exists", input.name)))?;

    tracing::info!(song_id = song.id, song = %song.name, "Song created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!("{} added successfully", song.name))),
    ))
}

/// PUT /songs?name=
///
/// Replace every field of the named song, including its name.
pub async fn update_song(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let Json(body) = payload?;
    let input = SongInput::from_json(&body)?;

    let song = SongRepo::update(&state.pool, &params.name, &input)
        .await
        .map_err(|err| conflict_on_duplicate(err, ENTITY, &input.name))?
        .ok_or_else(|| CoreError::not_found(ENTITY, &params.name))?;

    tracing::info!(song_id = song.id, from = %params.name, to = %song.name, "Song updated");

    Ok(Json(MessageResponse::new(format!(
        "{} updated successfully",
        song.name
    ))))
}

/// DELETE /songs?name=
///
/// Delete the named song and detach it from every playlist.
pub async fn delete_song(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    if !SongRepo::delete(&state.pool, &params.name).await? {
        return Err(CoreError::not_found(ENTITY, &params.name).into());
    }

    tracing::info!(song = %params.name, "Song deleted");

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        params.name
    ))))
}

/// GET /songs?name=
pub async fn get_song(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let song = SongRepo::find_by_name(&state.pool, &params.name)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &params.name))?;

    Ok(Json(SongSummary::from(song)))
}
