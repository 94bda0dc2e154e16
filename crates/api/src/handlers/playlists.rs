//! Handlers for the `/playlists` resource, playlist membership, and the
//! sorted song listing.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use setlist_core::catalog::PlaylistInput;
use setlist_core::error::CoreError;
use setlist_db::models::membership::MembershipChange;
use setlist_db::models::playlist::PlaylistSummary;
use setlist_db::repositories::{MembershipRepo, PlaylistRepo};

use super::conflict_on_duplicate;
use crate::error::{AppError, AppResult};
use crate::query::{MembershipParams, NameParams};
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Playlist";

// ---------------------------------------------------------------------------
// Playlist CRUD
// ---------------------------------------------------------------------------

/// POST /playlists
///
/// Create a playlist from `{name, genre?, artist?}`.
pub async fn create_playlist(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(body) = payload?;
    let input = PlaylistInput::from_json(&body)?;

    let playlist = PlaylistRepo::create(&state.pool, &input)
        .await?
        .ok_or_else(|| CoreError::Conflict(format!("{ENTITY} '{}' already exists", input.name)))?;

    tracing::info!(playlist_id = playlist.id, playlist = %playlist.name, "Playlist created");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(format!(
            "{} added successfully",
            playlist.name
        ))),
    ))
}

/// PUT /playlists?name=
///
/// Replace every field of the named playlist. Omitted optional fields are
/// cleared.
pub async fn update_playlist(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;
    let Json(body) = payload?;
    let input = PlaylistInput::from_json(&body)?;

    let playlist = PlaylistRepo::update(&state.pool, &params.name, &input)
        .await
        .map_err(|err| conflict_on_duplicate(err, ENTITY, &input.name))?
        .ok_or_else(|| CoreError::not_found(ENTITY, &params.name))?;

    tracing::info!(
        playlist_id = playlist.id,
        from = %params.name,
        to = %playlist.name,
        "Playlist updated",
    );

    Ok(Json(MessageResponse::new(format!(
        "{} updated successfully",
        playlist.name
    ))))
}

/// DELETE /playlists?name=
///
/// Delete the named playlist and all of its memberships. Songs are kept.
pub async fn delete_playlist(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    if !PlaylistRepo::delete(&state.pool, &params.name).await? {
        return Err(CoreError::not_found(ENTITY, &params.name).into());
    }

    tracing::info!(playlist = %params.name, "Playlist deleted");

    Ok(Json(MessageResponse::new(format!(
        "{} deleted successfully",
        params.name
    ))))
}

/// GET /playlists?name=
pub async fn get_playlist(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let playlist = PlaylistRepo::find_by_name(&state.pool, &params.name)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &params.name))?;

    Ok(Json(PlaylistSummary::from(playlist)))
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

/// POST /playlists/add_song?playlist_name=&song_name=
pub async fn add_song(
    State(state): State<AppState>,
    params: Result<Query<MembershipParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let change = MembershipRepo::add(&state.pool, &params.playlist_name, &params.song_name).await?;
    if change == MembershipChange::Unchanged {
        return Err(CoreError::Conflict(format!(
            "{} is already in {}",
            params.song_name, params.playlist_name
        ))
        .into());
    }
    missing_endpoint(change, &params)?;

    tracing::info!(
        playlist = %params.playlist_name,
        song = %params.song_name,
        "Song added to playlist",
    );

    Ok(Json(MessageResponse::new(format!(
        "{} added to {} successfully",
        params.song_name, params.playlist_name
    ))))
}

/// DELETE /playlists/remove_song?playlist_name=&song_name=
pub async fn remove_song(
    State(state): State<AppState>,
    params: Result<Query<MembershipParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let change =
        MembershipRepo::remove(&state.pool, &params.playlist_name, &params.song_name).await?;
    if change == MembershipChange::Unchanged {
        return Err(CoreError::not_found(
            "Membership",
            format!("{}/{}", params.playlist_name, params.song_name),
        )
        .into());
    }
    missing_endpoint(change, &params)?;

    tracing::info!(
        playlist = %params.playlist_name,
        song = %params.song_name,
        "Song removed from playlist",
    );

    Ok(Json(MessageResponse::new(format!(
        "{} removed from {} successfully",
        params.song_name, params.playlist_name
    ))))
}

/// Map a missing playlist or song to 404; other outcomes pass through.
fn missing_endpoint(change: MembershipChange, params: &MembershipParams) -> Result<(), AppError> {
    match change {
        MembershipChange::PlaylistMissing => {
            Err(CoreError::not_found(ENTITY, &params.playlist_name).into())
        }
        MembershipChange::SongMissing => Err(CoreError::not_found("Song", &params.song_name).into()),
        MembershipChange::Applied | MembershipChange::Unchanged => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Sorted listing
// ---------------------------------------------------------------------------

/// GET /playlists/sort?name=
///
/// Songs in the playlist by name ascending, then artist descending, then
/// genre descending.
pub async fn sort_songs(
    State(state): State<AppState>,
    params: Result<Query<NameParams>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(params) = params?;

    let songs = PlaylistRepo::songs_sorted(&state.pool, &params.name)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &params.name))?;

    Ok(Json(songs))
}
