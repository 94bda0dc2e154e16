//! Route definitions for playlists and their song membership.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::playlists;
use crate::state::AppState;

/// Playlist routes mounted at `/playlists`.
///
/// ```text
/// GET    /              -> get_playlist
/// POST   /              -> create_playlist
/// PUT    /              -> update_playlist
/// DELETE /              -> delete_playlist
/// POST   /add_song      -> add_song
/// DELETE /remove_song   -> remove_song
/// GET    /sort          -> sort_songs
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(playlists::get_playlist)
                .post(playlists::create_playlist)
                .put(playlists::update_playlist)
                .delete(playlists::delete_playlist),
        )
        .route("/add_song", post(playlists::add_song))
        .route("/remove_song", delete(playlists::remove_song))
        .route("/sort", get(playlists::sort_songs))
}
