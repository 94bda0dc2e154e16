//! Route definitions for songs.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Song routes mounted at `/songs`. Every method selects the song with `?name=`.
///
/// ```text
/// GET    /    -> get_song
/// POST   /    -> create_song
/// PUT    /    -> update_song
/// DELETE /    -> delete_song
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(songs::get_song)
            .post(songs::create_song)
            .put(songs::update_song)
            .delete(songs::delete_song),
    )
}
