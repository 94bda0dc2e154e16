//! Playlist row and its public projection.

use serde::Serialize;
use setlist_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub id: DbId,
    pub name: String,
    pub genre: Option<String>,
    pub artist: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fields a caller sees for a playlist. Unset attributes serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistSummary {
    pub name: String,
    pub genre: Option<String>,
    pub artist: Option<String>,
}

impl From<Playlist> for PlaylistSummary {
    fn from(playlist: Playlist) -> Self {
        Self {
            name: playlist.name,
            genre: playlist.genre,
            artist: playlist.artist,
        }
    }
}
