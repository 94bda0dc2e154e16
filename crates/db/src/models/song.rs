//! Song row and its public projection.

use serde::Serialize;
use setlist_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `songs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub id: DbId,
    pub name: String,
    pub genre: String,
    pub artist: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The fields a caller sees for a song: `{name, genre, artist}`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SongSummary {
    pub name: String,
    pub genre: String,
    pub artist: String,
}

impl From<Song> for SongSummary {
    fn from(song: Song) -> Self {
        Self {
            name: song.name,
            genre: song.genre,
            artist: song.artist,
        }
    }
}
