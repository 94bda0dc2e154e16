//! Repository for the `playlists` table and the sorted song listing.

use setlist_core::catalog::PlaylistInput;
use setlist_core::types::DbId;

use super::NOW;
use crate::models::playlist::Playlist;
use crate::models::song::SongSummary;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre, artist, created_at, updated_at";

/// Provides CRUD operations for playlists, keyed by name.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// Insert a new playlist, returning the created row.
    ///
    /// Returns `None` when a playlist with the same name already exists.
    pub async fn create(
        pool: &DbPool,
        input: &PlaylistInput,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "INSERT INTO playlists (name, genre, artist) \
             VALUES (?1, ?2, ?3) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(&input.name)
            .bind(input.genre.as_deref())
            .bind(input.artist.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Find a playlist by its name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE name = ?1");
        sqlx::query_as::<_, Playlist>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable field of the playlist currently called `name`.
    ///
    /// Optional attributes absent from `input` are cleared, not kept.
    /// Returns `None` if no playlist has that name.
    pub async fn update(
        pool: &DbPool,
        name: &str,
        input: &PlaylistInput,
    ) -> Result<Option<Playlist>, sqlx::Error> {
        let query = format!(
            "UPDATE playlists SET \
                name = ?2, \
                genre = ?3, \
                artist = ?4, \
                updated_at = {NOW} \
             WHERE name = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Playlist>(&query)
            .bind(name)
            .bind(&input.name)
            .bind(input.genre.as_deref())
            .bind(input.artist.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Delete a playlist and all of its membership edges in one transaction.
    ///
    /// Returns `true` if a playlist was deleted.
    pub async fn delete(pool: &DbPool, name: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM playlist_songs \
             WHERE playlist_id IN (SELECT id FROM playlists WHERE name = ?1)",
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM playlists WHERE name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Songs in the playlist ordered by name ascending, then artist
    /// descending, then genre descending.
    ///
    /// Returns `None` if the playlist does not exist, and an empty list for
    /// an existing playlist with no songs.
    pub async fn songs_sorted(
        pool: &DbPool,
        name: &str,
    ) -> Result<Option<Vec<SongSummary>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let playlist_id: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM playlists WHERE name = ?1")
                .bind(name)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(playlist_id) = playlist_id else {
            return Ok(None);
        };

        let songs = sqlx::query_as::<_, SongSummary>(
            "SELECT s.name, s.genre, s.artist \
             FROM playlist_songs ps \
             JOIN songs s ON s.id = ps.song_id \
             WHERE ps.playlist_id = ?1 \
             ORDER BY s.name ASC, s.artist DESC, s.genre DESC",
        )
        .bind(playlist_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(songs))
    }
}
