//! Repository for the `songs` table.

use setlist_core::catalog::SongInput;

use super::NOW;
use crate::models::song::Song;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, genre, artist, created_at, updated_at";

/// Provides CRUD operations for songs, keyed by name.
pub struct SongRepo;

impl SongRepo {
    /// Insert a new song, returning the created row.
    ///
    /// Returns `None` when a song with the same name already exists.
    pub async fn create(pool: &DbPool, input: &SongInput) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (name, genre, artist) \
             VALUES (?1, ?2, ?3) \
             ON CONFLICT (name) DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(&input.artist)
            .fetch_optional(pool)
            .await
    }

    /// Find a song by its name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Song>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM songs WHERE name = ?1");
        sqlx::query_as::<_, Song>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Replace every mutable field of the song currently called `name`,
    /// including the name itself.
    ///
    /// Returns `None` if no song has that name. Renaming onto a name that is
    /// already taken fails with a unique violation.
    pub async fn update(
        pool: &DbPool,
        name: &str,
        input: &SongInput,
    ) -> Result<Option<Song>, sqlx::Error> {
        let query = format!(
            "UPDATE songs SET \
                name = ?2, \
                genre = ?3, \
                artist = ?4, \
                updated_at = {NOW} \
             WHERE name = ?1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(name)
            .bind(&input.name)
            .bind(&input.genre)
            .bind(&input.artist)
            .fetch_optional(pool)
            .await
    }

    /// Delete a song and every membership edge that references it.
    ///
    /// Both deletes run in one transaction. Returns `true` if a song was deleted.
    pub async fn delete(pool: &DbPool, name: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM playlist_songs \
             WHERE song_id IN (SELECT id FROM songs WHERE name = ?1)",
        )
        .bind(name)
        .execute(&mut *tx)
        .await?;

        let result = sqlx::query("DELETE FROM songs WHERE name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
