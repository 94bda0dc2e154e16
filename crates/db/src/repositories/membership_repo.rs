//! Repository for the `playlist_songs` membership edges.

use setlist_core::types::DbId;
use sqlx::SqliteConnection;

use crate::models::membership::MembershipChange;
use crate::DbPool;

/// Adds and removes `(playlist, song)` edges by name.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Link a song to a playlist. Idempotent: an existing edge is left as is
    /// and reported as [`MembershipChange::Unchanged`].
    ///
    /// The insert is the first statement of the transaction so it takes the
    /// write lock up front; endpoints are only resolved when nothing was
    /// inserted.
    pub async fn add(
        pool: &DbPool,
        playlist_name: &str,
        song_name: &str,
    ) -> Result<MembershipChange, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "INSERT INTO playlist_songs (playlist_id, song_id) \
             SELECT p.id, s.id FROM playlists p, songs s \
             WHERE p.name = ?1 AND s.name = ?2 \
             ON CONFLICT (playlist_id, song_id) DO NOTHING",
        )
        .bind(playlist_name)
        .bind(song_name)
        .execute(&mut *tx)
        .await?;

        let change = if result.rows_affected() > 0 {
            MembershipChange::Applied
        } else {
            resolve(&mut *tx, playlist_name, song_name).await?
        };

        tx.commit().await?;
        Ok(change)
    }

    /// Unlink a song from a playlist. A missing edge is reported as
    /// [`MembershipChange::Unchanged`]; other edges are never touched.
    pub async fn remove(
        pool: &DbPool,
        playlist_name: &str,
        song_name: &str,
    ) -> Result<MembershipChange, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM playlist_songs \
             WHERE playlist_id = (SELECT id FROM playlists WHERE name = ?1) \
               AND song_id = (SELECT id FROM songs WHERE name = ?2)",
        )
        .bind(playlist_name)
        .bind(song_name)
        .execute(&mut *tx)
        .await?;

        let change = if result.rows_affected() > 0 {
            MembershipChange::Applied
        } else {
            resolve(&mut *tx, playlist_name, song_name).await?
        };

        tx.commit().await?;
        Ok(change)
    }
}

/// Explain a write that touched no row: a missing endpoint, playlist first,
/// or [`MembershipChange::Unchanged`] when both exist.
async fn resolve(
    conn: &mut SqliteConnection,
    playlist_name: &str,
    song_name: &str,
) -> Result<MembershipChange, sqlx::Error> {
    let playlist_id: Option<DbId> = sqlx::query_scalar("SELECT id FROM playlists WHERE name = ?1")
        .bind(playlist_name)
        .fetch_optional(&mut *conn)
        .await?;
    if playlist_id.is_none() {
        return Ok(MembershipChange::PlaylistMissing);
    }

    let song_id: Option<DbId> = sqlx::query_scalar("SELECT id FROM songs WHERE name = ?1")
        .bind(song_name)
        .fetch_optional(&mut *conn)
        .await?;
    if song_id.is_none() {
        return Ok(MembershipChange::SongMissing);
    }

    Ok(MembershipChange::Unchanged)
}
