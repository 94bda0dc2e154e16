//! Request handlers.
//!
//! Each handler validates its input through `setlist_core`, calls one
//! repository operation, and maps the outcome to a response or an
//! [`AppError`](crate::error::AppError).

pub mod playlists;
pub mod songs;

use setlist_core::error::CoreError;

use crate::error::AppError;

/// Turn a unique violation raised by a rename into a named conflict.
fn conflict_on_duplicate(err: sqlx::Error, entity: &str, name: &str) -> AppError {
    let is_duplicate =
        matches!(&err, sqlx::Error::Database(db_err) if db_err.is_unique_violation());
    if is_duplicate {
        CoreError::Conflict(format!("{entity} '{name}' already exists")).into()
    } else {
        err.into()
    }
}
