//! Row models and store-level outcome types.
//!
//! Each entity module contains:
//! - A `FromRow` + `Serialize` struct matching the database row
//! - A lean projection used for API responses

pub mod membership;
pub mod playlist;
pub mod song;
