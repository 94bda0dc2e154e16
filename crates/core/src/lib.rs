//! Domain layer for the setlist catalog.
//!
//! Pure logic only: shared types, the domain error enum, and validation of
//! song and playlist payloads. Nothing in this crate touches the database.

pub mod catalog;
pub mod error;
pub mod types;
pub mod validation;
