//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&DbPool` as the first argument. Lookups go by `name`, the public
//! lookup key; internal ids never leave this crate's queries.

pub mod membership_repo;
pub mod playlist_repo;
pub mod song_repo;

pub use membership_repo::MembershipRepo;
pub use playlist_repo::PlaylistRepo;
pub use song_repo::SongRepo;

/// SQLite expression producing the current UTC time in RFC 3339 form.
pub(crate) const NOW: &str = "strftime('%Y-%m-%dT%H:%M:%fZ', 'now')";
