//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Lookup by name (`?name=`), used by song and playlist endpoints.
#[derive(Debug, Deserialize)]
pub struct NameParams {
    pub name: String,
}

/// Membership endpoints (`?playlist_name=&song_name=`).
#[derive(Debug, Deserialize)]
pub struct MembershipParams {
    pub playlist_name: String,
    pub song_name: String,
}
