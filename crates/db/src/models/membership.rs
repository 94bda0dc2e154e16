//! Outcome of a membership mutation.

/// What happened when adding or removing a `(playlist, song)` edge.
///
/// Missing endpoints are reported playlist first: if both are absent the
/// caller sees [`MembershipChange::PlaylistMissing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipChange {
    /// The edge was inserted (add) or deleted (remove).
    Applied,
    /// Add found the edge already present; remove found it absent.
    Unchanged,
    PlaylistMissing,
    SongMissing,
}
