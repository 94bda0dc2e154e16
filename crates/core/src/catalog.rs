//! Validated song and playlist payloads.
//!
//! Handlers hand the raw JSON body to [`SongInput::from_json`] or
//! [`PlaylistInput::from_json`]; on success the typed input is ready for the
//! store, otherwise a [`CoreError::Validation`] lists every failing field.

use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;
use crate::validation::evaluator::{evaluate_shape, merge_validator_errors};
use crate::validation::rules::{MAX_FIELD_LEN, MIN_FIELD_LEN};
use crate::validation::FieldRule;

/// Accepted keys for a song body. All are required.
pub const SONG_FIELDS: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::required("genre"),
    FieldRule::required("artist"),
];

/// Accepted keys for a playlist body. Only `name` is required.
pub const PLAYLIST_FIELDS: &[FieldRule] = &[
    FieldRule::required("name"),
    FieldRule::optional("genre"),
    FieldRule::optional("artist"),
];

/// Full replacement values for a song (create and update alike).
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct SongInput {
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub name: String,
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub genre: String,
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub artist: String,
}

impl SongInput {
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let check = evaluate_shape(SONG_FIELDS, body);
        if check.is_rejected() {
            return Err(CoreError::Validation(check.errors));
        }

        let input = Self {
            name: check.string("name"),
            genre: check.string("genre"),
            artist: check.string("artist"),
        };

        let mut errors = check.errors;
        merge_validator_errors(&mut errors, input.validate());
        if errors.is_empty() {
            Ok(input)
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}

/// Full replacement values for a playlist. Absent optional fields clear the
/// stored value on update.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct PlaylistInput {
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub name: String,
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub genre: Option<String>,
    #[validate(length(min = MIN_FIELD_LEN, max = MAX_FIELD_LEN))]
    pub artist: Option<String>,
}

impl PlaylistInput {
    pub fn from_json(body: &Value) -> Result<Self, CoreError> {
        let check = evaluate_shape(PLAYLIST_FIELDS, body);
        if check.is_rejected() {
            return Err(CoreError::Validation(check.errors));
        }

        let input = Self {
            name: check.string("name"),
            genre: check.optional_string("genre"),
            artist: check.optional_string("artist"),
        };

        let mut errors = check.errors;
        merge_validator_errors(&mut errors, input.validate());
        if errors.is_empty() {
            Ok(input)
        } else {
            Err(CoreError::Validation(errors))
        }
    }
}
