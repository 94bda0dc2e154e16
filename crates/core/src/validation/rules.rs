//! Field rule and error types.

use std::collections::BTreeMap;

/// Field-keyed error messages, sorted by field name for stable output.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Key used when the body as a whole is unusable.
pub const SCHEMA_KEY: &str = "_schema";

pub const MSG_INVALID_INPUT: &str = "Invalid input type.";
pub const MSG_UNKNOWN_FIELD: &str = "Unknown field.";
pub const MSG_MISSING: &str = "Missing data for required field.";
pub const MSG_NULL: &str = "Field may not be null.";
pub const MSG_NOT_STRING: &str = "Not a valid string.";
/// Reported for any field outside `MIN_FIELD_LEN..=MAX_FIELD_LEN` characters.
pub const MSG_LENGTH: &str = "Length must be between 1 and 100.";

/// Shortest accepted value for every validated string field.
pub const MIN_FIELD_LEN: u64 = 1;

/// Longest accepted value for every validated string field.
pub const MAX_FIELD_LEN: u64 = 100;

/// A string field accepted by a payload schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            required: true,
        }
    }

    pub const fn optional(field: &'static str) -> Self {
        Self {
            field,
            required: false,
        }
    }
}

/// Append `message` under `field`.
pub fn push_error(errors: &mut FieldErrors, field: &str, message: impl Into<String>) {
    errors
        .entry(field.to_string())
        .or_default()
        .push(message.into());
}
