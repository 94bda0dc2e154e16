use crate::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl CoreError {
    /// Shorthand for a lookup-key miss.
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }
}
