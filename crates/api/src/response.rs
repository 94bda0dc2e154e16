//! Shared response body types for API handlers.
//!
//! Mutating endpoints answer with a single human-readable `message`. Use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` so every handler
//! serializes the same shape.

use serde::Serialize;

/// Standard `{ "message": "..." }` response body.
///
/// # Example
///
/// ```ignore
/// Ok((StatusCode::CREATED, Json(MessageResponse::new(format!("{name} added successfully")))))
/// ```
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
