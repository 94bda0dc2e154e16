//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! database is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use setlist_api::error::AppError;
use setlist_core::error::CoreError;
use setlist_core::validation::FieldErrors;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_names_the_entity_only() {
    let (status, json) = error_to_response(CoreError::not_found("Song", "Anthem").into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "Song not found");
}

#[tokio::test]
async fn validation_error_carries_field_map() {
    let mut errors = FieldErrors::new();
    errors.insert("name".into(), vec!["Missing data for required field.".into()]);

    let (status, json) = error_to_response(CoreError::Validation(errors).into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(
        json["errors"]["name"],
        serde_json::json!(["Missing data for required field."])
    );
}

#[tokio::test]
async fn conflict_returns_409() {
    let err = AppError::Core(CoreError::Conflict("Anthem is already in Road Trip".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["message"], "Anthem is already in Road Trip");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("missing name".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["message"], "missing name");
}

// ---------------------------------------------------------------------------
// Storage errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(sqlx::Error::RowNotFound.into()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn pool_timeout_returns_503() {
    let (status, json) = error_to_response(sqlx::Error::PoolTimedOut.into()).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn other_storage_errors_return_500_and_sanitize_message() {
    let err = AppError::Database(sqlx::Error::Protocol("secret connection detail".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "An internal error occurred");
    assert!(!json.to_string().contains("secret"));
}
