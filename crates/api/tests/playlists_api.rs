//! HTTP-level integration tests for the `/playlists` CRUD endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, by_name, create_playlist, delete, get, membership, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn create_playlist_with_name_only() {
    let app = common::test_app().await;
    let response = post_json(&app, "/playlists", json!({"name": "Road Trip"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Road Trip added successfully"})
    );

    let json = body_json(get(&app, &by_name("/playlists", "Road Trip")).await).await;
    assert_eq!(
        json,
        json!({"name": "Road Trip", "genre": null, "artist": null})
    );
}

#[tokio::test]
async fn create_playlist_with_all_fields() {
    let app = common::test_app().await;
    let response = post_json(
        &app,
        "/playlists",
        json!({"name": "Gym", "genre": "Metal", "artist": "Various"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(&app, "/playlists?name=Gym").await).await;
    assert_eq!(json, json!({"name": "Gym", "genre": "Metal", "artist": "Various"}));
}

#[tokio::test]
async fn null_optional_field_is_treated_as_absent() {
    let app = common::test_app().await;
    let response = post_json(
        &app,
        "/playlists",
        json!({"name": "Gym", "genre": null}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn playlist_validation_errors() {
    let app = common::test_app().await;
    let response = post_json(
        &app,
        "/playlists",
        json!({"genre": "", "artist": 3}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["errors"],
        json!({
            "name": ["Missing data for required field."],
            "genre": ["Length must be between 1 and 100."],
            "artist": ["Not a valid string."],
        })
    );
}

#[tokio::test]
async fn duplicate_playlist_name_returns_409() {
    let app = common::test_app().await;
    create_playlist(&app, "Road Trip").await;

    let response = post_json(&app, "/playlists", json!({"name": "Road Trip"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["message"],
        "Playlist 'Road Trip' already exists"
    );
}

#[tokio::test]
async fn get_missing_playlist_returns_404() {
    let app = common::test_app().await;
    let response = get(&app, "/playlists?name=Nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Playlist not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_replaces_and_clears_omitted_fields() {
    let app = common::test_app().await;
    post_json(
        &app,
        "/playlists",
        json!({"name": "Gym", "genre": "Metal", "artist": "Various"}),
    )
    .await;

    let response = put_json(
        &app,
        "/playlists?name=Gym",
        json!({"name": "Gym", "genre": "Techno"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Gym updated successfully"})
    );

    let json = body_json(get(&app, "/playlists?name=Gym").await).await;
    assert_eq!(json, json!({"name": "Gym", "genre": "Techno", "artist": null}));
}

#[tokio::test]
async fn update_can_rename_and_keeps_memberships() {
    let app = common::test_app().await;
    create_playlist(&app, "Road Trip").await;
    common::create_song(&app, "Anthem", "Rock", "X").await;
    common::post(&app, &membership("/playlists/add_song", "Road Trip", "Anthem")).await;

    let response = put_json(
        &app,
        &by_name("/playlists", "Road Trip"),
        json!({"name": "Long Drive"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Long Drive updated successfully"
    );

    assert_eq!(
        get(&app, &by_name("/playlists", "Road Trip")).await.status(),
        StatusCode::NOT_FOUND
    );
    let songs = body_json(get(&app, &by_name("/playlists/sort", "Long Drive")).await).await;
    assert_eq!(songs, json!([{"name": "Anthem", "genre": "Rock", "artist": "X"}]));
}

#[tokio::test]
async fn rename_onto_existing_playlist_returns_409() {
    let app = common::test_app().await;
    create_playlist(&app, "Gym").await;
    create_playlist(&app, "Road Trip").await;

    let response = put_json(&app, "/playlists?name=Gym", json!({"name": "Road Trip"})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn update_missing_playlist_returns_404() {
    let app = common::test_app().await;
    let response = put_json(&app, "/playlists?name=Nowhere", json!({"name": "Nowhere"})).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_playlist_keeps_its_songs() {
    let app = common::test_app().await;
    create_playlist(&app, "Road Trip").await;
    common::create_song(&app, "Anthem", "Rock", "X").await;
    common::post(&app, &membership("/playlists/add_song", "Road Trip", "Anthem")).await;

    let response = delete(&app, &by_name("/playlists", "Road Trip")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Road Trip deleted successfully"})
    );

    assert_eq!(
        get(&app, &by_name("/playlists", "Road Trip")).await.status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(get(&app, "/songs?name=Anthem").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn delete_missing_playlist_returns_404() {
    let app = common::test_app().await;
    let response = delete(&app, "/playlists?name=Nowhere").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
