#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use setlist_api::config::ServerConfig;
use setlist_api::routes;
use setlist_api::state::AppState;
use setlist_db::{DbPool, PoolConfig};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and an in-memory database URL.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        db_acquire_timeout_secs: 5,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// A fresh, migrated in-memory database. Each call is isolated.
pub async fn test_pool() -> DbPool {
    let pool = setlist_db::create_pool("sqlite::memory:", &PoolConfig::default())
        .await
        .expect("in-memory pool");
    setlist_db::run_migrations(&pool)
        .await
        .expect("migrations apply");
    pool
}

/// Build the full application router, with the production middleware
/// stack, over the given pool.
pub fn build_test_app(pool: DbPool) -> Router {
    routes::build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

/// Shorthand: fresh database plus app.
pub async fn test_app() -> Router {
    build_test_app(test_pool().await)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// `path?name=<name>`, with the name percent-encoded.
pub fn by_name(path: &str, name: &str) -> String {
    format!("{path}?name={}", urlencoding::encode(name))
}

/// `path?playlist_name=<playlist>&song_name=<song>`, both percent-encoded.
pub fn membership(path: &str, playlist: &str, song: &str) -> String {
    format!(
        "{path}?playlist_name={}&song_name={}",
        urlencoding::encode(playlist),
        urlencoding::encode(song)
    )
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str) -> Response {
    send(app, Method::POST, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub async fn create_song(app: &Router, name: &str, genre: &str, artist: &str) {
    let response = post_json(
        app,
        "/songs",
        serde_json::json!({"name": name, "genre": genre, "artist": artist}),
    )
    .await;
    assert_eq!(response.status(), 201, "creating song {name}");
}

pub async fn create_playlist(app: &Router, name: &str) {
    let response = post_json(app, "/playlists", serde_json::json!({"name": name})).await;
    assert_eq!(response.status(), 201, "creating playlist {name}");
}
