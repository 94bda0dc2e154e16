pub mod health;
pub mod playlists;
pub mod songs;

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the catalog route tree.
///
/// Route hierarchy:
///
/// ```text
/// /songs                       get, create, update, delete   (?name=)
///
/// /playlists                   get, create, update, delete   (?name=)
/// /playlists/add_song          add membership (POST)         (?playlist_name=&song_name=)
/// /playlists/remove_song       remove membership (DELETE)    (?playlist_name=&song_name=)
/// /playlists/sort              sorted song listing (GET)     (?name=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/songs", songs::router())
        .nest("/playlists", playlists::router())
}

/// Build the full application: routes, middleware stack and state.
///
/// Shared by `main.rs` and the integration tests so both run the same
/// middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(health::router())
        .merge(api_routes())
        // -- Middleware stack (applied bottom-up) --
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(state.config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origins.
///
/// Origins that are not valid header values are logged and skipped.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
