use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use setlist_api::config::ServerConfig;
use setlist_api::routes;
use setlist_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setlist_api=debug,setlist_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = setlist_db::create_pool(&config.database_url, &config.pool_config())
        .await
        .context("Failed to open database")?;
    tracing::info!("Database connection pool created");

    setlist_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    setlist_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- App state ---
    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
    };
    let app = routes::build_app(state);

    // --- Start server ---
    let host: IpAddr = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(host, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, closing database pool");

    let drain = Duration::from_secs(config.shutdown_timeout_secs);
    if tokio::time::timeout(drain, pool.close()).await.is_err() {
        tracing::warn!(
            timeout_secs = config.shutdown_timeout_secs,
            "Database pool did not close in time",
        );
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
///
/// If a handler cannot be installed that branch never completes, leaving
/// the other signal in charge.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
