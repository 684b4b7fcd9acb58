mod auth;
mod config;
mod email;
mod error;
mod middleware;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use axum::Router;
use haze_core::storage::Storage;
use sha2::{Digest, Sha512};
use sqlx::postgres::PgPoolOptions;
use tower_sessions::cookie::Key;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration
    let config = config::AppConfig::from_env().map_err(|e| {
        anyhow::anyhow!(
            "Failed to load config: {e}. Are DATABASE_URL, SESSION_SECRET and ADMIN_PASSWORD set?"
        )
    })?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting site API server");

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .min_connections(config.db_min_connections)
        .connect(&config.database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {e}"))?;

    tracing::info!("Connected to PostgreSQL");

    // Run migrations
    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {e}"))?;

    tracing::info!("Database migrations applied");

    // Ensure the uploads directory exists before anything is served from it
    tokio::fs::create_dir_all(&config.uploads_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create uploads dir: {e}"))?;

    let storage = Storage::new(pool);
    storage.seed_posts().await?;

    // Optional SMTP notifications
    let mailer = email::EmailConfig::from_env().map(email::Mailer::new);
    if mailer.is_none() {
        tracing::info!("SMTP_HOST not set; inquiry notifications disabled");
    }

    let session_secret = config.session_secret.clone();
    let state = state::AppState::new(storage, config.clone(), mailer);
    let app = build_app(state, &session_secret);

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Assemble the router with the session, tracing and CORS layers.
///
/// Sessions live in an in-memory store behind a signed cookie. The
/// signing key is stretched from the configured secret so any secret
/// length is accepted. Expiry is set per session at login.
fn build_app(state: state::AppState, session_secret: &str) -> Router {
    let session_key = Key::from(Sha512::digest(session_secret.as_bytes()).as_slice());
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_signed(session_key);

    routes::build_router(state)
        .layer(session_layer)
        .layer(middleware::request_tracing::trace_layer())
        .layer(middleware::cors::cors_layer())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
