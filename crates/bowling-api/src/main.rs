//! Bowling score tracker API server entry point.

use std::error::Error;
use std::sync::Arc;

use axum::Router;
use bowling_api::config::ServerConfig;
use bowling_api::routes;
use bowling_api::state::AppState;
use bowling_core::id::AtomicIdGenerator;
use bowling_core::store::InMemoryGameStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting bowling score tracker API server");

    let config = ServerConfig::from_env()?;

    // Build the game registry: ids start at 1 and games live for the process.
    let app_state = AppState::new(
        Arc::new(AtomicIdGenerator::new()),
        Arc::new(InMemoryGameStore::new()),
    );

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/games", routes::games::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
