//! Impact Score Server
//!
//! HTTP query interface for the impact scoring engine.
//! Exposes `GET /score?entity=<name>`, a root status message and a health check.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;
pub mod response;

use config::ServerConfig;
use handlers::{create_router, with_cors, AppState};
use impact_engine::ScoringEngine;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `default_filter`. Does nothing if a subscriber is
/// already installed.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Start the HTTP server
///
/// Builds the scoring engine from the configured credentials and serves
/// until the process is stopped.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    config.validate()?;
    init_tracing(&config.log_filter);

    info!("Starting Impact Score server");

    let engine = ScoringEngine::from_credentials(&config.credentials);
    info!("Scoring mode: {}", engine.mode());
    info!("Credentials: {:?}", config.credentials);
    info!(
        "Entity bounds: {}..={} characters",
        config.entity.min_chars, config.entity.max_chars
    );
    info!("Permissive CORS: {}", config.cors_permissive);

    let state = AppState::new(engine, config.entity);
    let app = with_cors(create_router(state), config.cors_permissive);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
