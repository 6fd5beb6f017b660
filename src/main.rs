//! Plataforma de Cursos backend (v1).
//!
//! A small JSON API built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 CURSOS API                    │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐   ┌──────────────┐   ┌───────┐  │
//!   ─────────────────┼─▶│  http   │──▶│   security   │──▶│ ping  │  │
//!                    │  │ server  │   │ access gate  │   │ info  │  │
//!                    │  └─────────┘   └──────┬───────┘   │health │  │
//!                    │                       │           └───────┘  │
//!   401 (rejected)   │                       │                      │
//!   ◀────────────────┼───────────────────────┘                      │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │         Cross-Cutting Concerns           │ │
//!                    │  │  ┌────────┐ ┌───────────┐ ┌──────────┐  │ │
//!                    │  │  │ config │ │request IDs│ │ tracing  │  │ │
//!                    │  │  └────────┘ └───────────┘ └──────────┘  │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! # Bloco 1 Status
//!
//! Public surface is `/actuator/**` and `/api/v1/ping`; everything else
//! (including `/api/v1/info`) answers 401 until credential validation lands.

use std::path::Path;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cursos_api::config::loader::load_config;
use cursos_api::config::AppConfig;
use cursos_api::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cursos_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("cursos-api v{} starting", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults when no file is given)
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        public_paths = ?config.security.public_paths,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
