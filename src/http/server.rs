//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, timeout, request ID, access control)
//! - Bind server to listener
//! - Graceful shutdown on Ctrl+C

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, AppInfoConfig};
use crate::http::handlers;
use crate::http::request::MakeRequestUuid;
use crate::security::access_control::access_control_middleware;
use crate::security::policy::PolicyTable;

/// Application state injected into handlers and middleware.
///
/// Built once at startup from the loaded config; nothing here mutates after
/// construction.
#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<PolicyTable>,
    pub app_info: AppInfoConfig,
}

/// HTTP server for the backend API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let policies = Arc::new(PolicyTable::from_config(&config.security));

        let state = AppState {
            policies,
            app_info: config.app.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// Layer order (outermost first): request ID, trace, request-ID
    /// propagation, timeout, access control, then the handlers. The access
    /// gate is the last thing before dispatch, so rejected requests never
    /// reach a handler.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/api/v1/ping", get(handlers::ping))
            .route("/api/v1/info", get(handlers::info))
            .route("/actuator/health", get(handlers::health))
            .fallback(handlers::not_found)
            .layer(middleware::from_fn_with_state(
                state.clone(),
                access_control_middleware,
            ))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
