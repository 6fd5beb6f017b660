//! Request handlers for the public API surface.
//!
//! Every handler here is a stateless responder: fixed literal output per
//! request, no error paths. Rejected requests never reach this module.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::http::server::AppState;

/// Liveness payload: `{"status":"ok","message":"pong"}`.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub message: &'static str,
}

/// GET /api/v1/ping
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        message: "pong",
    })
}

/// Deployment metadata payload. Field order is the serialized key order.
#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// GET /api/v1/info
///
/// Currently unreachable without credentials: the endpoint is not on the
/// public allow-list and no credential validator exists yet.
pub async fn info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(AppInfo {
        name: state.app_info.name.clone(),
        version: state.app_info.version.clone(),
        description: state.app_info.description.clone(),
    })
}

/// GET /actuator/health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "UP" }))
}

/// Fallback for admitted paths with no handler.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "not_found" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppInfoConfig, SecurityConfig};
    use crate::security::PolicyTable;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            policies: Arc::new(PolicyTable::from_config(&SecurityConfig::default())),
            app_info: AppInfoConfig::default(),
        }
    }

    #[tokio::test]
    async fn ping_returns_fixed_literals() {
        let body = serde_json::to_value(ping().await.0).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "status": "ok", "message": "pong" })
        );
    }

    #[tokio::test]
    async fn ping_is_idempotent() {
        let first = serde_json::to_string(&ping().await.0).unwrap();
        let second = serde_json::to_string(&ping().await.0).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn info_reflects_app_metadata() {
        let body = serde_json::to_value(info(State(test_state())).await.0).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Plataforma de Cursos",
                "version": "1.0.0",
                "description": "Plataforma privada de cursos offline",
            })
        );
    }

    #[tokio::test]
    async fn health_reports_up() {
        let body = health().await.0;
        assert_eq!(body, serde_json::json!({ "status": "UP" }));
    }
}
