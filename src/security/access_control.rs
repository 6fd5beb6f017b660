//! Access Control Middleware.
//! Enforces the path allow-list before any handler runs.

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::http::server::AppState;
use crate::security::policy::AccessPolicy;

/// Errors surfaced to clients by the access-control layer.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication required")]
    AuthenticationRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::AuthenticationRequired => {
                let body = Json(serde_json::json!({
                    "error": "authentication_required",
                    "message": self.to_string(),
                }));
                (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response()
            }
        }
    }
}

/// Evaluate the policy table against the request path before dispatch.
///
/// Public paths pass straight through. Everything else requires a valid
/// credential, and no credential validator is wired in yet, so every gated
/// request is rejected, with or without an Authorization header.
pub async fn access_control_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_string();

    match state.policies.evaluate(&path) {
        AccessPolicy::Public => next.run(req).await,
        AccessPolicy::Authenticated => {
            let credential_present = req.headers().contains_key(header::AUTHORIZATION);
            warn!(
                path = %path,
                credential_present,
                "Rejecting request: authentication required"
            );
            AuthError::AuthenticationRequired.into_response()
        }
    }
}
