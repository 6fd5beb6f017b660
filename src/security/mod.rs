//! Access-control subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → access_control.rs (axum middleware, runs before every handler)
//!     → policy.rs (ordered rule table: path → Public | Authenticated)
//!     → Public: dispatch to handler
//!     → Authenticated: 401, handler never runs
//! ```
//!
//! # Design Decisions
//! - The rule table is built once at startup and shared via Arc
//! - Evaluation is a pure function over the request path
//! - Unmatched paths fall through to deny (authentication required)

pub mod access_control;
pub mod policy;

pub use access_control::{access_control_middleware, AuthError};
pub use policy::{AccessPolicy, PathRule, PolicyTable};
