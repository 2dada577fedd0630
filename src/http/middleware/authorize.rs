//! Authorization stage.
//!
//! # Responsibilities
//! - Consult the configured policy for every request about to dispatch
//! - Short-circuit denied requests before any controller runs
//!
//! # Design Decisions
//! - The skeleton declares no policy of its own; the default allows
//!   everything. Embedders inject a real policy through the server
//!   constructor.
//! - The policy sees the raw request plus the resolved route values, so
//!   it can gate by controller/action without re-parsing the path.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::server::AppState;
use crate::routing::RouteValues;

/// Outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// Reject with the given status, typically 401 or 403.
    Deny(StatusCode),
}

/// Hook point for access control. No policy ships with the skeleton.
pub trait AuthorizationPolicy: Send + Sync {
    fn authorize(&self, req: &Request<Body>, route: &RouteValues) -> Decision;
}

/// The default policy: every request is allowed.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AuthorizationPolicy for AllowAll {
    fn authorize(&self, _req: &Request<Body>, _route: &RouteValues) -> Decision {
        Decision::Allow
    }
}

pub async fn enforce(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    // The resolve stage runs first; a missing extension means the request
    // bypassed routing (nothing to authorize against).
    let Some(route) = req.extensions().get::<RouteValues>().cloned() else {
        return next.run(req).await;
    };

    match state.authorizer.authorize(&req, &route) {
        Decision::Allow => next.run(req).await,
        Decision::Deny(status) => {
            tracing::warn!(route = %route, status = %status, "Request denied by authorization policy");
            status.into_response()
        }
    }
}
