//! Route resolution stage.
//!
//! Resolves the request path against the default route pattern and
//! attaches the result as a request extension for the authorization and
//! dispatch stages. Paths the pattern cannot match short-circuit to 404.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::routing::RouteValues;

pub async fn resolve_route(mut req: Request<Body>, next: Next) -> Response {
    match RouteValues::resolve(req.uri().path()) {
        Some(values) => {
            tracing::debug!(route = %values, "Route resolved");
            req.extensions_mut().insert(values);
            next.run(req).await
        }
        None => {
            tracing::debug!(path = %req.uri().path(), "Path does not match the route pattern");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
