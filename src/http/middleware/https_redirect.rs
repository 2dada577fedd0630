//! HTTP-to-HTTPS redirect stage.
//!
//! # Responsibilities
//! - Pass secure requests through untouched
//! - Answer insecure requests with a 307 to the https authority
//! - Run before the static-file and routing stages
//!
//! # Design Decisions
//! - A request is secure when the serve path marked the connection
//!   (TLS listener) or a proxy set `x-forwarded-proto: https`
//! - The advertised port comes from config and is omitted when 443
//! - No Host header means we cannot build a target: 400

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::http::server::AppState;

/// Request extension marking a connection that already terminated TLS.
#[derive(Debug, Clone, Copy)]
pub struct SecureConnection;

pub async fn redirect_to_https(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let config = &state.https_redirect;
    if !config.enabled || is_secure(&req) {
        return next.run(req).await;
    }

    let Some(host) = req
        .headers()
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
    else {
        return (StatusCode::BAD_REQUEST, "Missing Host header").into_response();
    };

    let host = host_without_port(host);
    let path = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    let target = if config.https_port == 443 {
        format!("https://{host}{path}")
    } else {
        format!("https://{host}:{}{path}", config.https_port)
    };

    tracing::debug!(target = %target, "Redirecting insecure request");
    Redirect::temporary(&target).into_response()
}

fn is_secure(req: &Request<Body>) -> bool {
    if req.extensions().get::<SecureConnection>().is_some() {
        return true;
    }
    req.headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

/// Strip the port from a Host header value, keeping IPv6 brackets intact.
fn host_without_port(host: &str) -> &str {
    if host.starts_with('[') {
        match host.find(']') {
            Some(end) => &host[..=end],
            None => host,
        }
    } else {
        host.rsplit_once(':').map_or(host, |(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_without_port() {
        assert_eq!(host_without_port("example.com"), "example.com");
        assert_eq!(host_without_port("example.com:8080"), "example.com");
        assert_eq!(host_without_port("127.0.0.1:5000"), "127.0.0.1");
        assert_eq!(host_without_port("[::1]:8080"), "[::1]");
        assert_eq!(host_without_port("[::1]"), "[::1]");
    }

    #[test]
    fn test_forwarded_proto_marks_request_secure() {
        let req = Request::builder()
            .header("x-forwarded-proto", "HTTPS")
            .body(Body::empty())
            .unwrap();
        assert!(is_secure(&req));

        let req = Request::builder()
            .header("x-forwarded-proto", "http")
            .body(Body::empty())
            .unwrap();
        assert!(!is_secure(&req));
    }

    #[test]
    fn test_secure_connection_extension_marks_request_secure() {
        let mut req = Request::builder().body(Body::empty()).unwrap();
        assert!(!is_secure(&req));
        req.extensions_mut().insert(SecureConnection);
        assert!(is_secure(&req));
    }
}
