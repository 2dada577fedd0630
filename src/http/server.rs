//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the Axum router once from the immutable configuration
//! - Wire up the middleware pipeline in its fixed order
//! - Serve plain HTTP (with graceful shutdown) or TLS via axum-server
//! - Dispatch requests to the controller registry
//!
//! # Pipeline order
//! Request id / trace → HSTS (production) → panic recovery → HTTPS
//! redirect → static files → route resolution → authorization →
//! controller dispatch. The environment branch is resolved here, at
//! construction time; request handling never re-checks the mode.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use axum_server::tls_rustls::RustlsConfig;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

use crate::config::{AppConfig, Environment, HstsConfig, HttpsRedirectConfig, TlsConfig};
use crate::controllers;
use crate::http::error::{unhandled_failure_response, PanicRecovery};
use crate::http::middleware::{authorize, https_redirect, resolve, AllowAll, AuthorizationPolicy};
use crate::http::middleware::https_redirect::SecureConnection;
use crate::routing::{ActionContext, ControllerRegistry, RouteValues};

/// Fatal errors raised before or while serving traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("failed to load TLS material: {0}")]
    Tls(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Application state injected into pipeline stages and the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ControllerRegistry>,
    pub authorizer: Arc<dyn AuthorizationPolicy>,
    pub environment: Environment,
    pub error_path: Arc<str>,
    pub https_redirect: HttpsRedirectConfig,
}

/// HTTP server for the application skeleton.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a server with the stock controllers and the allow-all
    /// authorization policy.
    pub fn new(config: AppConfig) -> Self {
        Self::with_components(config, controllers::register_all(), Arc::new(AllowAll))
    }

    /// Create a server with a caller-supplied controller registry and
    /// authorization policy.
    pub fn with_components(
        config: AppConfig,
        registry: ControllerRegistry,
        authorizer: Arc<dyn AuthorizationPolicy>,
    ) -> Self {
        let state = AppState {
            registry: Arc::new(registry),
            authorizer,
            environment: config.environment,
            error_path: config.error_handler.path.as_str().into(),
            https_redirect: config.https_redirect.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        // Innermost stages: resolution → authorization → dispatch.
        let dispatch = Router::new()
            .fallback(dispatch_request)
            .layer(middleware::from_fn_with_state(state.clone(), authorize::enforce))
            .layer(middleware::from_fn(resolve::resolve_route))
            .with_state(state.clone());

        // Static files sit in front of routing: a file hit never reaches
        // the dispatcher, a miss (or non-GET method) falls through.
        let mut app = if config.static_files.enabled {
            let static_stage = ServeDir::new(&config.static_files.root)
                .call_fallback_on_method_not_allowed(true)
                .fallback(dispatch);
            Router::new().fallback_service(static_stage)
        } else {
            dispatch
        };

        app = app.layer(middleware::from_fn_with_state(
            state.clone(),
            https_redirect::redirect_to_https,
        ));

        app = app.layer(CatchPanicLayer::custom(PanicRecovery::new(
            state.environment,
            &state.error_path,
        )));

        if !config.environment.is_development() {
            app = app.layer(SetResponseHeaderLayer::if_not_present(
                header::STRICT_TRANSPORT_SECURITY,
                hsts_header_value(&config.hsts),
            ));
        }

        app.layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server on a plain HTTP listener until shutdown.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), StartupError> {
        let addr = listener.local_addr().map_err(StartupError::Bind)?;
        tracing::info!(address = %addr, environment = %self.config.environment, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Run the server with TLS termination until shutdown.
    ///
    /// Connections accepted here are marked secure so the redirect stage
    /// passes them through.
    pub async fn run_tls(
        self,
        addr: SocketAddr,
        tls: &TlsConfig,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), StartupError> {
        let rustls = RustlsConfig::from_pem_file(&tls.cert_path, &tls.key_path)
            .await
            .map_err(StartupError::Tls)?;

        let app = self
            .router
            .layer(middleware::map_request(mark_connection_secure));

        let handle = axum_server::Handle::new();
        {
            let handle = handle.clone();
            tokio::spawn(async move {
                let _ = shutdown.recv().await;
                handle.graceful_shutdown(Some(Duration::from_secs(10)));
            });
        }

        tracing::info!(address = %addr, environment = %self.config.environment, "HTTPS server starting");

        axum_server::bind_rustls(addr, rustls)
            .handle(handle)
            .serve(app.into_make_service())
            .await
            .map_err(StartupError::Serve)?;

        tracing::info!("HTTPS server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Clone the assembled router, e.g. to drive it without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

async fn mark_connection_secure(mut req: Request<Body>) -> Request<Body> {
    req.extensions_mut().insert(SecureConnection);
    req
}

fn hsts_header_value(config: &HstsConfig) -> HeaderValue {
    let mut value = format!("max-age={}", config.max_age_secs);
    if config.include_subdomains {
        value.push_str("; includeSubDomains");
    }
    // Digits plus a fixed directive, always header-safe.
    HeaderValue::from_str(&value).expect("HSTS directive is a valid header value")
}

/// Terminal pipeline stage: look up the action for the resolved route and
/// invoke it.
async fn dispatch_request(State(state): State<AppState>, req: Request<Body>) -> Response {
    let Some(route) = req.extensions().get::<RouteValues>().cloned() else {
        // The resolve stage rejects unmatched paths before this point.
        return StatusCode::NOT_FOUND.into_response();
    };

    let Some(handler) = state.registry.lookup(&route) else {
        tracing::debug!(route = %route, "No controller action registered");
        return StatusCode::NOT_FOUND.into_response();
    };

    let ctx = ActionContext {
        route: route.clone(),
        method: req.method().clone(),
        headers: req.headers().clone(),
    };

    match handler(ctx).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(route = %route, error = %e, "Unhandled action failure");
            unhandled_failure_response(state.environment, &state.error_path, &e.to_string())
        }
    }
}
