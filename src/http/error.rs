//! Unhandled-failure conversion.
//!
//! # Responsibilities
//! - Convert action errors and handler panics into client responses
//! - Branch on the environment mode resolved at startup
//!
//! # Design Decisions
//! - Production: the client is redirected (303) to the configured error
//!   path; no failure detail leaks into the response
//! - Development: a plain-text diagnostic with the failure detail, the
//!   skeleton's stand-in for a developer error page

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_http::catch_panic::ResponseForPanic;

use crate::config::Environment;

/// Build the response for a request that failed without being handled.
pub fn unhandled_failure_response(
    environment: Environment,
    error_path: &str,
    detail: &str,
) -> Response {
    match environment {
        Environment::Production => Redirect::to(error_path).into_response(),
        Environment::Development => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled error while processing the request:\n\n{detail}\n"),
        )
            .into_response(),
    }
}

/// Panic handler for the catch-panic stage.
///
/// Shares the conversion above so panics and action errors surface
/// identically.
#[derive(Clone)]
pub struct PanicRecovery {
    environment: Environment,
    error_path: Arc<str>,
}

impl PanicRecovery {
    pub fn new(environment: Environment, error_path: &str) -> Self {
        Self {
            environment,
            error_path: error_path.into(),
        }
    }
}

impl ResponseForPanic for PanicRecovery {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response {
        let detail = panic_message(err.as_ref());
        tracing::error!(detail = %detail, "Request handler panicked");
        unhandled_failure_response(self.environment, &self.error_path, &detail)
    }
}

fn panic_message(err: &(dyn Any + Send)) -> String {
    if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    }
}
