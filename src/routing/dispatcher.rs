//! Controller/action dispatch.
//!
//! # Responsibilities
//! - Store the controller/action registry
//! - Look up the handler for resolved route values
//! - Return explicit no-match for unknown controllers or actions
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Lookup is case-insensitive, so `/home/index` and `/Home/Index`
//!   dispatch identically
//! - Handlers are boxed async functions; the registry imposes no trait
//!   on controller implementations

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::http::{HeaderMap, Method};
use axum::response::Response;
use futures_util::future::BoxFuture;
use thiserror::Error;

use crate::routing::pattern::RouteValues;

/// A request-time failure raised by an action.
///
/// How it is surfaced depends on the environment mode: a redirect to the
/// configured error path in production, a diagnostic page in development.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Request context handed to an action.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Values resolved from the route pattern.
    pub route: RouteValues,
    pub method: Method,
    pub headers: HeaderMap,
}

type ActionFuture = BoxFuture<'static, Result<Response, ActionError>>;

/// A registered action handler.
pub type ActionHandler = Arc<dyn Fn(ActionContext) -> ActionFuture + Send + Sync>;

/// Registry mapping `(controller, action)` pairs to handlers.
#[derive(Default)]
pub struct ControllerRegistry {
    actions: HashMap<(String, String), ActionHandler>,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an async action under a controller name.
    pub fn register<F, Fut>(&mut self, controller: &str, action: &str, handler: F)
    where
        F: Fn(ActionContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response, ActionError>> + Send + 'static,
    {
        let key = (controller.to_ascii_lowercase(), action.to_ascii_lowercase());
        self.actions
            .insert(key, Arc::new(move |ctx| Box::pin(handler(ctx))));
    }

    /// Look up the handler for resolved route values.
    pub fn lookup(&self, values: &RouteValues) -> Option<ActionHandler> {
        let key = (
            values.controller.to_ascii_lowercase(),
            values.action.to_ascii_lowercase(),
        );
        self.actions.get(&key).cloned()
    }

    /// Number of registered actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
