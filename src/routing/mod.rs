//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → pattern.rs ({controller}/{action}/{id?} resolution)
//!     → dispatcher.rs (registry lookup)
//!     → Return: action handler or explicit no-match
//!
//! Registry compilation (at startup):
//!     controllers::register_all
//!     → Freeze as immutable ControllerRegistry
//! ```
//!
//! # Design Decisions
//! - One fallback route pattern with segment defaults, mirroring the
//!   classic `{controller=Home}/{action=Index}/{id?}` mapping
//! - Registry compiled at startup, immutable at runtime
//! - Explicit no-match (404) rather than silent default

pub mod dispatcher;
pub mod pattern;

pub use dispatcher::{ActionContext, ActionError, ActionHandler, ControllerRegistry};
pub use pattern::{RouteValues, DEFAULT_ACTION, DEFAULT_CONTROLLER};
