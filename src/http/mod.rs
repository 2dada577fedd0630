//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, pipeline assembly, serve loop)
//!     → middleware/ (redirect, resolution, authorization stages)
//!     → routing + controllers (dispatch)
//!     → error.rs (unhandled-failure conversion)
//!     → Send to client
//! ```

pub mod error;
pub mod middleware;
pub mod server;

pub use error::{unhandled_failure_response, PanicRecovery};
pub use middleware::{AllowAll, AuthorizationPolicy, Decision};
pub use server::{AppState, HttpServer, StartupError};
