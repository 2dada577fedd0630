//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse args → Load config → Init logging → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C or embedder trigger → broadcast → serve loop drains → exit
//! ```
//!
//! # Design Decisions
//! - Startup failures are fatal before the listener binds; nothing is
//!   ever served from a half-configured process
//! - Shutdown is a broadcast so TLS and plain listeners can share it

pub mod shutdown;

pub use shutdown::Shutdown;
