//! Empty MVC-style web application skeleton.
//!
//! Boots an HTTP server with a fixed, ordered request pipeline and a
//! fallback `{controller}/{action}/{id?}` route. There is no business
//! logic here; the skeleton is the wiring a real application grows into.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                 WEB SKELETON                  │
//!  Request        │  ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//!  ───────────────┼─▶│  https   │──▶│  static  │──▶│ routing  │  │
//!                 │  │ redirect │   │  files   │   │ + authz  │  │
//!                 │  └──────────┘   └──────────┘   └────┬─────┘  │
//!                 │                                      ▼        │
//!  Response       │  ┌──────────────────┐        ┌──────────┐   │
//!  ◀──────────────┼──│ error conversion │◀───────│ dispatch │   │
//!                 │  └──────────────────┘        └──────────┘   │
//!                 │                                              │
//!                 │  Cross-cutting: config, logging, lifecycle   │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! The environment mode (development vs production) is resolved once at
//! startup: production installs the HSTS header and converts unhandled
//! failures into a redirect to `/Home/Error`; development surfaces them
//! as diagnostic pages instead.

// Core subsystems
pub mod config;
pub mod controllers;
pub mod http;
pub mod routing;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{AppConfig, Environment};
pub use http::{HttpServer, StartupError};
pub use lifecycle::Shutdown;
