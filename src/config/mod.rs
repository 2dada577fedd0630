//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize, APP_ENVIRONMENT override)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → consumed once by HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the pipeline built from it never
//!   consults the environment again
//! - All fields have defaults to allow minimal (or absent) configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ENVIRONMENT_VAR};
pub use schema::{
    AppConfig, Environment, ErrorHandlerConfig, HstsConfig, HttpsRedirectConfig, ListenerConfig,
    ObservabilityConfig, StaticFilesConfig, TlsConfig,
};
pub use validation::{validate_config, ValidationError};
