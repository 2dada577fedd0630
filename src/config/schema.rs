//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! application. All types derive Serde traits for deserialization from
//! config files, and every section has defaults so an empty file is a
//! valid configuration.

use serde::{Deserialize, Serialize};

/// Process-wide environment mode.
///
/// Anything that is not `development` (case-insensitive) is treated as
/// [`Environment::Production`], which matches how deployment platforms
/// hand out arbitrary environment names (`staging`, `qa`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

impl From<String> for Environment {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("development") || value.eq_ignore_ascii_case("dev") {
            Environment::Development
        } else {
            Environment::Production
        }
    }
}

impl From<Environment> for String {
    fn from(value: Environment) -> Self {
        value.to_string()
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => f.write_str("development"),
            Environment::Production => f.write_str("production"),
        }
    }
}

/// Root configuration for the application.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Environment mode. Overridable via the `APP_ENVIRONMENT` variable.
    pub environment: Environment,

    /// Listener configuration (bind address, TLS).
    pub listener: ListenerConfig,

    /// Static asset serving.
    pub static_files: StaticFilesConfig,

    /// HTTP-to-HTTPS redirection.
    pub https_redirect: HttpsRedirectConfig,

    /// Strict-Transport-Security header (emitted outside development).
    pub hsts: HstsConfig,

    /// Unhandled-failure handling.
    pub error_handler: ErrorHandlerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Optional TLS configuration. When present the listener terminates
    /// TLS itself and its connections skip the HTTPS-redirect stage.
    pub tls: Option<TlsConfig>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            tls: None,
        }
    }
}

/// TLS configuration for the listener.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Enable the static file stage.
    pub enabled: bool,

    /// Public directory served verbatim by path.
    pub root: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            root: "wwwroot".to_string(),
        }
    }
}

/// HTTP-to-HTTPS redirect configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpsRedirectConfig {
    /// Enable the redirect stage. Insecure requests get a 307 to the
    /// https authority before any later stage runs.
    pub enabled: bool,

    /// Port advertised in the redirect Location. Omitted when 443.
    pub https_port: u16,
}

impl Default for HttpsRedirectConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            https_port: 443,
        }
    }
}

/// Strict-Transport-Security configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HstsConfig {
    /// max-age directive in seconds.
    pub max_age_secs: u64,

    /// Emit the includeSubDomains directive.
    pub include_subdomains: bool,
}

impl Default for HstsConfig {
    fn default() -> Self {
        Self {
            // 30 days, the conventional starter value.
            max_age_secs: 2_592_000,
            include_subdomains: false,
        }
    }
}

/// Unhandled-failure handling configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ErrorHandlerConfig {
    /// Path the client is redirected to when a request fails outside
    /// development mode.
    pub path: String,
}

impl Default for ErrorHandlerConfig {
    fn default() -> Self {
        Self {
            path: "/Home/Error".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log level (trace, debug, info, warn, error). `RUST_LOG`
    /// takes precedence when set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing_is_lenient() {
        assert_eq!(Environment::from("development".to_string()), Environment::Development);
        assert_eq!(Environment::from("Development".to_string()), Environment::Development);
        assert_eq!(Environment::from("dev".to_string()), Environment::Development);
        assert_eq!(Environment::from("production".to_string()), Environment::Production);
        assert_eq!(Environment::from("Staging".to_string()), Environment::Production);
        assert_eq!(Environment::from(String::new()), Environment::Production);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.listener.bind_address, "127.0.0.1:8080");
        assert!(config.static_files.enabled);
        assert_eq!(config.static_files.root, "wwwroot");
        assert!(config.https_redirect.enabled);
        assert_eq!(config.https_redirect.https_port, 443);
        assert_eq!(config.error_handler.path, "/Home/Error");
        assert_eq!(config.hsts.max_age_secs, 2_592_000);
    }

    #[test]
    fn test_partial_config_overrides_only_named_fields() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "development"

            [listener]
            bind_address = "0.0.0.0:5000"

            [https_redirect]
            enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert!(!config.https_redirect.enabled);
        // Untouched sections keep defaults.
        assert_eq!(config.static_files.root, "wwwroot");
    }
}
