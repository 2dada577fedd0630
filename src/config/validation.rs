//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (ports, header-safe paths)
//! - Check TLS material is fully specified
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic violation found in a configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("listener.tls.{0} must not be empty")]
    EmptyTlsPath(&'static str),

    #[error("static_files.root must not be empty when static files are enabled")]
    EmptyStaticRoot,

    #[error("https_redirect.https_port must not be 0")]
    ZeroHttpsPort,

    #[error("hsts.max_age_secs must be greater than 0")]
    ZeroHstsMaxAge,

    #[error("error_handler.path {0:?} must start with '/' and be header-safe")]
    InvalidErrorPath(String),
}

/// Validate a parsed configuration, collecting every violation.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if let Some(tls) = &config.listener.tls {
        if tls.cert_path.is_empty() {
            errors.push(ValidationError::EmptyTlsPath("cert_path"));
        }
        if tls.key_path.is_empty() {
            errors.push(ValidationError::EmptyTlsPath("key_path"));
        }
    }

    if config.static_files.enabled && config.static_files.root.is_empty() {
        errors.push(ValidationError::EmptyStaticRoot);
    }

    if config.https_redirect.enabled && config.https_redirect.https_port == 0 {
        errors.push(ValidationError::ZeroHttpsPort);
    }

    if config.hsts.max_age_secs == 0 {
        errors.push(ValidationError::ZeroHstsMaxAge);
    }

    // The error path ends up in a Location header verbatim.
    let path = &config.error_handler.path;
    if !path.starts_with('/') || HeaderValue::from_str(path).is_err() {
        errors.push(ValidationError::InvalidErrorPath(path.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_all_errors_are_collected() {
        let mut config = AppConfig::default();
        config.listener.bind_address = "not-an-address".to_string();
        config.static_files.root = String::new();
        config.error_handler.path = "Home/Error".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_zero_https_port_rejected_only_when_enabled() {
        let mut config = AppConfig::default();
        config.https_redirect.https_port = 0;
        assert!(validate_config(&config).is_err());

        config.https_redirect.enabled = false;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_error_path_must_be_header_safe() {
        let mut config = AppConfig::default();
        config.error_handler.path = "/Home/\nError".to_string();
        assert!(validate_config(&config).is_err());
    }
}
