//! Configuration loading from disk.

use std::env;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{AppConfig, Environment};
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that overrides `environment` from the file.
pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration.
///
/// With no path, defaults are used. In either case the `APP_ENVIRONMENT`
/// variable, when set, wins over the file's `environment` field.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        }
        None => AppConfig::default(),
    };

    if let Ok(value) = env::var(ENVIRONMENT_VAR) {
        config.environment = Environment::from(value);
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
