//! Configuration loading from disk and environment.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::NotesConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding the listener port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid PORT value '{0}'")]
    Port(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn from_toml_str(content: &str) -> Result<NotesConfig, ConfigError> {
    let config: NotesConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load configuration from an optional TOML file, then apply `PORT`.
pub fn load_config(path: Option<&Path>) -> Result<NotesConfig, ConfigError> {
    let mut config = match path {
        Some(path) => from_toml_str(&fs::read_to_string(path)?)?,
        None => NotesConfig::default(),
    };

    if let Ok(port) = std::env::var(PORT_ENV) {
        apply_port_override(&mut config, &port)?;
    }

    Ok(config)
}

/// Replace the port of the listener bind address. A blank value is
/// treated as unset and leaves the address alone.
pub fn apply_port_override(config: &mut NotesConfig, port: &str) -> Result<(), ConfigError> {
    if port.trim().is_empty() {
        return Ok(());
    }

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConfigError::Port(port.to_string()))?;

    let mut addr: SocketAddr = config.listener.bind_address.parse().map_err(|_| {
        ConfigError::Validation(vec![ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        )])
    })?;
    addr.set_port(port);
    config.listener.bind_address = addr.to_string();
    Ok(())
}
