//! Configuration Loader
//!
//! Merges configuration sources, highest priority first:
//! 1. environment variables
//! 2. configuration file (config.toml)
//! 3. defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Sources are merged highest priority first:
/// 1. environment variables (prefix `RESUMO_`, level separator `__`)
/// 2. configuration file (config.toml or config.local.toml)
/// 3. defaults
///
/// # Environment variable examples
/// - `RESUMO_SERVER__PORT=9090`
/// - `RESUMO_DATABASE__PATH=/data/resumo.db`
/// - `RESUMO_MODEL__PATH=/opt/models/pt-sent.srx`
/// - `RESUMO_TEXT__MAX_LENGTH=500`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file path.
///
/// With `None` the default search names are used and a missing file is not an
/// error; with an explicit path the file must exist.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // Defaults (lowest priority)
    builder = builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080)?
        .set_default("database.path", "data/resumo.db")?
        .set_default("database.max_connections", 5)?
        .set_default("model.path", "resources/pt-sent.srx")?
        .set_default("model.language", "pt")?
        .set_default("text.max_length", 1500)?
        .set_default("text.default_lines", 2)?
        .set_default("text.min_lines", 1)?
        .set_default("text.max_lines", 10)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // Configuration file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // Environment variables (highest priority), e.g. RESUMO_SERVER__PORT=9090
    builder = builder.add_source(
        Environment::with_prefix("RESUMO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the merged configuration
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "Server port cannot be 0".to_string(),
        ));
    }

    if config.database.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.model.path.is_empty() {
        return Err(ConfigError::ValidationError(
            "Model path cannot be empty".to_string(),
        ));
    }

    if config.text.max_length == 0 {
        return Err(ConfigError::ValidationError(
            "Maximum text length cannot be 0".to_string(),
        ));
    }

    if config.text.min_lines == 0 || config.text.min_lines > config.text.max_lines {
        return Err(ConfigError::ValidationError(format!(
            "Invalid lines range: {}..{}",
            config.text.min_lines, config.text.max_lines
        )));
    }

    Ok(())
}

/// Log the effective configuration at startup
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Server: {}", config.server.addr());
    tracing::info!("Database: {}", config.database.path);
    tracing::info!(
        "Database Max Connections: {}",
        config.database.max_connections
    );
    tracing::info!(
        "Segmentation Rules: {} ({})",
        config.model.path,
        config.model.language
    );
    tracing::info!("Max Text Length: {}", config.text.max_length);
    tracing::info!(
        "Summary Lines: default {}, accepted {}..{}",
        config.text.default_lines,
        config.text.min_lines,
        config.text.max_lines
    );
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
