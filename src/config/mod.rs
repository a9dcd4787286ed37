//! Configuration Module
//!
//! Layered configuration with three sources, highest priority first:
//! - environment variables (`RESUMO_` prefix)
//! - configuration file (TOML)
//! - defaults

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, ModelConfig, ServerConfig, TextConfig};
