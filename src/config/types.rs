//! Configuration Types

use serde::Deserialize;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Sentence segmentation ruleset settings
    #[serde(default)]
    pub model: ModelConfig,

    /// Text validation and summarization settings
    #[serde(default)]
    pub text: TextConfig,

    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database file path
    #[serde(default = "default_db_path")]
    pub path: String,

    /// Maximum pool connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_db_path() -> String {
    "data/resumo.db".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

impl DatabaseConfig {
    /// sqlx connection URL for the configured file
    pub fn database_url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

/// Sentence segmentation ruleset configuration
///
/// The ruleset file is a versioned artifact bundled with the service. It is
/// loaded once at startup and shared read-only across requests; the service
/// cannot start without it.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the SRX ruleset file
    #[serde(default = "default_model_path")]
    pub path: String,

    /// Language code selecting the rules within the file
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_model_path() -> String {
    "resources/pt-sent.srx".to_string()
}

fn default_language() -> String {
    "pt".to_string()
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            language: default_language(),
        }
    }
}

/// Text validation and summarization configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    /// Maximum accepted text length, in characters
    #[serde(default = "default_max_length")]
    pub max_length: usize,

    /// Sentence count used when a request omits `lines`
    #[serde(default = "default_lines")]
    pub default_lines: usize,

    /// Lower bound accepted for `lines` on update
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,

    /// Upper bound accepted for `lines` on update
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
}

fn default_max_length() -> usize {
    1500
}

fn default_lines() -> usize {
    2
}

fn default_min_lines() -> usize {
    1
}

fn default_max_lines() -> usize {
    10
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            default_lines: default_lines(),
            min_lines: default_min_lines(),
            max_lines: default_max_lines(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON-formatted logs
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
