//! Resumo - text storage and summarization service
//!
//! Stores short Portuguese texts and derives a reduced version: the first N
//! sentences, as split by a bundled SRX segmentation ruleset.
//!
//! Architecture: Hexagonal
//!
//! Domain layer (domain/):
//! - TextRecord entity and content rules
//!
//! Application layer (application/):
//! - Ports: TextRepositoryPort, SentenceDetectorPort
//! - Summarizer: first-N-sentences reduction
//! - TextService: save/update/delete/query orchestration
//!
//! Infrastructure layer (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite storage (sqlx)
//! - Adapters: SRX sentence detector, fake detector for tests

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
