//! Application Layer
//!
//! Use-case orchestration:
//! - ports: persistence and sentence-detection abstractions
//! - summarizer: first-N-sentences reduction
//! - service: save/update/delete/query orchestration
//! - error: application layer errors

pub mod error;
pub mod ports;
pub mod service;
pub mod summarizer;

pub use error::ApplicationError;
pub use ports::{RepositoryError, SentenceDetectorPort, TextRepositoryPort};
pub use service::TextService;
pub use summarizer::Summarizer;
