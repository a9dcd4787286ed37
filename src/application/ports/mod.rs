//! Application Ports
//!
//! Abstract interfaces between the application layer and infrastructure;
//! concrete implementations live under `infrastructure/`.

mod repository;
mod sentence_detector;

pub use repository::{RepositoryError, TextRepositoryPort};
pub use sentence_detector::SentenceDetectorPort;
