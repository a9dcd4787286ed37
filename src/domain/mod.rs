//! Domain Layer
//!
//! Single bounded context: stored texts and their derived summaries.

pub mod text;

pub use text::{validate_content, ContentViolation, TextRecord};
