//! Sentence Detector Port
//!
//! Abstraction over the external sentence-boundary artifact. Implementations
//! must be stateless after construction so a single instance can be shared
//! read-only across concurrent requests.

/// Sentence Detector Port
pub trait SentenceDetectorPort: Send + Sync {
    /// Split a text into trimmed, non-empty sentences in document order
    fn detect(&self, text: &str) -> Vec<String>;
}
