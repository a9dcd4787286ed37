//! Fake Sentence Detector - deterministic detector for tests
//!
//! Splits on a fixed delimiter instead of running segmentation rules, so
//! tests control the sentence boundaries exactly.

use crate::application::ports::SentenceDetectorPort;

/// Fake Sentence Detector
pub struct FakeSentenceDetector {
    delimiter: char,
}

impl FakeSentenceDetector {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for FakeSentenceDetector {
    fn default() -> Self {
        Self::new('|')
    }
}

impl SentenceDetectorPort for FakeSentenceDetector {
    fn detect(&self, text: &str) -> Vec<String> {
        text.split(self.delimiter)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
