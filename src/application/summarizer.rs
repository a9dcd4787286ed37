//! Summarizer
//!
//! Thin pass-through over the sentence detector: the "summary" of a text is
//! the concatenation of its first N sentences.

use std::sync::Arc;

use crate::application::ports::SentenceDetectorPort;

/// Summarizer
///
/// Holds the shared detector handle; summarization itself is stateless.
pub struct Summarizer {
    detector: Arc<dyn SentenceDetectorPort>,
}

impl Summarizer {
    pub fn new(detector: Arc<dyn SentenceDetectorPort>) -> Self {
        Self { detector }
    }

    /// First `min(lines, sentence_count)` sentences of `text`, joined by
    /// single spaces and trimmed. Empty input or `lines == 0` yields an
    /// empty string.
    pub fn summarize(&self, text: &str, lines: usize) -> String {
        if lines == 0 || text.trim().is_empty() {
            return String::new();
        }

        let sentences = self.detector.detect(text);
        let take = lines.min(sentences.len());
        sentences[..take].join(" ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::FakeSentenceDetector;

    fn summarizer() -> Summarizer {
        Summarizer::new(Arc::new(FakeSentenceDetector::default()))
    }

    #[test]
    fn test_takes_first_n_sentences() {
        let text = "Frase um.|Frase dois.|Frase três.";
        assert_eq!(summarizer().summarize(text, 2), "Frase um. Frase dois.");
    }

    #[test]
    fn test_lines_beyond_sentence_count_takes_all() {
        let text = "Frase um.|Frase dois.";
        assert_eq!(summarizer().summarize(text, 10), "Frase um. Frase dois.");
    }

    #[test]
    fn test_zero_lines_yields_empty() {
        assert_eq!(summarizer().summarize("Frase um.|Frase dois.", 0), "");
    }

    #[test]
    fn test_empty_text_yields_empty() {
        assert_eq!(summarizer().summarize("", 3), "");
        assert_eq!(summarizer().summarize("   ", 3), "");
    }

    #[test]
    fn test_no_leading_or_trailing_whitespace() {
        let text = "  Frase um.  |  Frase dois.  ";
        let summary = summarizer().summarize(text, 2);
        assert_eq!(summary, summary.trim());
        assert_eq!(summary, "Frase um. Frase dois.");
    }
}
