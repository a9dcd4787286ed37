//! Text entity and content rules

/// A stored text entry.
///
/// `id` is assigned by the store on first save and never changes afterwards.
/// `text_reduced` is always derived from `text` at the time of the last
/// save or update; it is never edited independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub id: Option<i64>,
    pub text: String,
    pub text_reduced: Option<String>,
}

impl TextRecord {
    /// A not-yet-persisted record
    pub fn new(text: impl Into<String>, text_reduced: Option<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            text_reduced,
        }
    }
}

/// A content rule violated by a submitted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentViolation {
    /// Empty or whitespace-only
    Blank,
    /// More characters than the configured limit
    TooLong { max: usize },
    /// Characters outside the accepted set
    InvalidChars,
}

/// Accepted characters: ASCII letters and digits, Latin-1 letters with
/// diacritics (U+00C0..U+00FF), whitespace, and the punctuation `. , ! ?`.
fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || c.is_whitespace()
        || matches!(c, '.' | ',' | '!' | '?')
        || ('\u{00C0}'..='\u{00FF}').contains(&c)
}

/// Check a submitted text against the content rules.
///
/// Returns every violated rule so callers can report per-field messages.
pub fn validate_content(text: &str, max_length: usize) -> Vec<ContentViolation> {
    let mut violations = Vec::new();

    if text.trim().is_empty() {
        violations.push(ContentViolation::Blank);
    }

    if text.chars().count() > max_length {
        violations.push(ContentViolation::TooLong { max: max_length });
    }

    if !text.chars().all(is_allowed_char) {
        violations.push(ContentViolation::InvalidChars);
    }

    violations
}
