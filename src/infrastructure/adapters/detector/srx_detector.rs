//! SRX Sentence Detector
//!
//! Loads an SRX 2.0 segmentation ruleset (the bundled language-specific
//! artifact) and splits texts with it. The compiled rules are immutable
//! after construction, so one instance is shared across requests.

use std::path::Path;
use std::str::FromStr;

use srx::SRX;
use thiserror::Error;

use crate::application::ports::SentenceDetectorPort;

/// Detector construction error
#[derive(Debug, Error)]
pub enum DetectorError {
    #[error("Failed to read segmentation rules from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse segmentation rules: {0}")]
    Parse(String),
}

/// SRX Sentence Detector
#[derive(Debug)]
pub struct SrxSentenceDetector {
    rules: srx::Rules,
}

impl SrxSentenceDetector {
    /// Load a ruleset file and compile the rules for `language`.
    ///
    /// Called once at startup; failure here is fatal to the service.
    pub fn from_file(path: impl AsRef<Path>, language: &str) -> Result<Self, DetectorError> {
        let path = path.as_ref();
        let xml = std::fs::read_to_string(path).map_err(|source| DetectorError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let detector = Self::from_xml(&xml, language)?;
        tracing::info!(
            path = %path.display(),
            language = language,
            "Segmentation ruleset loaded"
        );
        Ok(detector)
    }

    /// Compile rules for `language` from SRX document text.
    pub fn from_xml(xml: &str, language: &str) -> Result<Self, DetectorError> {
        let srx = SRX::from_str(xml).map_err(|e| DetectorError::Parse(e.to_string()))?;
        Ok(Self {
            rules: srx.language_rules(language),
        })
    }
}

impl SentenceDetectorPort for SrxSentenceDetector {
    fn detect(&self, text: &str) -> Vec<String> {
        self.rules
            .split(text)
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
