//! Application State

use crate::application::TextService;
use crate::config::TextConfig;

/// Shared state handed to every handler
pub struct AppState {
    /// Orchestration over summarizer and store
    pub service: TextService,
    /// Validation limits and lines defaults
    pub text_rules: TextConfig,
}

impl AppState {
    pub fn new(service: TextService, text_rules: TextConfig) -> Self {
        Self {
            service,
            text_rules,
        }
    }
}
