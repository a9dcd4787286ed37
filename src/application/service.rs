//! Text Service
//!
//! Orchestrates the summarizer and the text store: every save and update
//! derives the reduced text before persisting, so `text` and `text_reduced`
//! always change together.

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::TextRepositoryPort;
use crate::application::summarizer::Summarizer;
use crate::domain::TextRecord;

/// Text Service
pub struct TextService {
    repository: Arc<dyn TextRepositoryPort>,
    summarizer: Summarizer,
}

impl TextService {
    pub fn new(repository: Arc<dyn TextRepositoryPort>, summarizer: Summarizer) -> Self {
        Self {
            repository,
            summarizer,
        }
    }

    /// Summarize and persist a new text; returns the record with its
    /// assigned id.
    pub async fn save_text(
        &self,
        text: &str,
        lines: usize,
    ) -> Result<TextRecord, ApplicationError> {
        let reduced = self.summarizer.summarize(text, lines);
        let record = TextRecord::new(text, Some(reduced));
        Ok(self.repository.save(&record).await?)
    }

    /// Re-summarize and overwrite an existing record, keeping its id.
    pub async fn update_text(
        &self,
        id: i64,
        text: &str,
        lines: usize,
    ) -> Result<TextRecord, ApplicationError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ApplicationError::NotFound { id });
        }

        let record = TextRecord {
            id: Some(id),
            text: text.to_string(),
            text_reduced: Some(self.summarizer.summarize(text, lines)),
        };
        Ok(self.repository.save(&record).await?)
    }

    /// Remove a record by id.
    pub async fn delete_text(&self, id: i64) -> Result<(), ApplicationError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ApplicationError::NotFound { id });
        }
        Ok(self.repository.delete_by_id(id).await?)
    }

    /// Records whose text contains the fragment, case-insensitively.
    pub async fn find_by_content(
        &self,
        fragment: &str,
    ) -> Result<Vec<TextRecord>, ApplicationError> {
        Ok(self.repository.find_by_text_containing(fragment).await?)
    }

    /// All stored records.
    pub async fn find_all(&self) -> Result<Vec<TextRecord>, ApplicationError> {
        Ok(self.repository.find_all().await?)
    }

    /// Look up a record by id.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<TextRecord>, ApplicationError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Whether a record with exactly this text already exists,
    /// case-insensitively. Advisory only; there is no storage-level
    /// uniqueness constraint.
    pub async fn exists_by_text(&self, text: &str) -> Result<bool, ApplicationError> {
        Ok(self.repository.exists_by_text(text).await?)
    }
}
