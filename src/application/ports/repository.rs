//! Text Repository Port
//!
//! Persistence abstraction for text records; implemented by the SQLite
//! adapter in the infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::TextRecord;

/// Repository error
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Text not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Text Repository Port
///
/// No cross-record transactions and no pagination; uniqueness of `text` is
/// not enforced at this level.
#[async_trait]
pub trait TextRepositoryPort: Send + Sync {
    /// Persist a record. A record without an id is inserted and returned with
    /// its assigned id; a record with an id overwrites the existing row and
    /// fails with `NotFound` when that row does not exist.
    async fn save(&self, record: &TextRecord) -> Result<TextRecord, RepositoryError>;

    /// Look up a record by id
    async fn find_by_id(&self, id: i64) -> Result<Option<TextRecord>, RepositoryError>;

    /// Records whose text contains the fragment, case-insensitively
    async fn find_by_text_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<TextRecord>, RepositoryError>;

    /// All records, ordered by id
    async fn find_all(&self) -> Result<Vec<TextRecord>, RepositoryError>;

    /// Whether a record exists at the id
    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError>;

    /// Whether a record with exactly this text exists, case-insensitively.
    ///
    /// Exact match, not containment; used as an advisory duplicate check
    /// before saving (racy by nature, there is no storage-level constraint).
    async fn exists_by_text(&self, text: &str) -> Result<bool, RepositoryError>;

    /// Delete the record at the id; `NotFound` when no row was removed
    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
}
