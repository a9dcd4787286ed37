//! Application layer errors

use thiserror::Error;

use crate::application::ports::RepositoryError;

/// Application layer error
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// No record at the requested id
    #[error("Text not found: {id}")]
    NotFound { id: i64 },

    /// Store failure surfaced from the repository
    #[error("Repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => Self::NotFound { id },
            RepositoryError::DatabaseError(msg) => Self::Repository(msg),
        }
    }
}
