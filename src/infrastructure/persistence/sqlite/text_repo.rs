//! SQLite Text Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, TextRepositoryPort};
use crate::domain::TextRecord;

/// SQLite Text Repository
pub struct SqliteTextRepository {
    pool: DbPool,
}

impl SqliteTextRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct TextRow {
    id: i64,
    text: String,
    text_reduced: Option<String>,
}

impl From<TextRow> for TextRecord {
    fn from(row: TextRow) -> Self {
        TextRecord {
            id: Some(row.id),
            text: row.text,
            text_reduced: row.text_reduced,
        }
    }
}

fn db_err(e: sqlx::Error) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TextRepositoryPort for SqliteTextRepository {
    async fn save(&self, record: &TextRecord) -> Result<TextRecord, RepositoryError> {
        match record.id {
            None => {
                let result = sqlx::query("INSERT INTO texts (text, text_reduced) VALUES (?, ?)")
                    .bind(&record.text)
                    .bind(&record.text_reduced)
                    .execute(&self.pool)
                    .await
                    .map_err(db_err)?;

                Ok(TextRecord {
                    id: Some(result.last_insert_rowid()),
                    text: record.text.clone(),
                    text_reduced: record.text_reduced.clone(),
                })
            }
            Some(id) => {
                let result =
                    sqlx::query("UPDATE texts SET text = ?, text_reduced = ? WHERE id = ?")
                        .bind(&record.text)
                        .bind(&record.text_reduced)
                        .bind(id)
                        .execute(&self.pool)
                        .await
                        .map_err(db_err)?;

                if result.rows_affected() == 0 {
                    return Err(RepositoryError::NotFound(id));
                }
                Ok(record.clone())
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TextRecord>, RepositoryError> {
        let row: Option<TextRow> =
            sqlx::query_as("SELECT id, text, text_reduced FROM texts WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(row.map(TextRecord::from))
    }

    async fn find_by_text_containing(
        &self,
        fragment: &str,
    ) -> Result<Vec<TextRecord>, RepositoryError> {
        let rows: Vec<TextRow> = sqlx::query_as(
            "SELECT id, text, text_reduced FROM texts \
             WHERE LOWER(text) LIKE '%' || LOWER(?) || '%' ORDER BY id",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(TextRecord::from).collect())
    }

    async fn find_all(&self) -> Result<Vec<TextRecord>, RepositoryError> {
        let rows: Vec<TextRow> =
            sqlx::query_as("SELECT id, text, text_reduced FROM texts ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(rows.into_iter().map(TextRecord::from).collect())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        let exists: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM texts WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(db_err)?;

        Ok(exists != 0)
    }

    async fn exists_by_text(&self, text: &str) -> Result<bool, RepositoryError> {
        let exists: i64 =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM texts WHERE LOWER(text) = LOWER(?))")
                .bind(text)
                .fetch_one(&self.pool)
                .await
                .map_err(db_err)?;

        Ok(exists != 0)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM texts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }
}
