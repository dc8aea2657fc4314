//! PostgreSQL implementation of QuestionReader.
//!
//! Reads the `questions` table owned by the question service.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, QuestionId, Timestamp};
use crate::domain::question::Question;
use crate::ports::QuestionReader;

/// PostgreSQL implementation of QuestionReader.
#[derive(Clone)]
pub struct PostgresQuestionReader {
    pool: PgPool,
}

impl PostgresQuestionReader {
    /// Creates a new PostgresQuestionReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionReader for PostgresQuestionReader {
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        let row = sqlx::query("SELECT id, content, created_at FROM questions WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch question", e))?;

        row.map(row_to_question).transpose()
    }

    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, DomainError> {
        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();

        let rows =
            sqlx::query("SELECT id, content, created_at FROM questions WHERE id = ANY($1)")
                .bind(&uuids)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to fetch questions", e))?;

        rows.into_iter().map(row_to_question).collect()
    }
}

fn row_to_question(row: PgRow) -> Result<Question, DomainError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::database("Failed to get id", e))?;
    let content: serde_json::Value = row
        .try_get("content")
        .map_err(|e| DomainError::database("Failed to get content", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| DomainError::database("Failed to get created_at", e))?;

    Ok(Question {
        id: QuestionId::from_uuid(id),
        content,
        created_at: Timestamp::from_datetime(created_at),
    })
}
