//! PostgreSQL implementation of AssessmentReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{AssessmentFilter, AssessmentReader};

use super::assessment_repository::row_to_assessment;

/// PostgreSQL implementation of AssessmentReader.
#[derive(Clone)]
pub struct PostgresAssessmentReader {
    pool: PgPool,
}

impl PostgresAssessmentReader {
    /// Creates a new PostgresAssessmentReader.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentReader for PostgresAssessmentReader {
    async fn get_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, user_id, project_id, question_ids, created_at, updated_at
            FROM assessments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch assessment", e))?;

        row.map(row_to_assessment).transpose()
    }

    async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, user_id, project_id, question_ids, created_at, updated_at
            FROM assessments
            WHERE ($1::TEXT IS NULL OR user_id = $1)
              AND ($2::TEXT IS NULL OR project_id = $2)
            ORDER BY created_at ASC
            "#,
        )
        .bind(filter.user_id.as_deref())
        .bind(filter.project_id.as_deref())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to list assessments", e))?;

        rows.into_iter().map(row_to_assessment).collect()
    }
}
