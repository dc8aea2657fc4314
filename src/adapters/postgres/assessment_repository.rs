//! PostgreSQL implementation of AssessmentRepository.
//!
//! Persists Assessment aggregates to the `assessments` table. The question
//! list lives in a `TEXT[]` column and is only ever changed by single
//! conditional `UPDATE` statements.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::assessment::{Assessment, QuestionRef};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp};
use crate::ports::{AssessmentRepository, ListMutation};

/// PostgreSQL implementation of AssessmentRepository.
#[derive(Clone)]
pub struct PostgresAssessmentRepository {
    pool: PgPool,
}

impl PostgresAssessmentRepository {
    /// Creates a new PostgresAssessmentRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: &AssessmentId) -> Result<bool, DomainError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM assessments WHERE id = $1)")
                .bind(id.as_uuid())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| DomainError::database("Failed to check assessment existence", e))?;

        Ok(result.0)
    }

    /// Maps a zero-row conditional update to the right outcome.
    async fn unchanged_or_missing(&self, id: &AssessmentId) -> Result<ListMutation, DomainError> {
        if self.exists(id).await? {
            Ok(ListMutation::Unchanged)
        } else {
            Ok(ListMutation::AssessmentMissing)
        }
    }
}

#[async_trait]
impl AssessmentRepository for PostgresAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let questions: Vec<&str> = assessment.questions().iter().map(|q| q.as_str()).collect();

        sqlx::query(
            r#"
            INSERT INTO assessments (
                id, title, user_id, project_id, question_ids, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(assessment.title())
        .bind(assessment.user_id())
        .bind(assessment.project_id())
        .bind(&questions)
        .bind(assessment.created_at().as_datetime())
        .bind(assessment.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert assessment", e))?;

        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE assessments SET
                title = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(assessment.id().as_uuid())
        .bind(assessment.title())
        .bind(assessment.updated_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to update assessment", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(assessment.id()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
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

    async fn append_question(
        &self,
        id: &AssessmentId,
        question: &QuestionRef,
    ) -> Result<ListMutation, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE assessments SET
                question_ids = array_append(question_ids, $2),
                updated_at = $3
            WHERE id = $1 AND NOT ($2 = ANY(question_ids))
            "#,
        )
        .bind(id.as_uuid())
        .bind(question.as_str())
        .bind(*Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to append question", e))?;

        if result.rows_affected() == 0 {
            return self.unchanged_or_missing(id).await;
        }

        Ok(ListMutation::Applied)
    }

    async fn remove_question(
        &self,
        id: &AssessmentId,
        question: &str,
    ) -> Result<ListMutation, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE assessments SET
                question_ids = array_remove(question_ids, $2),
                updated_at = $3
            WHERE id = $1 AND $2 = ANY(question_ids)
            "#,
        )
        .bind(id.as_uuid())
        .bind(question)
        .bind(*Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to remove question", e))?;

        if result.rows_affected() == 0 {
            return self.unchanged_or_missing(id).await;
        }

        Ok(ListMutation::Applied)
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM assessments WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to delete assessment", e))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn not_found(id: &AssessmentId) -> DomainError {
    DomainError::new(
        ErrorCode::AssessmentNotFound,
        format!("Assessment not found: {}", id),
    )
    .with_detail("assessment_id", id.to_string())
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}

pub(super) fn row_to_assessment(row: PgRow) -> Result<Assessment, DomainError> {
    let id: uuid::Uuid = column(&row, "id")?;
    let title: String = column(&row, "title")?;
    let user_id: String = column(&row, "user_id")?;
    let project_id: String = column(&row, "project_id")?;
    let question_ids: Vec<String> = column(&row, "question_ids")?;
    let created_at: chrono::DateTime<chrono::Utc> = column(&row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(&row, "updated_at")?;

    Ok(Assessment::reconstitute(
        AssessmentId::from_uuid(id),
        title,
        user_id,
        project_id,
        question_ids.into_iter().map(QuestionRef::new).collect(),
        Timestamp::from_datetime(created_at),
        Timestamp::from_datetime(updated_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_assessment_id_detail() {
        let id = AssessmentId::new();
        let err = not_found(&id);
        assert_eq!(err.code, ErrorCode::AssessmentNotFound);
        assert_eq!(err.details.get("assessment_id"), Some(&id.to_string()));
    }

    // The tests below need a PostgreSQL server at DATABASE_URL:
    // cargo test -- --ignored

    async fn seeded(pool: &PgPool) -> (PostgresAssessmentRepository, AssessmentId) {
        let repo = PostgresAssessmentRepository::new(pool.clone());
        let assessment = Assessment::new(AssessmentId::new(), "Quiz", "u1", "p1");
        repo.save(&assessment).await.unwrap();
        (repo, *assessment.id())
    }

    async fn stored_refs(repo: &PostgresAssessmentRepository, id: &AssessmentId) -> Vec<String> {
        repo.find_by_id(id)
            .await
            .unwrap()
            .unwrap()
            .questions()
            .iter()
            .map(|q| q.as_str().to_string())
            .collect()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn append_question_reports_each_outcome(pool: PgPool) {
        let (repo, id) = seeded(&pool).await;
        let q1 = QuestionRef::new("q1");

        assert_eq!(repo.append_question(&id, &q1).await.unwrap(), ListMutation::Applied);
        assert_eq!(repo.append_question(&id, &q1).await.unwrap(), ListMutation::Unchanged);
        assert_eq!(
            repo.append_question(&AssessmentId::new(), &q1).await.unwrap(),
            ListMutation::AssessmentMissing
        );
        assert_eq!(stored_refs(&repo, &id).await, vec!["q1"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn remove_question_reports_each_outcome(pool: PgPool) {
        let (repo, id) = seeded(&pool).await;
        for r in ["a", "b", "c"] {
            repo.append_question(&id, &QuestionRef::new(r)).await.unwrap();
        }

        assert_eq!(repo.remove_question(&id, "b").await.unwrap(), ListMutation::Applied);
        assert_eq!(repo.remove_question(&id, "b").await.unwrap(), ListMutation::Unchanged);
        assert_eq!(
            repo.remove_question(&AssessmentId::new(), "a").await.unwrap(),
            ListMutation::AssessmentMissing
        );
        assert_eq!(stored_refs(&repo, &id).await, vec!["a", "c"]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn concurrent_appends_keep_every_question(pool: PgPool) {
        let (repo, id) = seeded(&pool).await;

        let tasks: Vec<_> = (0..8)
            .map(|n| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.append_question(&id, &QuestionRef::new(format!("q{}", n)))
                        .await
                        .unwrap()
                })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), ListMutation::Applied);
        }

        let mut refs = stored_refs(&repo, &id).await;
        refs.sort();
        assert_eq!(refs, (0..8).map(|n| format!("q{}", n)).collect::<Vec<_>>());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore]
    async fn update_leaves_question_list_alone(pool: PgPool) {
        let (repo, id) = seeded(&pool).await;
        let mut stale = repo.find_by_id(&id).await.unwrap().unwrap();
        repo.append_question(&id, &QuestionRef::new("q1")).await.unwrap();

        stale.rename("Renamed");
        repo.update(&stale).await.unwrap();

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.title(), "Renamed");
        assert_eq!(stored_refs(&repo, &id).await, vec!["q1"]);
    }
}
