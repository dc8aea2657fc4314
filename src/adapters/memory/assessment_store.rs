//! In-Memory Assessment Store
//!
//! Implements both the repository and reader ports over a single
//! insertion-ordered vector. Useful for testing and local development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{Assessment, QuestionRef};
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::{AssessmentFilter, AssessmentReader, AssessmentRepository, ListMutation};

/// In-memory storage for assessments.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentStore {
    assessments: Arc<RwLock<Vec<Assessment>>>,
}

impl InMemoryAssessmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored assessments
    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }
}

fn not_found(id: &AssessmentId) -> DomainError {
    DomainError::new(
        ErrorCode::AssessmentNotFound,
        format!("Assessment not found: {}", id),
    )
    .with_detail("assessment_id", id.to_string())
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentStore {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        self.assessments.write().await.push(assessment.clone());
        Ok(())
    }

    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        let stored = assessments
            .iter_mut()
            .find(|a| a.id() == assessment.id())
            .ok_or_else(|| not_found(assessment.id()))?;

        // Keep the stored question list; it only changes through the
        // conditional list operations.
        *stored = Assessment::reconstitute(
            *stored.id(),
            assessment.title().to_string(),
            stored.user_id().to_string(),
            stored.project_id().to_string(),
            stored.questions().to_vec(),
            *stored.created_at(),
            *assessment.updated_at(),
        );
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .iter()
            .find(|a| a.id() == id)
            .cloned())
    }

    async fn append_question(
        &self,
        id: &AssessmentId,
        question: &QuestionRef,
    ) -> Result<ListMutation, DomainError> {
        let mut assessments = self.assessments.write().await;
        let Some(assessment) = assessments.iter_mut().find(|a| a.id() == id) else {
            return Ok(ListMutation::AssessmentMissing);
        };

        match assessment.add_question(question.clone()) {
            Ok(()) => Ok(ListMutation::Applied),
            Err(e) if e.code == ErrorCode::QuestionAlreadyAdded => Ok(ListMutation::Unchanged),
            Err(e) => Err(e),
        }
    }

    async fn remove_question(
        &self,
        id: &AssessmentId,
        question: &str,
    ) -> Result<ListMutation, DomainError> {
        let mut assessments = self.assessments.write().await;
        let Some(assessment) = assessments.iter_mut().find(|a| a.id() == id) else {
            return Ok(ListMutation::AssessmentMissing);
        };

        match assessment.remove_question(question) {
            Ok(()) => Ok(ListMutation::Applied),
            Err(e) if e.code == ErrorCode::QuestionNotInAssessment => Ok(ListMutation::Unchanged),
            Err(e) => Err(e),
        }
    }

    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        let pos = assessments
            .iter()
            .position(|a| a.id() == id)
            .ok_or_else(|| not_found(id))?;
        assessments.remove(pos);
        Ok(())
    }
}

#[async_trait]
impl AssessmentReader for InMemoryAssessmentStore {
    async fn get_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        AssessmentRepository::find_by_id(self, id).await
    }

    async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError> {
        Ok(self
            .assessments
            .read()
            .await
            .iter()
            .filter(|a| filter.matches(a))
            .cloned()
            .collect())
    }
}
