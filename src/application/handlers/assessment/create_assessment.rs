//! CreateAssessmentHandler - Command handler for creating assessments.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Command to create a new assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub title: String,
    pub user_id: String,
    pub project_id: String,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl CreateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateAssessmentCommand) -> Result<Assessment, AssessmentError> {
        let assessment = Assessment::new(AssessmentId::new(), cmd.title, cmd.user_id, cmd.project_id);

        self.repository.save(&assessment).await?;

        tracing::info!(
            assessment_id = %assessment.id(),
            user_id = assessment.user_id(),
            project_id = assessment.project_id(),
            "Assessment created"
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentStore;
    use crate::domain::assessment::QuestionRef;
    use crate::domain::foundation::{DomainError, ErrorCode};
    use crate::ports::ListMutation;
    use async_trait::async_trait;

    struct FailingAssessmentRepository;

    #[async_trait]
    impl AssessmentRepository for FailingAssessmentRepository {
        async fn save(&self, _assessment: &Assessment) -> Result<(), DomainError> {
            Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated save failure",
            ))
        }

        async fn update(&self, _assessment: &Assessment) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
            Ok(None)
        }

        async fn append_question(
            &self,
            _id: &AssessmentId,
            _question: &QuestionRef,
        ) -> Result<ListMutation, DomainError> {
            Ok(ListMutation::AssessmentMissing)
        }

        async fn remove_question(
            &self,
            _id: &AssessmentId,
            _question: &str,
        ) -> Result<ListMutation, DomainError> {
            Ok(ListMutation::AssessmentMissing)
        }

        async fn delete(&self, _id: &AssessmentId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn quiz_command() -> CreateAssessmentCommand {
        CreateAssessmentCommand {
            title: "Quiz1".to_string(),
            user_id: "u1".to_string(),
            project_id: "p1".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_assessment_with_empty_question_list() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = CreateAssessmentHandler::new(store.clone());

        let assessment = handler.handle(quiz_command()).await.unwrap();

        assert_eq!(assessment.title(), "Quiz1");
        assert_eq!(assessment.user_id(), "u1");
        assert_eq!(assessment.project_id(), "p1");
        assert!(assessment.questions().is_empty());
    }

    #[tokio::test]
    async fn persists_created_assessment() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = CreateAssessmentHandler::new(store.clone());

        let assessment = handler.handle(quiz_command()).await.unwrap();

        let stored = store.find_by_id(assessment.id()).await.unwrap();
        assert_eq!(stored, Some(assessment));
    }

    #[tokio::test]
    async fn assigns_distinct_ids() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = CreateAssessmentHandler::new(store.clone());

        let first = handler.handle(quiz_command()).await.unwrap();
        let second = handler.handle(quiz_command()).await.unwrap();

        assert_ne!(first.id(), second.id());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn propagates_store_failure() {
        let handler = CreateAssessmentHandler::new(Arc::new(FailingAssessmentRepository));

        let result = handler.handle(quiz_command()).await;
        assert!(matches!(result, Err(AssessmentError::Infrastructure(_))));
    }
}
