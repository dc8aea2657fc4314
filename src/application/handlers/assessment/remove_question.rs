//! RemoveQuestionHandler - Command handler unlinking a question from an
//! assessment.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, ListMutation};

/// Command to remove a question from an assessment.
#[derive(Debug, Clone)]
pub struct RemoveQuestionCommand {
    pub assessment_id: AssessmentId,
    pub question_id: String,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct RemoveQuestionResult {
    pub assessment_id: AssessmentId,
    pub question_id: String,
}

impl RemoveQuestionResult {
    /// Confirmation message returned to the caller.
    pub fn message(&self) -> String {
        format!(
            "Question {} removed from assessment {} successfully",
            self.question_id, self.assessment_id
        )
    }
}

/// Handler for removing questions from assessments.
pub struct RemoveQuestionHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl RemoveQuestionHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RemoveQuestionCommand,
    ) -> Result<RemoveQuestionResult, AssessmentError> {
        let assessment = self
            .repository
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_id))?;

        if !assessment.contains_question(&cmd.question_id) {
            return Err(AssessmentError::question_not_in_assessment(cmd.question_id));
        }

        match self
            .repository
            .remove_question(&cmd.assessment_id, &cmd.question_id)
            .await?
        {
            ListMutation::Applied => {
                tracing::info!(
                    assessment_id = %cmd.assessment_id,
                    question_id = %cmd.question_id,
                    "Question removed from assessment"
                );
                Ok(RemoveQuestionResult {
                    assessment_id: cmd.assessment_id,
                    question_id: cmd.question_id,
                })
            }
            ListMutation::Unchanged => Err(AssessmentError::question_not_in_assessment(
                cmd.question_id,
            )),
            ListMutation::AssessmentMissing => Err(AssessmentError::not_found(cmd.assessment_id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAssessmentStore;
    use crate::domain::assessment::{Assessment, QuestionRef};

    async fn seeded(refs: &[&str]) -> (Arc<InMemoryAssessmentStore>, AssessmentId) {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let mut assessment = Assessment::new(AssessmentId::new(), "Quiz1", "u1", "p1");
        for r in refs {
            assessment.add_question(QuestionRef::new(*r)).unwrap();
        }
        store.save(&assessment).await.unwrap();
        (store, *assessment.id())
    }

    fn cmd(assessment_id: AssessmentId, question_id: &str) -> RemoveQuestionCommand {
        RemoveQuestionCommand {
            assessment_id,
            question_id: question_id.to_string(),
        }
    }

    #[tokio::test]
    async fn removes_question_and_keeps_order_of_rest() {
        let (store, id) = seeded(&["a", "b", "c"]).await;
        let handler = RemoveQuestionHandler::new(store.clone());

        handler.handle(cmd(id, "b")).await.unwrap();

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        let refs: Vec<&str> = stored.questions().iter().map(|q| q.as_str()).collect();
        assert_eq!(refs, vec!["a", "c"]);
    }

    #[tokio::test]
    async fn returns_confirmation_message() {
        let (store, id) = seeded(&["q1"]).await;
        let handler = RemoveQuestionHandler::new(store);

        let result = handler.handle(cmd(id, "q1")).await.unwrap();
        assert_eq!(
            result.message(),
            format!("Question q1 removed from assessment {} successfully", id)
        );
    }

    #[tokio::test]
    async fn fails_when_question_not_in_list() {
        let (store, id) = seeded(&["q1"]).await;
        let handler = RemoveQuestionHandler::new(store.clone());

        let result = handler.handle(cmd(id, "q2")).await;
        assert!(matches!(
            result,
            Err(AssessmentError::QuestionNotInAssessment(_))
        ));

        let stored = store.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.questions().len(), 1);
    }

    #[tokio::test]
    async fn second_removal_fails() {
        let (store, id) = seeded(&["q1"]).await;
        let handler = RemoveQuestionHandler::new(store);

        handler.handle(cmd(id, "q1")).await.unwrap();
        let result = handler.handle(cmd(id, "q1")).await;
        assert!(matches!(
            result,
            Err(AssessmentError::QuestionNotInAssessment(_))
        ));
    }

    #[tokio::test]
    async fn fails_when_assessment_not_found() {
        let store = Arc::new(InMemoryAssessmentStore::new());
        let handler = RemoveQuestionHandler::new(store);

        let result = handler.handle(cmd(AssessmentId::new(), "q1")).await;
        assert!(matches!(result, Err(AssessmentError::NotFound(_))));
    }
}
