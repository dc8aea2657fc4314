//! GetAssessmentHandler - Query handler returning an assessment with its
//! questions resolved.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, AssessmentWithQuestions};
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentReader, QuestionReader};

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving an assessment together with its questions.
pub struct GetAssessmentHandler {
    reader: Arc<dyn AssessmentReader>,
    questions: Arc<dyn QuestionReader>,
}

impl GetAssessmentHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>, questions: Arc<dyn QuestionReader>) -> Self {
        Self { reader, questions }
    }

    pub async fn handle(
        &self,
        query: GetAssessmentQuery,
    ) -> Result<AssessmentWithQuestions, AssessmentError> {
        let assessment = self
            .reader
            .get_by_id(&query.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(query.assessment_id))?;

        // Malformed references are dropped here; references to deleted
        // questions are dropped by the batch lookup.
        let ids = assessment.resolvable_question_ids();
        let questions = if ids.is_empty() {
            Vec::new()
        } else {
            self.questions.find_by_ids(&ids).await?
        };

        if questions.len() != assessment.questions().len() {
            tracing::debug!(
                assessment_id = %query.assessment_id,
                referenced = assessment.questions().len(),
                resolved = questions.len(),
                "Skipped unresolvable question references"
            );
        }

        Ok(AssessmentWithQuestions::resolve(assessment, questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryAssessmentStore, InMemoryQuestionStore};
    use crate::domain::assessment::{Assessment, QuestionRef};
    use crate::domain::foundation::QuestionId;
    use crate::domain::question::Question;
    use crate::ports::AssessmentRepository;
    use serde_json::json;

    struct Fixture {
        assessments: Arc<InMemoryAssessmentStore>,
        questions: Arc<InMemoryQuestionStore>,
        handler: GetAssessmentHandler,
    }

    fn fixture() -> Fixture {
        let assessments = Arc::new(InMemoryAssessmentStore::new());
        let questions = Arc::new(InMemoryQuestionStore::new());
        let handler = GetAssessmentHandler::new(assessments.clone(), questions.clone());
        Fixture {
            assessments,
            questions,
            handler,
        }
    }

    #[tokio::test]
    async fn returns_not_found_when_assessment_does_not_exist() {
        let f = fixture();
        let query = GetAssessmentQuery {
            assessment_id: AssessmentId::new(),
        };

        let result = f.handler.handle(query).await;
        assert!(matches!(result, Err(AssessmentError::NotFound(_))));
    }

    #[tokio::test]
    async fn returns_assessment_without_questions() {
        let f = fixture();
        let assessment = Assessment::new(AssessmentId::new(), "Quiz1", "u1", "p1");
        f.assessments.save(&assessment).await.unwrap();

        let view = f
            .handler
            .handle(GetAssessmentQuery {
                assessment_id: *assessment.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.title, "Quiz1");
        assert!(view.questions.is_empty());
    }

    #[tokio::test]
    async fn resolves_valid_reference_and_skips_malformed_one() {
        let f = fixture();
        let question = Question::new(QuestionId::new(), json!({"text": "Capital of France?"}));
        f.questions.insert(question.clone()).await;

        let mut assessment = Assessment::new(AssessmentId::new(), "Quiz1", "u1", "p1");
        assessment.add_question(QuestionRef::new("not-an-id")).unwrap();
        assessment.add_question(QuestionRef::from(question.id)).unwrap();
        f.assessments.save(&assessment).await.unwrap();

        let view = f
            .handler
            .handle(GetAssessmentQuery {
                assessment_id: *assessment.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.questions, vec![question]);
    }

    #[tokio::test]
    async fn skips_references_to_deleted_questions() {
        let f = fixture();
        let kept = Question::new(QuestionId::new(), json!({"text": "kept"}));
        let deleted = Question::new(QuestionId::new(), json!({"text": "deleted"}));
        f.questions.insert(kept.clone()).await;
        f.questions.insert(deleted.clone()).await;

        let mut assessment = Assessment::new(AssessmentId::new(), "Quiz1", "u1", "p1");
        assessment.add_question(QuestionRef::from(kept.id)).unwrap();
        assessment.add_question(QuestionRef::from(deleted.id)).unwrap();
        f.assessments.save(&assessment).await.unwrap();

        f.questions.remove(&deleted.id).await;

        let view = f
            .handler
            .handle(GetAssessmentQuery {
                assessment_id: *assessment.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.questions, vec![kept]);
    }
}
