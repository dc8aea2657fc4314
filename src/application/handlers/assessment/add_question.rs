//! AddQuestionHandler - Command handler linking an existing question to an
//! assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentError, QuestionRef};
use crate::domain::foundation::{AssessmentId, QuestionId};
use crate::ports::{AssessmentRepository, ListMutation, QuestionReader};

/// Command to add a question to an assessment.
#[derive(Debug, Clone)]
pub struct AddQuestionCommand {
    pub assessment_id: AssessmentId,
    /// Question id exactly as supplied by the caller.
    pub question_id: String,
}

/// Handler for adding questions to assessments.
pub struct AddQuestionHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<dyn QuestionReader>,
}

impl AddQuestionHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        questions: Arc<dyn QuestionReader>,
    ) -> Self {
        Self {
            repository,
            questions,
        }
    }

    /// Returns the added question id, echoed back unchanged.
    pub async fn handle(&self, cmd: AddQuestionCommand) -> Result<String, AssessmentError> {
        // 1. Load assessment
        let assessment = self
            .repository
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_id))?;

        // 2. Question must exist; a malformed id can never name one
        let question_id: QuestionId = cmd
            .question_id
            .parse()
            .map_err(|_| AssessmentError::question_not_found(&cmd.question_id))?;

        if self.questions.find_by_id(&question_id).await?.is_none() {
            return Err(AssessmentError::question_not_found(cmd.question_id));
        }

        // 3. Reject duplicates
        if assessment.contains_question(&cmd.question_id) {
            return Err(AssessmentError::question_already_added(cmd.question_id));
        }

        // 4. Conditional append; a concurrent caller may have won the race
        let question = QuestionRef::new(cmd.question_id);
        match self
            .repository
            .append_question(&cmd.assessment_id, &question)
            .await?
        {
            ListMutation::Applied => {
                tracing::info!(
                    assessment_id = %cmd.assessment_id,
                    question_id = %question,
                    "Question added to assessment"
                );
                Ok(question.into_inner())
            }
            ListMutation::Unchanged => Err(AssessmentError::question_already_added(
                question.into_inner(),
            )),
            ListMutation::AssessmentMissing => Err(AssessmentError::not_found(cmd.assessment_id)),
        }
    }
}
