//! DeleteAssessmentHandler - Command handler for deleting assessments.

use std::sync::Arc;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Command to delete an assessment.
#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub assessment_id: AssessmentId,
}

/// Result of a successful deletion.
#[derive(Debug, Clone)]
pub struct DeleteAssessmentResult {
    pub assessment_id: AssessmentId,
}

impl DeleteAssessmentResult {
    pub fn message(&self) -> String {
        format!("Assessment {} deleted successfully", self.assessment_id)
    }
}

/// Handler for deleting assessments. Referenced questions are kept.
pub struct DeleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl DeleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteAssessmentCommand,
    ) -> Result<DeleteAssessmentResult, AssessmentError> {
        if self.repository.find_by_id(&cmd.assessment_id).await?.is_none() {
            return Err(AssessmentError::not_found(cmd.assessment_id));
        }

        self.repository.delete(&cmd.assessment_id).await?;

        tracing::info!(assessment_id = %cmd.assessment_id, "Assessment deleted");

        Ok(DeleteAssessmentResult {
            assessment_id: cmd.assessment_id,
        })
    }
}
