//! RenameAssessmentHandler - Command handler for renaming assessments.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Command to rename an assessment.
#[derive(Debug, Clone)]
pub struct RenameAssessmentCommand {
    pub assessment_id: AssessmentId,
    pub new_title: String,
}

/// Result of successful assessment rename.
#[derive(Debug, Clone)]
pub struct RenameAssessmentResult {
    pub assessment: Assessment,
    pub old_title: String,
}

/// Handler for renaming assessments.
pub struct RenameAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl RenameAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: RenameAssessmentCommand,
    ) -> Result<RenameAssessmentResult, AssessmentError> {
        // 1. Load assessment
        let mut assessment = self
            .repository
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_id))?;

        // 2. Apply rename
        let old_title = assessment.rename(cmd.new_title);

        // 3. Persist
        self.repository.update(&assessment).await?;

        tracing::info!(
            assessment_id = %cmd.assessment_id,
            old_title = %old_title,
            new_title = assessment.title(),
            "Assessment renamed"
        );

        Ok(RenameAssessmentResult {
            assessment,
            old_title,
        })
    }
}
