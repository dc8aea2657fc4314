//! Read view of an assessment with its questions resolved.

use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::question::Question;

use super::Assessment;

/// Assessment whose question references have been replaced by the
/// questions they point to.
///
/// Only produced for responses; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentWithQuestions {
    pub id: AssessmentId,
    pub title: String,
    pub user_id: String,
    pub project_id: String,
    pub questions: Vec<Question>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl AssessmentWithQuestions {
    /// Builds the view from an assessment and the questions found for it.
    pub fn resolve(assessment: Assessment, questions: Vec<Question>) -> Self {
        Self {
            id: *assessment.id(),
            title: assessment.title().to_string(),
            user_id: assessment.user_id().to_string(),
            project_id: assessment.project_id().to_string(),
            questions,
            created_at: *assessment.created_at(),
            updated_at: *assessment.updated_at(),
        }
    }
}
