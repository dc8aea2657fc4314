//! Assessment-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode};

/// Assessment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Assessment was not found (or the id could never name one).
    NotFound(String),
    /// Referenced question does not exist.
    QuestionNotFound(String),
    /// Question is not part of the assessment.
    QuestionNotInAssessment(String),
    /// Question is already part of the assessment.
    QuestionAlreadyAdded(String),
    /// Infrastructure error.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: impl ToString) -> Self {
        AssessmentError::NotFound(id.to_string())
    }
    pub fn question_not_found(question_id: impl Into<String>) -> Self {
        AssessmentError::QuestionNotFound(question_id.into())
    }
    pub fn question_not_in_assessment(question_id: impl Into<String>) -> Self {
        AssessmentError::QuestionNotInAssessment(question_id.into())
    }
    pub fn question_already_added(question_id: impl Into<String>) -> Self {
        AssessmentError::QuestionAlreadyAdded(question_id.into())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::QuestionNotFound(_) => ErrorCode::QuestionNotFound,
            AssessmentError::QuestionNotInAssessment(_) => ErrorCode::QuestionNotInAssessment,
            AssessmentError::QuestionAlreadyAdded(_) => ErrorCode::QuestionAlreadyAdded,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(_) => "Assessment not found".to_string(),
            AssessmentError::QuestionNotFound(_) => "Question not found".to_string(),
            AssessmentError::QuestionNotInAssessment(_) => {
                "Question not found in the assessment".to_string()
            }
            AssessmentError::QuestionAlreadyAdded(_) => {
                "Question already added to the assessment".to_string()
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        let detail = |key: &str| err.details.get(key).cloned().unwrap_or_default();
        match err.code {
            ErrorCode::AssessmentNotFound => AssessmentError::NotFound(detail("assessment_id")),
            ErrorCode::QuestionNotFound => AssessmentError::QuestionNotFound(detail("question_id")),
            ErrorCode::QuestionNotInAssessment => {
                AssessmentError::QuestionNotInAssessment(detail("question_id"))
            }
            ErrorCode::QuestionAlreadyAdded => {
                AssessmentError::QuestionAlreadyAdded(detail("question_id"))
            }
            ErrorCode::DatabaseError => {
                AssessmentError::Infrastructure(err.to_string())
            }
        }
    }
}
