//! HTTP DTOs for assessment endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Assessment, AssessmentWithQuestions};
use crate::domain::question::Question;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssessmentRequest {
    pub title: String,
    pub user_id: String,
    pub project_id: String,
}

/// Request to replace an assessment's title.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameAssessmentRequest {
    pub title: String,
}

/// Request to add a question reference to an assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct AddQuestionRequest {
    pub question_id: String,
}

/// Query parameters for listing assessments.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAssessmentsParams {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Stored assessment as returned by create, list and rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResponse {
    pub id: String,
    pub title: String,
    pub user_id: String,
    pub project_id: String,
    pub questions: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Assessment> for AssessmentResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            id: assessment.id().to_string(),
            title: assessment.title().to_string(),
            user_id: assessment.user_id().to_string(),
            project_id: assessment.project_id().to_string(),
            questions: assessment
                .questions()
                .iter()
                .map(|q| q.as_str().to_string())
                .collect(),
            created_at: assessment.created_at().to_rfc3339(),
            updated_at: assessment.updated_at().to_rfc3339(),
        }
    }
}

/// Question embedded in an assessment view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: String,
    pub content: serde_json::Value,
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id.to_string(),
            content: question.content,
            created_at: question.created_at.to_rfc3339(),
        }
    }
}

/// Assessment with its question references resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentWithQuestionsResponse {
    pub id: String,
    pub title: String,
    pub user_id: String,
    pub project_id: String,
    pub questions: Vec<QuestionResponse>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<AssessmentWithQuestions> for AssessmentWithQuestionsResponse {
    fn from(view: AssessmentWithQuestions) -> Self {
        Self {
            id: view.id.to_string(),
            title: view.title,
            user_id: view.user_id,
            project_id: view.project_id,
            questions: view.questions.into_iter().map(Into::into).collect(),
            created_at: view.created_at.to_rfc3339(),
            updated_at: view.updated_at.to_rfc3339(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            code: "CONFLICT".to_string(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}
