//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddQuestionRequest, AssessmentResponse, AssessmentWithQuestionsResponse,
    CreateAssessmentRequest, ErrorResponse, ListAssessmentsParams, QuestionResponse,
    RenameAssessmentRequest,
};
pub use handlers::AssessmentHandlers;
pub use routes::{assessment_collection_routes, assessment_routes};
