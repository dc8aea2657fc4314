//! HTTP routes for assessment endpoints.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    add_question, create_assessment, delete_assessment, get_assessment, list_assessments,
    remove_question, rename_assessment, AssessmentHandlers,
};

/// Creates the assessment router with all endpoints.
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/", post(create_assessment).get(list_assessments))
        .route("/:id", get(get_assessment).delete(delete_assessment))
        .route("/:id/questions", post(add_question))
        .route("/:id/questions/:question_id", delete(remove_question))
        .route("/:id/title", put(rename_assessment))
        .with_state(handlers)
}

/// Collection endpoints at `/assessments/`, served alongside the nested
/// router which only matches the bare `/assessments`.
pub fn assessment_collection_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/assessments/", post(create_assessment).get(list_assessments))
        .with_state(handlers)
}
