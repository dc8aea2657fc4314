//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    AddQuestionCommand, AddQuestionHandler, CreateAssessmentCommand, CreateAssessmentHandler,
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    ListAssessmentsHandler, ListAssessmentsQuery, RemoveQuestionCommand, RemoveQuestionHandler,
    RenameAssessmentCommand, RenameAssessmentHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentReader, AssessmentRepository, QuestionReader};

use super::dto::{
    AddQuestionRequest, AssessmentResponse, AssessmentWithQuestionsResponse,
    CreateAssessmentRequest, ErrorResponse, ListAssessmentsParams, RenameAssessmentRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    create_handler: Arc<CreateAssessmentHandler>,
    list_handler: Arc<ListAssessmentsHandler>,
    get_handler: Arc<GetAssessmentHandler>,
    add_question_handler: Arc<AddQuestionHandler>,
    remove_question_handler: Arc<RemoveQuestionHandler>,
    delete_handler: Arc<DeleteAssessmentHandler>,
    rename_handler: Arc<RenameAssessmentHandler>,
}

impl AssessmentHandlers {
    /// Wires every application handler against the given ports.
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        reader: Arc<dyn AssessmentReader>,
        questions: Arc<dyn QuestionReader>,
    ) -> Self {
        Self {
            create_handler: Arc::new(CreateAssessmentHandler::new(repository.clone())),
            list_handler: Arc::new(ListAssessmentsHandler::new(reader.clone())),
            get_handler: Arc::new(GetAssessmentHandler::new(reader, questions.clone())),
            add_question_handler: Arc::new(AddQuestionHandler::new(repository.clone(), questions)),
            remove_question_handler: Arc::new(RemoveQuestionHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteAssessmentHandler::new(repository.clone())),
            rename_handler: Arc::new(RenameAssessmentHandler::new(repository)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /assessments - Create a new assessment
pub async fn create_assessment(
    State(handlers): State<AssessmentHandlers>,
    Json(req): Json<CreateAssessmentRequest>,
) -> Response {
    let cmd = CreateAssessmentCommand {
        title: req.title,
        user_id: req.user_id,
        project_id: req.project_id,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(assessment) => {
            let response: AssessmentResponse = assessment.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /assessments - List assessments, optionally by user and project
pub async fn list_assessments(
    State(handlers): State<AssessmentHandlers>,
    Query(params): Query<ListAssessmentsParams>,
) -> Response {
    let query = ListAssessmentsQuery {
        user_id: params.user_id,
        project_id: params.project_id,
    };

    match handlers.list_handler.handle(query).await {
        Ok(assessments) => {
            let response: Vec<AssessmentResponse> =
                assessments.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /assessments/:id - Get an assessment with its questions
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .get_handler
        .handle(GetAssessmentQuery { assessment_id })
        .await
    {
        Ok(view) => {
            let response: AssessmentWithQuestionsResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// POST /assessments/:id/questions - Add a question reference
pub async fn add_question(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<AddQuestionRequest>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddQuestionCommand {
        assessment_id,
        question_id: req.question_id,
    };

    match handlers.add_question_handler.handle(cmd).await {
        Ok(question_id) => (StatusCode::OK, Json(question_id)).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// DELETE /assessments/:id/questions/:question_id - Remove a question reference
pub async fn remove_question(
    State(handlers): State<AssessmentHandlers>,
    Path((assessment_id, question_id)): Path<(String, String)>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RemoveQuestionCommand {
        assessment_id,
        question_id,
    };

    match handlers.remove_question_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(result.message())).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// DELETE /assessments/:id - Delete an assessment
pub async fn delete_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers
        .delete_handler
        .handle(DeleteAssessmentCommand { assessment_id })
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result.message())).into_response(),
        Err(e) => handle_assessment_error(e),
    }
}

/// PUT /assessments/:id/title - Replace the title
pub async fn rename_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
    Json(req): Json<RenameAssessmentRequest>,
) -> Response {
    let assessment_id = match parse_assessment_id(&assessment_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = RenameAssessmentCommand {
        assessment_id,
        new_title: req.title,
    };

    match handlers.rename_handler.handle(cmd).await {
        Ok(result) => {
            let response: AssessmentResponse = result.assessment.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// A path id that is not a UUID cannot name a stored assessment.
fn parse_assessment_id(raw: &str) -> Result<AssessmentId, Response> {
    raw.parse::<AssessmentId>()
        .map_err(|_| handle_assessment_error(AssessmentError::not_found(raw)))
}

fn handle_assessment_error(error: AssessmentError) -> Response {
    match error {
        AssessmentError::NotFound(_)
        | AssessmentError::QuestionNotFound(_)
        | AssessmentError::QuestionNotInAssessment(_) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(error.message())),
        )
            .into_response(),
        AssessmentError::QuestionAlreadyAdded(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::conflict(error.message())),
        )
            .into_response(),
        AssessmentError::Infrastructure(ref msg) => {
            tracing::error!(error = %msg, "Assessment request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(error.message())),
            )
                .into_response()
        }
    }
}
