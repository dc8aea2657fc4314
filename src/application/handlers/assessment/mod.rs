//! Assessment command and query handlers.

mod add_question;
mod create_assessment;
mod delete_assessment;
mod get_assessment;
mod list_assessments;
mod remove_question;
mod rename_assessment;

pub use add_question::{AddQuestionCommand, AddQuestionHandler};
pub use create_assessment::{CreateAssessmentCommand, CreateAssessmentHandler};
pub use delete_assessment::{
    DeleteAssessmentCommand, DeleteAssessmentHandler, DeleteAssessmentResult,
};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use list_assessments::{ListAssessmentsHandler, ListAssessmentsQuery};
pub use remove_question::{RemoveQuestionCommand, RemoveQuestionHandler, RemoveQuestionResult};
pub use rename_assessment::{
    RenameAssessmentCommand, RenameAssessmentHandler, RenameAssessmentResult,
};
