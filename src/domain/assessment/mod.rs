//! Assessment domain module.
//!
//! Handles the assessment lifecycle (create, rename, delete) and the
//! relationship between an assessment and the questions it references.

mod aggregate;
mod errors;
mod question_ref;
mod view;

pub use aggregate::Assessment;
pub use errors::AssessmentError;
pub use question_ref::QuestionRef;
pub use view::AssessmentWithQuestions;
