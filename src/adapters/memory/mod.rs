//! In-memory adapters - Process-local implementations of the ports.
//!
//! Used by tests and for running the service without a database.

mod assessment_store;
mod question_store;

pub use assessment_store::InMemoryAssessmentStore;
pub use question_store::InMemoryQuestionStore;
