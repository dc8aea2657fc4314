//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Assessment persistence and list mutation
//! - `AssessmentReader` - Assessment lookups and filtered listing
//! - `QuestionReader` - Read-only access to questions

mod assessment_reader;
mod assessment_repository;
mod question_reader;

pub use assessment_reader::{AssessmentFilter, AssessmentReader};
pub use assessment_repository::{AssessmentRepository, ListMutation};
pub use question_reader::QuestionReader;
