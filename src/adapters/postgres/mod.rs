//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresAssessmentRepository` - Assessment writes and atomic list updates
//! - `PostgresAssessmentReader` - Assessment lookups and filtered listing
//! - `PostgresQuestionReader` - Read-only question lookups

mod assessment_reader;
mod assessment_repository;
mod question_reader;

pub use assessment_reader::PostgresAssessmentReader;
pub use assessment_repository::PostgresAssessmentRepository;
pub use question_reader::PostgresQuestionReader;
