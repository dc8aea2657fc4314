//! Assessment repository port (write side).
//!
//! Defines the contract for persisting Assessment aggregates and mutating
//! their question lists.
//!
//! # Design
//!
//! - **Atomic list mutation**: adding and removing a question reference is a
//!   single conditional store command, so two concurrent callers cannot
//!   overwrite each other's list changes.
//! - **Scalar updates**: `update` writes title and timestamps only; it never
//!   rewrites the question list.

use crate::domain::assessment::{Assessment, QuestionRef};
use crate::domain::foundation::{AssessmentId, DomainError};
use async_trait::async_trait;

/// Outcome of a conditional question-list mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMutation {
    /// The list was changed.
    Applied,
    /// The condition did not hold: the reference was already present
    /// (append) or absent (remove). The list is unchanged.
    Unchanged,
    /// No assessment with this id exists.
    AssessmentMissing,
}

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Persist title and `updated_at` of an existing assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if assessment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Append `question` to the end of the list unless it is already present.
    async fn append_question(
        &self,
        id: &AssessmentId,
        question: &QuestionRef,
    ) -> Result<ListMutation, DomainError>;

    /// Remove `question` from the list if it is present.
    async fn remove_question(
        &self,
        id: &AssessmentId,
        question: &str,
    ) -> Result<ListMutation, DomainError>;

    /// Delete an assessment. Referenced questions are not touched.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if assessment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}
