//! Question reader port.
//!
//! Read-only access to questions owned by another part of the system.

use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::question::Question;
use async_trait::async_trait;

/// Reader port for question lookups.
#[async_trait]
pub trait QuestionReader: Send + Sync {
    /// Find a question by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError>;

    /// Fetch every question whose id is in `ids`.
    ///
    /// Ids without a matching question are skipped. Result order is
    /// store-native.
    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, DomainError>;
}
