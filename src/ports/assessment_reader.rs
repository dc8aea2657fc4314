//! Assessment reader port (read side / CQRS queries).
//!
//! Lookup by id and equality-filtered listing. Ordering of list results is
//! whatever the store returns natively.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use async_trait::async_trait;

/// Reader port for assessment queries.
#[async_trait]
pub trait AssessmentReader: Send + Sync {
    /// Get an assessment by ID.
    ///
    /// Returns `None` if not found.
    async fn get_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// List assessments matching every filter that is set.
    async fn list(&self, filter: &AssessmentFilter) -> Result<Vec<Assessment>, DomainError>;
}

/// Equality filters for listing assessments.
///
/// Unset fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentFilter {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

impl AssessmentFilter {
    /// Restrict to one user.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Restrict to one project.
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Checks an assessment against the filter.
    pub fn matches(&self, assessment: &Assessment) -> bool {
        assessment.matches(self.user_id.as_deref(), self.project_id.as_deref())
    }
}
