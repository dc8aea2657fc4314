//! ListAssessmentsHandler - Query handler for listing assessments.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::ports::{AssessmentFilter, AssessmentReader};

/// Query to list assessments, optionally filtered by user and project.
#[derive(Debug, Clone, Default)]
pub struct ListAssessmentsQuery {
    pub user_id: Option<String>,
    pub project_id: Option<String>,
}

impl ListAssessmentsQuery {
    /// Build the reader filter. Empty strings do not filter.
    fn to_filter(&self) -> AssessmentFilter {
        let mut filter = AssessmentFilter::default();

        if let Some(user_id) = self.user_id.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.with_user(user_id);
        }

        if let Some(project_id) = self.project_id.as_deref().filter(|s| !s.is_empty()) {
            filter = filter.with_project(project_id);
        }

        filter
    }
}

/// Handler for listing assessments.
pub struct ListAssessmentsHandler {
    reader: Arc<dyn AssessmentReader>,
}

impl ListAssessmentsHandler {
    pub fn new(reader: Arc<dyn AssessmentReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(
        &self,
        query: ListAssessmentsQuery,
    ) -> Result<Vec<Assessment>, AssessmentError> {
        let filter = query.to_filter();
        let assessments = self.reader.list(&filter).await?;
        tracing::debug!(count = assessments.len(), ?filter, "Listed assessments");
        Ok(assessments)
    }
}
