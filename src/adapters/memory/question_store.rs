//! In-Memory Question Store
//!
//! Holds questions for tests and local runs. Inserting and removing
//! questions happens outside the ports, mirroring the external system that
//! owns them in production.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, QuestionId};
use crate::domain::question::Question;
use crate::ports::QuestionReader;

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuestionStore {
    questions: Arc<RwLock<HashMap<QuestionId, Question>>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a question, replacing any with the same id.
    pub async fn insert(&self, question: Question) {
        self.questions.write().await.insert(question.id, question);
    }

    /// Remove a question. References to it in assessments are left dangling.
    pub async fn remove(&self, id: &QuestionId) -> Option<Question> {
        self.questions.write().await.remove(id)
    }
}

#[async_trait]
impl QuestionReader for InMemoryQuestionStore {
    async fn find_by_id(&self, id: &QuestionId) -> Result<Option<Question>, DomainError> {
        Ok(self.questions.read().await.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[QuestionId]) -> Result<Vec<Question>, DomainError> {
        let questions = self.questions.read().await;
        Ok(ids.iter().filter_map(|id| questions.get(id).cloned()).collect())
    }
}
