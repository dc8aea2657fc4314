//! Question domain module.
//!
//! Questions are authored and stored by another part of the system. This
//! service reads them to validate references and to embed them in
//! assessment views; it never creates, edits or deletes them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuestionId, Timestamp};

/// A question as read from the store.
///
/// `content` carries the question document untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub content: serde_json::Value,
    pub created_at: Timestamp,
}

impl Question {
    pub fn new(id: QuestionId, content: serde_json::Value) -> Self {
        Self {
            id,
            content,
            created_at: Timestamp::now(),
        }
    }
}
