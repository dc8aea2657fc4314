//! Question reference stored inside an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::QuestionId;

/// A reference to a question, kept exactly as the caller supplied it.
///
/// Membership checks compare the raw string, so two spellings of the same
/// UUID are distinct references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionRef(String);

impl QuestionRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the reference as a question identifier.
    ///
    /// Returns `None` for references that are not well-formed ids.
    pub fn question_id(&self) -> Option<QuestionId> {
        self.0.parse().ok()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for QuestionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<QuestionId> for QuestionRef {
    fn from(id: QuestionId) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for QuestionRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_reference() {
        let id = QuestionId::new();
        let reference = QuestionRef::from(id);
        assert_eq!(reference.question_id(), Some(id));
    }

    #[test]
    fn malformed_reference_has_no_question_id() {
        assert_eq!(QuestionRef::new("q1").question_id(), None);
    }

    #[test]
    fn comparison_is_exact() {
        let reference = QuestionRef::new("ABC");
        assert!(reference == *"ABC");
        assert!(reference != *"abc");
    }
}
