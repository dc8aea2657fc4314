//! Assessment aggregate entity.
//!
//! An assessment is a titled, ordered list of question references scoped to
//! a user and a project.
//!
//! # Ownership
//!
//! Assessments reference questions by id but do NOT own them. Deleting an
//! assessment leaves its questions untouched, and deleting a question does
//! not remove references to it; readers skip references whose target is gone.

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, QuestionId, Timestamp};
use serde::{Deserialize, Serialize};

use super::QuestionRef;

/// Assessment aggregate.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `questions` contains no duplicate references (exact string match)
/// - `questions` keeps insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    title: String,
    user_id: String,
    project_id: String,
    questions: Vec<QuestionRef>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Assessment {
    /// Create a new assessment with an empty question list.
    pub fn new(
        id: AssessmentId,
        title: impl Into<String>,
        user_id: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            title: title.into(),
            user_id: user_id.into(),
            project_id: project_id.into(),
            questions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute an assessment from persistence (no validation).
    pub fn reconstitute(
        id: AssessmentId,
        title: String,
        user_id: String,
        project_id: String,
        questions: Vec<QuestionRef>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            user_id,
            project_id,
            questions,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Returns the question references in insertion order.
    pub fn questions(&self) -> &[QuestionRef] {
        &self.questions
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks whether the exact reference is already in the list.
    pub fn contains_question(&self, question: &str) -> bool {
        self.questions.iter().any(|q| q == question)
    }

    /// Ids of the references that are well-formed question identifiers.
    ///
    /// Malformed references are dropped silently.
    pub fn resolvable_question_ids(&self) -> Vec<QuestionId> {
        self.questions
            .iter()
            .filter_map(QuestionRef::question_id)
            .collect()
    }

    /// Checks whether the assessment matches the given equality filters.
    pub fn matches(&self, user_id: Option<&str>, project_id: Option<&str>) -> bool {
        user_id.map_or(true, |u| self.user_id == u)
            && project_id.map_or(true, |p| self.project_id == p)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the title, returning the previous one.
    pub fn rename(&mut self, new_title: impl Into<String>) -> String {
        let old_title = std::mem::replace(&mut self.title, new_title.into());
        self.updated_at = Timestamp::now();
        old_title
    }

    /// Append a question reference to the end of the list.
    ///
    /// # Errors
    ///
    /// - `QuestionAlreadyAdded` if the reference is already present
    pub fn add_question(&mut self, question: QuestionRef) -> Result<(), DomainError> {
        if self.contains_question(question.as_str()) {
            return Err(DomainError::new(
                ErrorCode::QuestionAlreadyAdded,
                "Question already added to the assessment",
            )
            .with_detail("question_id", question.into_inner()));
        }

        self.questions.push(question);
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Remove a question reference, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// - `QuestionNotInAssessment` if the reference is absent
    pub fn remove_question(&mut self, question: &str) -> Result<(), DomainError> {
        let Some(pos) = self.questions.iter().position(|q| q == question) else {
            return Err(DomainError::new(
                ErrorCode::QuestionNotInAssessment,
                "Question not found in the assessment",
            )
            .with_detail("question_id", question));
        };

        self.questions.remove(pos);
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_assessment() -> Assessment {
        Assessment::new(AssessmentId::new(), "Quiz1", "u1", "p1")
    }

    // Construction tests

    #[test]
    fn new_assessment_has_no_questions() {
        let assessment = test_assessment();
        assert!(assessment.questions().is_empty());
        assert_eq!(assessment.title(), "Quiz1");
        assert_eq!(assessment.user_id(), "u1");
        assert_eq!(assessment.project_id(), "p1");
    }

    #[test]
    fn new_assessment_accepts_empty_title() {
        let assessment = Assessment::new(AssessmentId::new(), "", "u1", "p1");
        assert_eq!(assessment.title(), "");
    }

    // Rename tests

    #[test]
    fn rename_returns_old_title() {
        let mut assessment = test_assessment();
        let old = assessment.rename("Final Exam");
        assert_eq!(old, "Quiz1");
        assert_eq!(assessment.title(), "Final Exam");
    }

    // Question list tests

    #[test]
    fn add_question_appends_at_end() {
        let mut assessment = test_assessment();
        assessment.add_question(QuestionRef::new("a")).unwrap();
        assessment.add_question(QuestionRef::new("b")).unwrap();

        let refs: Vec<&str> = assessment.questions().iter().map(|q| q.as_str()).collect();
        assert_eq!(refs, vec!["a", "b"]);
    }

    #[test]
    fn add_duplicate_question_fails() {
        let mut assessment = test_assessment();
        assessment.add_question(QuestionRef::new("q1")).unwrap();

        let err = assessment.add_question(QuestionRef::new("q1")).unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionAlreadyAdded);
        assert_eq!(assessment.questions().len(), 1);
    }

    #[test]
    fn duplicate_check_is_case_sensitive() {
        let mut assessment = test_assessment();
        assessment.add_question(QuestionRef::new("ABC")).unwrap();
        assert!(assessment.add_question(QuestionRef::new("abc")).is_ok());
        assert_eq!(assessment.questions().len(), 2);
    }

    #[test]
    fn remove_absent_question_fails_and_leaves_list_unchanged() {
        let mut assessment = test_assessment();
        assessment.add_question(QuestionRef::new("q1")).unwrap();

        let err = assessment.remove_question("q2").unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotInAssessment);
        assert_eq!(assessment.questions().len(), 1);
    }

    #[test]
    fn resolvable_question_ids_skips_malformed_refs() {
        let mut assessment = test_assessment();
        let valid = QuestionId::new();
        assessment.add_question(QuestionRef::new("not-an-id")).unwrap();
        assessment.add_question(QuestionRef::from(valid)).unwrap();

        assert_eq!(assessment.resolvable_question_ids(), vec![valid]);
    }

    #[test]
    fn matches_applies_both_filters() {
        let assessment = test_assessment();
        assert!(assessment.matches(None, None));
        assert!(assessment.matches(Some("u1"), None));
        assert!(assessment.matches(None, Some("p1")));
        assert!(assessment.matches(Some("u1"), Some("p1")));
        assert!(!assessment.matches(Some("u2"), Some("p1")));
        assert!(!assessment.matches(Some("u1"), Some("p2")));
    }

    proptest! {
        #[test]
        fn remove_keeps_relative_order(
            refs in proptest::collection::hash_set("[a-z]{1,6}", 1..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let refs: Vec<String> = refs.into_iter().collect();
            let mut assessment = test_assessment();
            for r in &refs {
                assessment.add_question(QuestionRef::new(r.clone())).unwrap();
            }

            let removed = pick.get(&refs).clone();
            assessment.remove_question(&removed).unwrap();

            let expected: Vec<&str> = refs
                .iter()
                .filter(|r| **r != removed)
                .map(String::as_str)
                .collect();
            let actual: Vec<&str> = assessment.questions().iter().map(|q| q.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn adding_twice_grows_list_by_one(r in "[a-z0-9-]{1,36}") {
            let mut assessment = test_assessment();
            let first = assessment.add_question(QuestionRef::new(r.clone()));
            let second = assessment.add_question(QuestionRef::new(r));
            prop_assert!(first.is_ok());
            prop_assert!(second.is_err());
            prop_assert_eq!(assessment.questions().len(), 1);
        }
    }
}
