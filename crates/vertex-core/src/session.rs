//! Assessment session
//!
//! The only mutable state in the engine: one answer store per respondent.
//! Every outbound call recomputes from the current answers; nothing derived
//! is cached.

use crate::error::{SessionError, SessionResult};
use crate::types::{Progress, SessionId};
use std::sync::Arc;
use vertex_catalog::{visible, Catalog, QuestionSet};
use vertex_model::{Answer, AnswerStore, CompanyProfile, Question, QuestionId, QuestionKind};
use vertex_scoring::ScoreSnapshot;
use vertex_synthesis::Report;

/// One respondent's pass through the questionnaire
///
/// Before [`finish`](Session::finish) the live visible set is scored; after
/// it, the question set captured at finish time is, so answers to questions
/// revealed later cannot alter a report already shown.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    catalog: Arc<Catalog>,
    answers: AnswerStore,
    profile: CompanyProfile,
    frozen: Option<QuestionSet>,
}

impl Session {
    /// Start a session over `catalog`
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let id = SessionId::new();
        tracing::info!(session = %id, questions = catalog.questions().len(), "Session started");
        Self {
            id,
            catalog,
            answers: AnswerStore::new(),
            profile: CompanyProfile::default(),
            frozen: None,
        }
    }

    /// Start a session over the built-in catalog
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }

    /// With company profile
    #[inline]
    #[must_use]
    pub fn with_profile(mut self, profile: CompanyProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Session ID
    #[inline]
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Catalog in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Recorded answers
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    /// Company profile
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &CompanyProfile {
        &self.profile
    }

    /// Replace the company profile
    pub fn set_profile(&mut self, profile: CompanyProfile) {
        self.profile = profile;
    }

    fn question(&self, id: &str) -> SessionResult<&Question> {
        self.catalog
            .question(id)
            .ok_or_else(|| SessionError::UnknownQuestion(QuestionId::from(id)))
    }

    /// Record the option labelled `label` for choice question `id`
    ///
    /// Re-answering overwrites the previous answer.
    ///
    /// # Errors
    /// Unknown question, text question, or unknown option label
    pub fn record_choice(&mut self, id: &str, label: &str) -> SessionResult<()> {
        let question = self.question(id)?;
        if question.kind != QuestionKind::ScoredChoice {
            return Err(SessionError::KindMismatch {
                question: question.id.clone(),
                expected: question.kind,
            });
        }
        let option = question
            .find_option(label)
            .ok_or_else(|| SessionError::UnknownOption {
                question: question.id.clone(),
                label: label.to_string(),
            })?;

        let answer = Answer::from_option(question, option);
        let qid = question.id.clone();
        tracing::info!(session = %self.id, question = %qid, score = option.score, "Recorded choice");
        self.answers.record(qid, answer);
        Ok(())
    }

    /// Record free text for question `id`
    ///
    /// # Errors
    /// Unknown question or choice question
    pub fn record_text(&mut self, id: &str, text: &str) -> SessionResult<()> {
        let question = self.question(id)?;
        if question.kind != QuestionKind::FreeText {
            return Err(SessionError::KindMismatch {
                question: question.id.clone(),
                expected: question.kind,
            });
        }

        let answer = Answer::text_answer(text, question.section);
        let qid = question.id.clone();
        tracing::info!(session = %self.id, question = %qid, chars = text.chars().count(), "Recorded text");
        self.answers.record(qid, answer);
        Ok(())
    }

    /// Discard every answer and the frozen set; the session gets a new id
    pub fn reset(&mut self) {
        let previous = self.id;
        self.id = SessionId::new();
        self.answers.clear();
        self.frozen = None;
        tracing::info!(session = %self.id, %previous, "Session reset");
    }

    /// Questions currently visible, in catalog order
    ///
    /// Empty when nothing applies; callers render a neutral state.
    #[must_use]
    pub fn visible_questions(&self) -> Vec<&Question> {
        visible(&self.catalog, &self.answers)
    }

    /// Prompt of question `id` resolved against the current answers
    #[must_use]
    pub fn render_prompt(&self, id: &str) -> Option<String> {
        self.catalog
            .question(id)
            .map(|q| q.render_prompt(&self.answers))
    }

    /// Question set scoring reads: frozen after finish, live before
    #[must_use]
    pub fn active_questions(&self) -> QuestionSet {
        match &self.frozen {
            Some(frozen) => frozen.clone(),
            None => QuestionSet::visible(&self.catalog, &self.answers),
        }
    }

    /// Score the answers to the active question set
    #[must_use]
    pub fn score_snapshot(&self) -> ScoreSnapshot {
        vertex_scoring::score(&self.catalog, &self.answers, &self.active_questions())
    }

    /// Visible required questions without an answer, in catalog order
    #[must_use]
    pub fn missing_required(&self) -> Vec<QuestionId> {
        self.visible_questions()
            .into_iter()
            .filter(|q| q.is_required() && !self.answers.is_answered(&q.id))
            .map(|q| q.id.clone())
            .collect()
    }

    /// Answered vs visible counts
    #[must_use]
    pub fn progress(&self) -> Progress {
        let shown = self.visible_questions();
        let answered = shown
            .iter()
            .filter(|q| self.answers.is_answered(&q.id))
            .count();
        Progress {
            answered,
            visible: shown.len(),
        }
    }

    /// Freeze the visible question set
    ///
    /// Finishing again re-captures the set from the current answers.
    ///
    /// # Errors
    /// Returns the visible required questions still unanswered
    pub fn finish(&mut self) -> SessionResult<&QuestionSet> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            tracing::warn!(session = %self.id, missing = missing.len(), "Finish refused");
            return Err(SessionError::RequiredUnanswered(missing));
        }

        let frozen = QuestionSet::visible(&self.catalog, &self.answers);
        tracing::info!(session = %self.id, questions = frozen.len(), "Session finished");
        Ok(self.frozen.insert(frozen))
    }

    /// Whether the question set is frozen
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.frozen.is_some()
    }

    /// Frozen question set, if finished
    #[inline]
    #[must_use]
    pub fn frozen_questions(&self) -> Option<&QuestionSet> {
        self.frozen.as_ref()
    }

    /// Report over the frozen question set, `None` before finishing
    #[must_use]
    pub fn report(&self) -> Option<Report> {
        let frozen = self.frozen.as_ref()?;
        tracing::debug!(session = %self.id, "Building report");
        Some(vertex_synthesis::synthesize(
            &self.catalog,
            &self.answers,
            frozen,
            &self.profile,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_errors() {
        let mut session = Session::builtin();
        assert_eq!(
            session.record_choice("ZZ", "x"),
            Err(SessionError::UnknownQuestion(QuestionId::from("ZZ")))
        );
        assert!(matches!(
            session.record_choice("E1", "Not an option"),
            Err(SessionError::UnknownOption { .. })
        ));
        assert!(matches!(
            session.record_text("E1", "free text"),
            Err(SessionError::KindMismatch { expected: QuestionKind::ScoredChoice, .. })
        ));
        assert!(matches!(
            session.record_choice("S1", "anything"),
            Err(SessionError::KindMismatch { expected: QuestionKind::FreeText, .. })
        ));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn report_absent_until_finished() {
        let session = Session::builtin();
        assert!(session.report().is_none());
        assert!(!session.is_finished());
    }

    #[test]
    fn reset_discards_everything() {
        let mut session = Session::builtin();
        let first = session.id();
        session.record_choice("E1", "React to whatever is urgent that day").unwrap();
        session.reset();

        assert!(session.answers().is_empty());
        assert!(session.frozen_questions().is_none());
        assert_ne!(session.id(), first);
    }
}
