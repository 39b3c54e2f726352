//! Recorded answers

use crate::question::{ChoiceOption, Question, QuestionId, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Answer recorded for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Answer {
    /// Picked option of a scored-choice question
    Choice {
        /// Option score
        score: u8,
        /// Option label
        label: String,
        /// Section of the question
        section: Section,
        /// Option signals
        signals: Vec<String>,
    },
    /// Free-text response
    Text {
        /// Raw text
        text: String,
        /// Section of the question
        section: Section,
    },
}

impl Answer {
    /// Create choice answer
    #[must_use]
    pub fn choice(score: u8, label: impl Into<String>, section: Section, signals: Vec<String>) -> Self {
        Answer::Choice {
            score,
            label: label.into(),
            section,
            signals,
        }
    }

    /// Create text answer
    #[inline]
    #[must_use]
    pub fn text_answer(text: impl Into<String>, section: Section) -> Self {
        Answer::Text {
            text: text.into(),
            section,
        }
    }

    /// Answer for picking `option` on `question`
    #[must_use]
    pub fn from_option(question: &Question, option: &ChoiceOption) -> Self {
        Self::choice(
            option.score,
            option.label.clone(),
            question.section,
            option.signals.clone(),
        )
    }

    /// Score, if a choice
    #[inline]
    #[must_use]
    pub fn score(&self) -> Option<u8> {
        match self {
            Answer::Choice { score, .. } => Some(*score),
            Answer::Text { .. } => None,
        }
    }

    /// Label, if a choice
    #[inline]
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Answer::Choice { label, .. } => Some(label),
            Answer::Text { .. } => None,
        }
    }

    /// Text, if free text
    #[inline]
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Answer::Text { text, .. } => Some(text),
            Answer::Choice { .. } => None,
        }
    }

    /// Signals (empty for free text)
    #[inline]
    #[must_use]
    pub fn signals(&self) -> &[String] {
        match self {
            Answer::Choice { signals, .. } => signals,
            Answer::Text { .. } => &[],
        }
    }

    /// Section of the answered question
    #[inline]
    #[must_use]
    pub fn section(&self) -> Section {
        match self {
            Answer::Choice { section, .. } | Answer::Text { section, .. } => *section,
        }
    }

    /// Whether the answer carries content
    ///
    /// Choices always do; free text only when not blank.
    #[inline]
    #[must_use]
    pub fn is_filled(&self) -> bool {
        match self {
            Answer::Choice { .. } => true,
            Answer::Text { text, .. } => !text.trim().is_empty(),
        }
    }
}

/// Question id → answer mapping for one session
///
/// Exactly one answer per question; recording again overwrites in place and
/// keeps the original insertion position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: IndexMap<QuestionId, Answer>,
}

impl AnswerStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, returning the one it replaced
    pub fn record(&mut self, id: QuestionId, answer: Answer) -> Option<Answer> {
        self.answers.insert(id, answer)
    }

    /// Answer for `id`
    #[inline]
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Answer> {
        self.answers.get(id)
    }

    /// Score for `id`, if answered with a choice
    #[inline]
    #[must_use]
    pub fn score(&self, id: &str) -> Option<u8> {
        self.get(id).and_then(Answer::score)
    }

    /// Score for `id`, 0 when missing
    ///
    /// This is the accessor predicates use: an unanswered prerequisite never
    /// satisfies a minimum score.
    #[inline]
    #[must_use]
    pub fn score_or_zero(&self, id: &str) -> u8 {
        self.score(id).unwrap_or(0)
    }

    /// Choice label for `id`
    #[inline]
    #[must_use]
    pub fn label(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Answer::label)
    }

    /// Trimmed, non-blank text for `id`
    #[must_use]
    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id)
            .and_then(Answer::text)
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    /// Whether `id` carries a non-blank answer
    #[inline]
    #[must_use]
    pub fn is_answered(&self, id: &str) -> bool {
        self.get(id).is_some_and(Answer::is_filled)
    }

    /// Whether `id` has any answer at all, blank text included
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.answers.contains_key(id)
    }

    /// Iterate over answers in recording order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.answers.iter()
    }

    /// Number of answers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Whether the store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Discard every answer
    #[inline]
    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Copy keeping only the answers whose id passes `keep`
    #[must_use]
    pub fn filtered(&self, mut keep: impl FnMut(&QuestionId) -> bool) -> Self {
        let answers = self
            .answers
            .iter()
            .filter(|(id, _)| keep(id))
            .map(|(id, answer)| (id.clone(), answer.clone()))
            .collect();
        Self { answers }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::DimensionKey;

    const FINANCE: Section = Section::Dimension(DimensionKey::Finance);

    #[test]
    fn overwrite_keeps_single_entry() {
        let mut store = AnswerStore::new();
        assert!(store
            .record(QuestionId::from("F1"), Answer::choice(1, "Gut feeling", FINANCE, vec![]))
            .is_none());
        let previous = store.record(
            QuestionId::from("F1"),
            Answer::choice(4, "Margins", FINANCE, vec![]),
        );

        assert_eq!(previous.and_then(|a| a.score()), Some(1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.score("F1"), Some(4));
    }

    #[test]
    fn null_safe_accessors() {
        let store = AnswerStore::new();
        assert_eq!(store.score_or_zero("F1"), 0);
        assert_eq!(store.label("F1"), None);
        assert!(!store.is_answered("F1"));
    }

    #[test]
    fn blank_text_is_not_answered() {
        let mut store = AnswerStore::new();
        store.record(QuestionId::from("S1"), Answer::text_answer("   ", Section::Context));
        assert!(store.contains("S1"));
        assert!(!store.is_answered("S1"));
        assert_eq!(store.text("S1"), None);

        store.record(QuestionId::from("S1"), Answer::text_answer("  Loyal clients ", Section::Context));
        assert_eq!(store.text("S1"), Some("Loyal clients"));
    }

    #[test]
    fn filtered_keeps_order_and_subset() {
        let mut store = AnswerStore::new();
        for id in ["E1", "E2", "E3"] {
            store.record(QuestionId::from(id), Answer::choice(2, id, FINANCE, vec![]));
        }
        let kept = store.filtered(|id| id.as_str() != "E2");
        let ids: Vec<&str> = kept.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["E1", "E3"]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn text_answers_have_no_signals_or_score() {
        let a = Answer::text_answer("x", Section::Context);
        assert!(a.signals().is_empty());
        assert_eq!(a.score(), None);
    }
}
