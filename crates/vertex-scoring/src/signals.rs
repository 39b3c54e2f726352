//! Signal collection
//!
//! Signals are cross-cutting tags on answer options. Counting them across
//! every answer lets the synthesizer spot patterns no single score captures.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use vertex_model::AnswerStore;

/// Multiset of signal tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalCounts(BTreeMap<String, usize>);

impl SignalCounts {
    /// Create empty multiset
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `signal`
    pub fn add(&mut self, signal: impl Into<String>) {
        *self.0.entry(signal.into()).or_insert(0) += 1;
    }

    /// Occurrences of `signal`
    #[inline]
    #[must_use]
    pub fn count(&self, signal: &str) -> usize {
        self.0.get(signal).copied().unwrap_or(0)
    }

    /// Whether `signal` occurred at least once
    #[inline]
    #[must_use]
    pub fn contains(&self, signal: &str) -> bool {
        self.count(signal) > 0
    }

    /// Distinct signals
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no signal occurred
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total occurrences
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    /// Iterate in tag order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Count every signal of every answer
#[must_use]
pub fn collect_signals(answers: &AnswerStore) -> SignalCounts {
    let mut counts = SignalCounts::new();
    for (_, answer) in answers.iter() {
        for signal in answer.signals() {
            counts.add(signal.as_str());
        }
    }
    tracing::debug!(distinct = counts.len(), total = counts.total(), "Collected signals");
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use vertex_model::{Answer, DimensionKey, QuestionId, Section};

    fn answer(signals: &[&str]) -> Answer {
        Answer::choice(
            2,
            "x",
            Section::Dimension(DimensionKey::People),
            signals.iter().map(|s| (*s).to_string()).collect(),
        )
    }

    #[test]
    fn counts_across_answers() {
        let mut answers = AnswerStore::new();
        answers.record(QuestionId::from("R2"), answer(&["owner-dependency"]));
        answers.record(QuestionId::from("W0"), answer(&["weak-owner", "owner-dependency"]));
        answers.record(
            QuestionId::from("S1"),
            Answer::text_answer("We deliver fast", Section::Context),
        );

        let counts = collect_signals(&answers);
        assert_eq!(counts.count("owner-dependency"), 2);
        assert_eq!(counts.count("weak-owner"), 1);
        assert_eq!(counts.count("firefighting"), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn order_independent() {
        let mut a = AnswerStore::new();
        a.record(QuestionId::from("P1"), answer(&["key-person-risk"]));
        a.record(QuestionId::from("P3"), answer(&["firefighting"]));

        let mut b = AnswerStore::new();
        b.record(QuestionId::from("P3"), answer(&["firefighting"]));
        b.record(QuestionId::from("P1"), answer(&["key-person-risk"]));

        assert_eq!(collect_signals(&a), collect_signals(&b));
    }
}
