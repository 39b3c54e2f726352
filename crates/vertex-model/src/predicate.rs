//! Visibility predicates
//!
//! Predicates are data, not closures: each one names the questions it reads,
//! which lets the catalog validation pass check that every dependency is
//! declared strictly earlier than the question it gates.
//!
//! All reads go through the null-safe accessors of [`AnswerStore`], so an
//! unanswered prerequisite resolves to "not visible" instead of failing.

use crate::answer::AnswerStore;
use crate::question::QuestionId;
use serde::{Deserialize, Serialize};

/// Visibility predicate over the answers recorded so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    /// Score of `question` is at least `min` (missing answers score 0)
    ScoreAtLeast {
        /// Question read
        question: QuestionId,
        /// Inclusive lower bound
        min: u8,
    },
    /// `question` is answered with a score of at most `max`
    ScoreAtMost {
        /// Question read
        question: QuestionId,
        /// Inclusive upper bound
        max: u8,
    },
    /// `question` carries a non-blank answer
    Answered {
        /// Question read
        question: QuestionId,
    },
    /// The answer to `question` carries `signal`
    HasSignal {
        /// Question read
        question: QuestionId,
        /// Signal tag
        signal: String,
    },
    /// Every inner predicate holds
    All(Vec<Predicate>),
    /// At least one inner predicate holds
    Any(Vec<Predicate>),
    /// Inner predicate does not hold
    ///
    /// Note that negating a predicate over a missing answer yields `true`.
    Not(Box<Predicate>),
}

impl Predicate {
    /// `question` scored at least `min`
    #[inline]
    #[must_use]
    pub fn score_at_least(question: impl Into<QuestionId>, min: u8) -> Self {
        Predicate::ScoreAtLeast {
            question: question.into(),
            min,
        }
    }

    /// `question` answered with at most `max`
    #[inline]
    #[must_use]
    pub fn score_at_most(question: impl Into<QuestionId>, max: u8) -> Self {
        Predicate::ScoreAtMost {
            question: question.into(),
            max,
        }
    }

    /// `question` answered
    #[inline]
    #[must_use]
    pub fn answered(question: impl Into<QuestionId>) -> Self {
        Predicate::Answered {
            question: question.into(),
        }
    }

    /// `question` answer carries `signal`
    #[inline]
    #[must_use]
    pub fn has_signal(question: impl Into<QuestionId>, signal: impl Into<String>) -> Self {
        Predicate::HasSignal {
            question: question.into(),
            signal: signal.into(),
        }
    }

    /// Evaluate against the current answers
    #[must_use]
    pub fn evaluate(&self, answers: &AnswerStore) -> bool {
        match self {
            Predicate::ScoreAtLeast { question, min } => answers.score_or_zero(question) >= *min,
            Predicate::ScoreAtMost { question, max } => {
                answers.score(question).is_some_and(|s| s <= *max)
            }
            Predicate::Answered { question } => answers.is_answered(question),
            Predicate::HasSignal { question, signal } => answers
                .get(question)
                .is_some_and(|a| a.signals().iter().any(|s| s == signal)),
            Predicate::All(inner) => inner.iter().all(|p| p.evaluate(answers)),
            Predicate::Any(inner) => inner.iter().any(|p| p.evaluate(answers)),
            Predicate::Not(inner) => !inner.evaluate(answers),
        }
    }

    /// Questions read by this predicate, in declaration order of the tree
    #[must_use]
    pub fn dependencies(&self) -> Vec<&QuestionId> {
        let mut out = Vec::new();
        self.collect_dependencies(&mut out);
        out
    }

    fn collect_dependencies<'a>(&'a self, out: &mut Vec<&'a QuestionId>) {
        match self {
            Predicate::ScoreAtLeast { question, .. }
            | Predicate::ScoreAtMost { question, .. }
            | Predicate::Answered { question }
            | Predicate::HasSignal { question, .. } => out.push(question),
            Predicate::All(inner) | Predicate::Any(inner) => {
                for p in inner {
                    p.collect_dependencies(out);
                }
            }
            Predicate::Not(inner) => inner.collect_dependencies(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::dimension::DimensionKey;
    use crate::question::Section;

    fn with_score(id: &str, score: u8) -> AnswerStore {
        let mut answers = AnswerStore::new();
        answers.record(
            QuestionId::from(id),
            Answer::choice(
                score,
                format!("option {score}"),
                Section::Dimension(DimensionKey::Process),
                vec!["key-person-risk".to_string()],
            ),
        );
        answers
    }

    #[test]
    fn missing_answers_are_not_visible() {
        let empty = AnswerStore::new();
        assert!(!Predicate::score_at_least("P1", 3).evaluate(&empty));
        assert!(!Predicate::score_at_most("P1", 2).evaluate(&empty));
        assert!(!Predicate::answered("P1").evaluate(&empty));
        assert!(!Predicate::has_signal("P1", "key-person-risk").evaluate(&empty));
    }

    #[test]
    fn score_bounds_are_inclusive() {
        assert!(Predicate::score_at_least("P1", 3).evaluate(&with_score("P1", 3)));
        assert!(!Predicate::score_at_least("P1", 3).evaluate(&with_score("P1", 2)));
        assert!(Predicate::score_at_most("P1", 2).evaluate(&with_score("P1", 2)));
        assert!(!Predicate::score_at_most("P1", 2).evaluate(&with_score("P1", 3)));
    }

    #[test]
    fn combinators() {
        let answers = with_score("P1", 4);
        let both = Predicate::All(vec![
            Predicate::score_at_least("P1", 3),
            Predicate::has_signal("P1", "key-person-risk"),
        ]);
        assert!(both.evaluate(&answers));

        let either = Predicate::Any(vec![
            Predicate::answered("E1"),
            Predicate::score_at_most("P1", 1),
        ]);
        assert!(!either.evaluate(&answers));
        assert!(Predicate::Not(Box::new(either)).evaluate(&answers));
    }

    #[test]
    fn dependencies_walk_the_tree() {
        let p = Predicate::All(vec![
            Predicate::answered("S0"),
            Predicate::Not(Box::new(Predicate::score_at_most("E1", 2))),
        ]);
        let deps: Vec<&str> = p.dependencies().into_iter().map(QuestionId::as_str).collect();
        assert_eq!(deps, vec!["S0", "E1"]);
    }

    #[test]
    fn predicate_json_shape() {
        let p = Predicate::score_at_least("E1", 3);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json, serde_json::json!({"score_at_least": {"question": "E1", "min": 3}}));
    }

    proptest::proptest! {
        #[test]
        fn prop_score_at_least_matches_comparison(score in 1u8..=5, min in 0u8..=6) {
            let answers = with_score("P1", score);
            let holds = Predicate::score_at_least("P1", min).evaluate(&answers);
            proptest::prop_assert_eq!(holds, score >= min);
            proptest::prop_assert_eq!(
                Predicate::Not(Box::new(Predicate::score_at_least("P1", min))).evaluate(&answers),
                !holds
            );
        }
    }
}
