//! Questions, options and prompts

use crate::answer::AnswerStore;
use crate::dimension::DimensionKey;
use crate::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

/// Unique question identifier (e.g. `E1`, `P2`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create new identifier
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as str
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Deref for QuestionId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for QuestionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a question's answer is accounted
///
/// Context questions capture qualitative input (picked strength, weakness,
/// free-text reasons). Their options carry scores but never feed a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Scored within a dimension
    Dimension(DimensionKey),
    /// Cross-cutting qualitative capture
    Context,
}

impl Section {
    /// Dimension, if scored
    #[inline]
    #[must_use]
    pub fn dimension(&self) -> Option<DimensionKey> {
        match self {
            Section::Dimension(key) => Some(*key),
            Section::Context => None,
        }
    }
}

/// Question kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    /// Pick one option, each worth 1..=5
    ScoredChoice,
    /// Free text, never scored
    FreeText,
}

/// Answer option of a scored-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Label, unique within its question
    pub label: String,
    /// Score in 1..=5
    pub score: u8,
    /// Qualitative tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signals: Vec<String>,
}

impl ChoiceOption {
    /// Create new option
    #[must_use]
    pub fn new(label: impl Into<String>, score: u8, signals: &[&str]) -> Self {
        Self {
            label: label.into(),
            score,
            signals: signals.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Question prompt
///
/// Derived prompts are resolved at render time against the current answers;
/// the resolved text is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Prompt {
    /// Fixed text
    Static(String),
    /// Template echoing another question's answer in place of `{answer}`
    Echo {
        /// Template text containing `{answer}`
        template: String,
        /// Question whose answer is echoed
        source: QuestionId,
        /// Text used while the source is unanswered
        fallback: String,
    },
}

impl Prompt {
    /// Placeholder replaced by the echoed answer
    pub const PLACEHOLDER: &'static str = "{answer}";

    /// Resolve prompt text against the current answers
    #[must_use]
    pub fn render(&self, answers: &AnswerStore) -> String {
        match self {
            Prompt::Static(text) => text.clone(),
            Prompt::Echo {
                template,
                source,
                fallback,
            } => {
                let echoed = answers
                    .get(source)
                    .and_then(|a| a.label().or_else(|| a.text().filter(|t| !t.trim().is_empty())))
                    .unwrap_or(fallback.as_str());
                template.replace(Self::PLACEHOLDER, echoed)
            }
        }
    }

    /// Question read by this prompt, if derived
    #[inline]
    #[must_use]
    pub fn dependency(&self) -> Option<&QuestionId> {
        match self {
            Prompt::Static(_) => None,
            Prompt::Echo { source, .. } => Some(source),
        }
    }
}

impl From<&str> for Prompt {
    fn from(s: &str) -> Self {
        Prompt::Static(s.to_string())
    }
}

/// Catalog question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier
    pub id: QuestionId,
    /// Kind
    pub kind: QuestionKind,
    /// Accounting section
    pub section: Section,
    /// Section title shown above the prompt
    pub title: String,
    /// Prompt
    pub prompt: Prompt,
    /// Options (scored-choice only), in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Visibility predicate; always visible when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_if: Option<Predicate>,
    /// Explicit required flag; defaults by kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Question {
    /// Create scored-choice question
    #[must_use]
    pub fn choice(
        id: impl Into<QuestionId>,
        section: Section,
        title: impl Into<String>,
        prompt: impl Into<Prompt>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::ScoredChoice,
            section,
            title: title.into(),
            prompt: prompt.into(),
            options: Vec::new(),
            visible_if: None,
            required: None,
        }
    }

    /// Create free-text question
    #[must_use]
    pub fn text(
        id: impl Into<QuestionId>,
        section: Section,
        title: impl Into<String>,
        prompt: impl Into<Prompt>,
    ) -> Self {
        Self {
            kind: QuestionKind::FreeText,
            ..Self::choice(id, section, title, prompt)
        }
    }

    /// Append an option
    #[must_use]
    pub fn option(mut self, label: impl Into<String>, score: u8, signals: &[&str]) -> Self {
        self.options.push(ChoiceOption::new(label, score, signals));
        self
    }

    /// Set visibility predicate
    #[inline]
    #[must_use]
    pub fn visible_if(mut self, predicate: Predicate) -> Self {
        self.visible_if = Some(predicate);
        self
    }

    /// Override required flag
    #[inline]
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Whether the question must be answered before finishing
    ///
    /// Scored-choice questions are required and free-text questions optional
    /// unless overridden.
    #[inline]
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
            .unwrap_or(self.kind == QuestionKind::ScoredChoice)
    }

    /// Whether the question is scored and belongs to a dimension
    #[inline]
    #[must_use]
    pub fn scored_dimension(&self) -> Option<DimensionKey> {
        match self.kind {
            QuestionKind::ScoredChoice => self.section.dimension(),
            QuestionKind::FreeText => None,
        }
    }

    /// Whether the question is currently visible
    #[inline]
    #[must_use]
    pub fn is_visible(&self, answers: &AnswerStore) -> bool {
        self.visible_if
            .as_ref()
            .map_or(true, |p| p.evaluate(answers))
    }

    /// Find option by label
    #[must_use]
    pub fn find_option(&self, label: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.label == label)
    }

    /// Resolve prompt text
    #[inline]
    #[must_use]
    pub fn render_prompt(&self, answers: &AnswerStore) -> String {
        self.prompt.render(answers)
    }

    /// Questions read by the predicate and prompt
    #[must_use]
    pub fn dependencies(&self) -> Vec<&QuestionId> {
        let mut deps: Vec<&QuestionId> = self
            .visible_if
            .as_ref()
            .map(Predicate::dependencies)
            .unwrap_or_default();
        deps.extend(self.prompt.dependency());
        deps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;

    fn strength_pick() -> Question {
        Question::choice("S0", Section::Context, "Context", "Pick a strength")
            .option("Loyal customers", 3, &["strength-value"])
            .option("Fast execution", 3, &["strength-speed"])
    }

    #[test]
    fn required_defaults_by_kind() {
        let choice = strength_pick();
        let text = Question::text("S1", Section::Context, "Context", "Why?");
        assert!(choice.is_required());
        assert!(!text.is_required());
        assert!(text.required(true).is_required());
    }

    #[test]
    fn context_choice_is_not_scored() {
        assert_eq!(strength_pick().scored_dimension(), None);

        let scored = Question::choice("F1", Section::Dimension(DimensionKey::Finance), "Finance", "?");
        assert_eq!(scored.scored_dimension(), Some(DimensionKey::Finance));
    }

    #[test]
    fn echo_prompt_uses_fallback_then_label() {
        let prompt = Prompt::Echo {
            template: "Why is \"{answer}\" a strength?".to_string(),
            source: QuestionId::from("S0"),
            fallback: "the selected option".to_string(),
        };
        let mut answers = AnswerStore::new();
        assert_eq!(prompt.render(&answers), "Why is \"the selected option\" a strength?");

        answers.record(
            QuestionId::from("S0"),
            Answer::choice(3, "Fast execution", Section::Context, vec![]),
        );
        assert_eq!(prompt.render(&answers), "Why is \"Fast execution\" a strength?");
    }

    #[test]
    fn dependencies_include_prompt_source() {
        let q = Question::text(
            "S1",
            Section::Context,
            "Context",
            Prompt::Echo {
                template: "{answer}".to_string(),
                source: QuestionId::from("S0"),
                fallback: String::new(),
            },
        )
        .visible_if(Predicate::answered("S0"));

        let deps: Vec<&str> = q.dependencies().into_iter().map(QuestionId::as_str).collect();
        assert_eq!(deps, vec!["S0", "S0"]);
    }

    #[test]
    fn question_deserializes_from_yaml() {
        let yaml = r#"
id: F2
kind: scored-choice
section:
  dimension: finance
title: Finance
prompt: How often do you review financials?
options:
  - { label: Almost never, score: 1 }
  - { label: Monthly, score: 3, signals: [basic-control] }
visible_if:
  score_at_least: { question: F1, min: 3 }
"#;
        let q: Question = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(q.kind, QuestionKind::ScoredChoice);
        assert_eq!(q.section, Section::Dimension(DimensionKey::Finance));
        assert_eq!(q.options[1].signals, vec!["basic-control".to_string()]);
        assert_eq!(q.visible_if, Some(Predicate::score_at_least("F1", 3)));
    }
}
