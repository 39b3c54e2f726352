//! Answers document
//!
//! ```toml
//! [profile]
//! company_name = "Acme"
//! employees = 12
//!
//! [answers]
//! E1 = { choice = "Use clear objectives as a reference" }
//! E3 = { score = 4 }
//! S1 = { text = "Long-standing customers" }
//! ```

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use vertex_catalog::{read_document, DocumentFormat};
use vertex_core::Session;
use vertex_model::CompanyProfile;

/// One answer: exactly one of the fields is set
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AnswerInput {
    /// Option label of a choice question
    pub(crate) choice: Option<String>,
    /// Option score of a choice question; the first option with it is picked
    pub(crate) score: Option<u8>,
    /// Free text
    pub(crate) text: Option<String>,
}

/// Profile and answers read from disk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct AnswersDocument {
    pub(crate) profile: CompanyProfile,
    pub(crate) answers: IndexMap<String, AnswerInput>,
}

impl AnswersDocument {
    /// Load, format chosen by extension
    pub(crate) fn from_path(path: &Path) -> Result<Self> {
        let (text, format) = read_document(path)?;
        let doc = match format {
            DocumentFormat::Toml => toml::from_str(&text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(&text)?,
            DocumentFormat::Json => serde_json::from_str(&text)?,
        };
        Ok(doc)
    }

    /// Record every answer into `session`, in document order
    pub(crate) fn apply(&self, session: &mut Session) -> Result<()> {
        session.set_profile(self.profile.clone());
        for (id, input) in &self.answers {
            match (&input.choice, input.score, &input.text) {
                (Some(label), None, None) => session.record_choice(id, label)?,
                (None, Some(score), None) => {
                    let label = option_with_score(session, id, score)?;
                    session.record_choice(id, &label)?;
                }
                (None, None, Some(text)) => session.record_text(id, text)?,
                _ => bail!("answer {id} must set exactly one of choice, score or text"),
            }
        }
        tracing::debug!(answers = self.answers.len(), "Applied answers document");
        Ok(())
    }
}

fn option_with_score(session: &Session, id: &str, score: u8) -> Result<String> {
    let question = session
        .catalog()
        .question(id)
        .with_context(|| format!("unknown question: {id}"))?;
    question
        .options
        .iter()
        .find(|o| o.score == score)
        .map(|o| o.label.clone())
        .with_context(|| format!("question {id} has no option scoring {score}"))
}
