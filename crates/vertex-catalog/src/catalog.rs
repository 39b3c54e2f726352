//! Question catalog
//!
//! An ordered list of questions plus the engine configuration. A [`Catalog`]
//! can only be obtained through a constructor that ran the validation pass,
//! so every consumer may rely on unique ids and backward-only dependencies.

use crate::config::EngineConfig;
use crate::defaults::default_questions;
use crate::error::{CatalogError, ConfigError};
use crate::format::{read_document, DocumentFormat};
use crate::validation::CatalogValidator;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use vertex_model::{DimensionKey, Question, QuestionId};

/// Validated question catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    config: EngineConfig,
    questions: Vec<Question>,
    #[serde(skip)]
    positions: HashMap<QuestionId, usize>,
}

/// On-disk shape of a catalog
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    config: EngineConfig,
    questions: Vec<Question>,
}

impl Catalog {
    /// Build and validate a catalog
    ///
    /// # Errors
    /// Returns the first defect found by [`CatalogValidator`]
    pub fn new(config: EngineConfig, questions: Vec<Question>) -> Result<Self, CatalogError> {
        CatalogValidator::new().validate(&config, &questions)?;
        let catalog = Self::assemble(config, questions);
        tracing::debug!(
            questions = catalog.questions.len(),
            dimensions = catalog.config.dimensions.len(),
            "Catalog built"
        );
        Ok(catalog)
    }

    /// Built-in catalog with default configuration
    #[must_use]
    pub fn builtin() -> Self {
        // The built-in tables are covered by `builtin_catalog_is_valid`.
        Self::assemble(EngineConfig::default(), default_questions())
    }

    /// Built-in questions with custom configuration
    ///
    /// # Errors
    /// Returns error if the configuration does not fit the built-in questions
    pub fn builtin_with_config(config: EngineConfig) -> Result<Self, CatalogError> {
        Self::new(config, default_questions())
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns error if the document is invalid or the catalog is defective
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let doc: CatalogDocument = toml::from_str(text)?;
        Ok(Self::new(doc.config, doc.questions)?)
    }

    /// Parse from YAML
    ///
    /// # Errors
    /// Returns error if the document is invalid or the catalog is defective
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let doc: CatalogDocument = serde_yaml::from_str(text)?;
        Ok(Self::new(doc.config, doc.questions)?)
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if the document is invalid or the catalog is defective
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let doc: CatalogDocument = serde_json::from_str(text)?;
        Ok(Self::new(doc.config, doc.questions)?)
    }

    /// Load from file, format chosen by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let (text, format) = read_document(path)?;
        let catalog = match format {
            DocumentFormat::Toml => Self::from_toml_str(&text),
            DocumentFormat::Yaml => Self::from_yaml_str(&text),
            DocumentFormat::Json => Self::from_json_str(&text),
        }?;
        tracing::info!(path = %path.display(), questions = catalog.questions.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Read the configuration and questions of a catalog file without
    /// validating them, so a caller can report every defect at once
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn read_parts(path: impl AsRef<Path>) -> Result<(EngineConfig, Vec<Question>), ConfigError> {
        let (text, format) = read_document(path.as_ref())?;
        let doc: CatalogDocument = match format {
            DocumentFormat::Toml => toml::from_str(&text)?,
            DocumentFormat::Yaml => serde_yaml::from_str(&text)?,
            DocumentFormat::Json => serde_json::from_str(&text)?,
        };
        Ok((doc.config, doc.questions))
    }

    fn assemble(config: EngineConfig, questions: Vec<Question>) -> Self {
        let positions = questions
            .iter()
            .enumerate()
            .map(|(i, q)| (q.id.clone(), i))
            .collect();
        Self {
            config,
            questions,
            positions,
        }
    }

    /// Engine configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Questions in catalog order
    #[inline]
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question by id
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.positions.get(id).map(|&i| &self.questions[i])
    }

    /// Catalog position of a question
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Scored questions of one dimension, in catalog order
    pub fn questions_in(&self, key: DimensionKey) -> impl Iterator<Item = &Question> {
        self.questions
            .iter()
            .filter(move |q| q.scored_dimension() == Some(key))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
