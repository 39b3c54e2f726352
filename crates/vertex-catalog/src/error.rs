//! Error types for the catalog
//!
//! - [`CatalogError`]: static authoring defects found by the validation pass
//! - [`ConfigError`]: failures loading a catalog or configuration document

use crate::config::SizeBucket;
use std::path::PathBuf;
use vertex_model::{DimensionKey, QuestionId};

/// Catalog authoring defect
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// No dimensions declared
    #[error("no dimensions declared")]
    NoDimensions,

    /// Dimension declared twice
    #[error("dimension declared twice: {0}")]
    DuplicateDimension(DimensionKey),

    /// Weight is negative, NaN or infinite
    #[error("invalid weight {weight} for dimension {dimension}")]
    InvalidWeight { dimension: DimensionKey, weight: f64 },

    /// Declared dimensions carry no weight at all
    #[error("weight table has zero total over declared dimensions")]
    ZeroTotalWeight,

    /// Threshold outside the level scale
    #[error("{name} threshold {value} outside [1, 5]")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    /// Tier boundaries are not four strictly increasing levels
    #[error("tier boundaries must be 4 strictly increasing levels in [1, 5]: {0:?}")]
    InvalidTierBoundaries(Vec<f64>),

    /// Size bucket upper bounds are not strictly increasing
    #[error("size buckets must increase: micro {micro} < small {small} < mid {mid}")]
    InvalidSizeBuckets { micro: u32, small: u32, mid: u32 },

    /// Benchmark table lacks a declared dimension
    #[error("benchmark for {bucket} is missing dimension {dimension}")]
    MissingBenchmark {
        bucket: SizeBucket,
        dimension: DimensionKey,
    },

    /// Benchmark reference outside the level scale
    #[error("benchmark for {bucket}/{dimension} is {value}, outside [1, 5]")]
    BenchmarkOutOfRange {
        bucket: SizeBucket,
        dimension: DimensionKey,
        value: f64,
    },

    /// Question scored in a dimension that is not declared
    #[error("{question} is scored in undeclared dimension {dimension}")]
    UndeclaredDimension {
        question: QuestionId,
        dimension: DimensionKey,
    },

    /// Question id used twice
    #[error("question declared twice: {0}")]
    DuplicateQuestion(QuestionId),

    /// Scored-choice question without options
    #[error("scored-choice question {0} has no options")]
    NoOptions(QuestionId),

    /// Free-text question with options
    #[error("free-text question {0} declares options")]
    UnexpectedOptions(QuestionId),

    /// Option score outside 1..=5
    #[error("option '{label}' of {question} scores {score}, outside [1, 5]")]
    ScoreOutOfRange {
        question: QuestionId,
        label: String,
        score: u8,
    },

    /// Option label used twice within a question
    #[error("option label '{label}' repeated in {question}")]
    DuplicateOptionLabel { question: QuestionId, label: String },

    /// Predicate or prompt reads a question that does not exist
    #[error("{question} depends on unknown question {dependency}")]
    UnknownDependency {
        question: QuestionId,
        dependency: QuestionId,
    },

    /// Predicate or prompt reads a question declared at or after it
    #[error("{question} depends on {dependency}, which is not declared before it")]
    ForwardDependency {
        question: QuestionId,
        dependency: QuestionId,
    },

    /// Report binding names a question of the wrong kind
    #[error("report binding '{binding}' expects a {expected} question, {question} is not")]
    BindingKindMismatch {
        binding: &'static str,
        question: QuestionId,
        expected: &'static str,
    },
}

/// Document loading failure
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not toml, yaml, yml or json
    #[error("unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// Invalid TOML
    #[error("invalid TOML: {0}")]
    InvalidToml(#[from] toml::de::Error),

    /// Invalid YAML
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// Invalid JSON
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Document parsed but the catalog is defective
    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_error_display() {
        let err = CatalogError::ForwardDependency {
            question: QuestionId::from("S1"),
            dependency: QuestionId::from("S0"),
        };
        assert_eq!(err.to_string(), "S1 depends on S0, which is not declared before it");
    }

    #[test]
    fn config_error_wraps_catalog_error() {
        let err: ConfigError = CatalogError::NoDimensions.into();
        assert!(err.to_string().contains("no dimensions"));
    }
}
