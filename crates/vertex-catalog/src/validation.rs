//! Static validation of a catalog
//!
//! Runs once when a catalog is built or loaded. Checks the configuration
//! tables and every question, and enforces that predicates and derived
//! prompts only read questions declared strictly earlier, so a gated
//! question can always be reached in catalog order.

use crate::config::EngineConfig;
use crate::error::CatalogError;
use std::collections::{HashMap, HashSet};
use vertex_model::{DimensionKey, Question, QuestionKind, MAX_LEVEL, MAX_SCORE, MIN_LEVEL, MIN_SCORE};

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Catalog validation pass
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogValidator;

impl CatalogValidator {
    /// Create new validator instance
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate configuration and questions, stopping at the first defect
    ///
    /// # Errors
    /// Returns the first [`CatalogError`] found
    pub fn validate(&self, config: &EngineConfig, questions: &[Question]) -> Result<(), CatalogError> {
        match self.validate_all(config, questions).into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Collect every defect
    #[must_use]
    pub fn validate_all(&self, config: &EngineConfig, questions: &[Question]) -> Vec<CatalogError> {
        let mut errors = Vec::new();
        self.check_dimensions(config, &mut errors);
        self.check_weights(config, &mut errors);
        self.check_thresholds(config, &mut errors);
        self.check_size_buckets(config, &mut errors);
        self.check_benchmarks(config, &mut errors);
        self.check_questions(config, questions, &mut errors);
        self.check_bindings(config, questions, &mut errors);

        if !errors.is_empty() {
            tracing::debug!(defects = errors.len(), "Catalog validation failed");
        }
        errors
    }

    fn check_dimensions(&self, config: &EngineConfig, errors: &mut Vec<CatalogError>) {
        if config.dimensions.is_empty() {
            errors.push(CatalogError::NoDimensions);
            return;
        }

        let mut seen = HashSet::new();
        for dim in &config.dimensions {
            if !seen.insert(dim.key) {
                errors.push(CatalogError::DuplicateDimension(dim.key));
            }
        }
    }

    fn check_weights(&self, config: &EngineConfig, errors: &mut Vec<CatalogError>) {
        for (&dimension, &weight) in &config.weights {
            if !weight.is_finite() || weight < 0.0 {
                errors.push(CatalogError::InvalidWeight { dimension, weight });
            }
        }

        if config.dimensions.is_empty() {
            return;
        }

        let total: f64 = config
            .dimension_keys()
            .filter_map(|k| config.weight(k))
            .filter(|w| w.is_finite() && *w >= 0.0)
            .sum();

        if total <= 0.0 {
            errors.push(CatalogError::ZeroTotalWeight);
        } else if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            tracing::warn!(total, "Dimension weights do not sum to 1; global level is renormalized");
        }
    }

    fn check_thresholds(&self, config: &EngineConfig, errors: &mut Vec<CatalogError>) {
        let named = [
            ("advancement", config.advancement_threshold),
            ("strength", config.thresholds.strength),
            ("weakness", config.thresholds.weakness),
            ("pain severity", config.thresholds.pain_severity),
        ];
        for (name, value) in named {
            if !in_level_range(value) {
                errors.push(CatalogError::ThresholdOutOfRange { name, value });
            }
        }

        let bounds = &config.tier_boundaries;
        let increasing = bounds.windows(2).all(|w| w[0] < w[1]);
        if bounds.len() != 4 || !increasing || !bounds.iter().all(|b| in_level_range(*b)) {
            errors.push(CatalogError::InvalidTierBoundaries(bounds.clone()));
        }
    }

    fn check_size_buckets(&self, config: &EngineConfig, errors: &mut Vec<CatalogError>) {
        let b = config.size_buckets;
        if !(0 < b.micro_max && b.micro_max < b.small_max && b.small_max < b.mid_max) {
            errors.push(CatalogError::InvalidSizeBuckets {
                micro: b.micro_max,
                small: b.small_max,
                mid: b.mid_max,
            });
        }
    }

    fn check_benchmarks(&self, config: &EngineConfig, errors: &mut Vec<CatalogError>) {
        for (&bucket, row) in &config.benchmarks {
            for dimension in config.dimension_keys() {
                match row.get(&dimension) {
                    None => errors.push(CatalogError::MissingBenchmark { bucket, dimension }),
                    Some(&value) if !in_level_range(value) => {
                        errors.push(CatalogError::BenchmarkOutOfRange {
                            bucket,
                            dimension,
                            value,
                        });
                    }
                    Some(_) => {}
                }
            }
        }
    }

    fn check_questions(&self, config: &EngineConfig, questions: &[Question], errors: &mut Vec<CatalogError>) {
        let declared: HashSet<DimensionKey> = config.dimension_keys().collect();
        let all_ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        let mut position: HashMap<&str, usize> = HashMap::new();

        for (idx, question) in questions.iter().enumerate() {
            if position.insert(question.id.as_str(), idx).is_some() {
                errors.push(CatalogError::DuplicateQuestion(question.id.clone()));
            }

            if let Some(dimension) = question.section.dimension() {
                if !declared.contains(&dimension) {
                    errors.push(CatalogError::UndeclaredDimension {
                        question: question.id.clone(),
                        dimension,
                    });
                }
            }

            self.check_options(question, errors);

            for dependency in question.dependencies() {
                let earlier = position
                    .get(dependency.as_str())
                    .is_some_and(|&at| at < idx);
                if earlier {
                    continue;
                }
                let err = if all_ids.contains(dependency.as_str()) {
                    CatalogError::ForwardDependency {
                        question: question.id.clone(),
                        dependency: dependency.clone(),
                    }
                } else {
                    CatalogError::UnknownDependency {
                        question: question.id.clone(),
                        dependency: dependency.clone(),
                    }
                };
                errors.push(err);
            }
        }
    }

    fn check_options(&self, question: &Question, errors: &mut Vec<CatalogError>) {
        match question.kind {
            QuestionKind::ScoredChoice if question.options.is_empty() => {
                errors.push(CatalogError::NoOptions(question.id.clone()));
            }
            QuestionKind::FreeText if !question.options.is_empty() => {
                errors.push(CatalogError::UnexpectedOptions(question.id.clone()));
            }
            _ => {}
        }

        let mut labels = HashSet::new();
        for option in &question.options {
            if !(MIN_SCORE..=MAX_SCORE).contains(&option.score) {
                errors.push(CatalogError::ScoreOutOfRange {
                    question: question.id.clone(),
                    label: option.label.clone(),
                    score: option.score,
                });
            }
            if !labels.insert(option.label.as_str()) {
                errors.push(CatalogError::DuplicateOptionLabel {
                    question: question.id.clone(),
                    label: option.label.clone(),
                });
            }
        }
    }

    fn check_bindings(&self, config: &EngineConfig, questions: &[Question], errors: &mut Vec<CatalogError>) {
        for (binding, id) in config.bindings.entries() {
            let Some(id) = id else { continue };
            let Some(question) = questions.iter().find(|q| q.id == *id) else {
                tracing::warn!(binding, question = %id, "Report binding names no question; section will use defaults");
                continue;
            };

            let expected = expected_kind(binding);
            if question.kind != expected {
                errors.push(CatalogError::BindingKindMismatch {
                    binding,
                    question: question.id.clone(),
                    expected: kind_name(expected),
                });
            }
        }
    }
}

fn in_level_range(value: f64) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&value)
}

fn expected_kind(binding: &str) -> QuestionKind {
    match binding {
        "strength_reason" | "weakness_impact" => QuestionKind::FreeText,
        _ => QuestionKind::ScoredChoice,
    }
}

fn kind_name(kind: QuestionKind) -> &'static str {
    match kind {
        QuestionKind::ScoredChoice => "scored-choice",
        QuestionKind::FreeText => "free-text",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SizeBucket;
    use vertex_model::{Predicate, Prompt, QuestionId, Section};

    const STRATEGY: Section = Section::Dimension(DimensionKey::Strategy);

    fn scored(id: &str) -> Question {
        Question::choice(id, STRATEGY, "Strategy", "?")
            .option("Low", 1, &[])
            .option("High", 5, &[])
    }

    fn bare_config() -> EngineConfig {
        let mut config = EngineConfig::default();
        config.bindings = crate::config::ReportBindings {
            decision_style: None,
            dependency: None,
            strength_pick: None,
            strength_reason: None,
            weakness_pick: None,
            weakness_impact: None,
            opportunity_pick: None,
            threat_pick: None,
        };
        config
    }

    fn errors(questions: &[Question]) -> Vec<CatalogError> {
        CatalogValidator::new().validate_all(&bare_config(), questions)
    }

    #[test]
    fn accepts_backward_dependency() {
        let questions = vec![scored("E1"), scored("E2").visible_if(Predicate::score_at_least("E1", 3))];
        assert!(errors(&questions).is_empty());
    }

    #[test]
    fn rejects_forward_dependency() {
        let questions = vec![scored("E2").visible_if(Predicate::score_at_least("E1", 3)), scored("E1")];
        assert_eq!(
            errors(&questions),
            vec![CatalogError::ForwardDependency {
                question: QuestionId::from("E2"),
                dependency: QuestionId::from("E1"),
            }]
        );
    }

    #[test]
    fn rejects_self_dependency() {
        let questions = vec![scored("E1").visible_if(Predicate::answered("E1"))];
        assert!(matches!(
            errors(&questions).as_slice(),
            [CatalogError::ForwardDependency { .. }]
        ));
    }

    #[test]
    fn rejects_unknown_prompt_source() {
        let q = Question::text(
            "S1",
            Section::Context,
            "Context",
            Prompt::Echo {
                template: "{answer}".to_string(),
                source: QuestionId::from("S0"),
                fallback: String::new(),
            },
        );
        assert!(matches!(
            errors(&[q]).as_slice(),
            [CatalogError::UnknownDependency { .. }]
        ));
    }

    #[test]
    fn rejects_option_defects() {
        let bad = Question::choice("E1", STRATEGY, "Strategy", "?")
            .option("Same", 0, &[])
            .option("Same", 3, &[]);
        let empty = Question::choice("E2", STRATEGY, "Strategy", "?");
        let text = Question::text("E3", Section::Context, "Context", "?").option("x", 1, &[]);

        let found = errors(&[bad, empty, text]);
        assert!(found.iter().any(|e| matches!(e, CatalogError::ScoreOutOfRange { score: 0, .. })));
        assert!(found.iter().any(|e| matches!(e, CatalogError::DuplicateOptionLabel { .. })));
        assert!(found.contains(&CatalogError::NoOptions(QuestionId::from("E2"))));
        assert!(found.contains(&CatalogError::UnexpectedOptions(QuestionId::from("E3"))));
    }

    #[test]
    fn rejects_duplicate_question() {
        let found = errors(&[scored("E1"), scored("E1")]);
        assert_eq!(found, vec![CatalogError::DuplicateQuestion(QuestionId::from("E1"))]);
    }

    #[test]
    fn rejects_config_defects() {
        let mut config = bare_config();
        config.advancement_threshold = 0.0;
        config.tier_boundaries = vec![1.5, 1.5, 3.5, 4.5];
        config.size_buckets.small_max = 5;
        config.weights.insert(DimensionKey::Risk, -1.0);
        if let Some(row) = config.benchmarks.get_mut(&SizeBucket::Micro) {
            row.shift_remove(&DimensionKey::Tech);
        }

        let found = CatalogValidator::new().validate_all(&config, &[]);
        assert!(found.iter().any(|e| matches!(e, CatalogError::ThresholdOutOfRange { name: "advancement", .. })));
        assert!(found.iter().any(|e| matches!(e, CatalogError::InvalidTierBoundaries(_))));
        assert!(found.iter().any(|e| matches!(e, CatalogError::InvalidSizeBuckets { .. })));
        assert!(found.iter().any(|e| matches!(e, CatalogError::InvalidWeight { .. })));
        assert!(found.contains(&CatalogError::MissingBenchmark {
            bucket: SizeBucket::Micro,
            dimension: DimensionKey::Tech,
        }));
    }

    #[test]
    fn rejects_zero_total_weight() {
        let mut config = bare_config();
        config.weights.clear();
        let found = CatalogValidator::new().validate_all(&config, &[]);
        assert_eq!(found, vec![CatalogError::ZeroTotalWeight]);
    }

    #[test]
    fn rejects_binding_of_wrong_kind() {
        let mut config = bare_config();
        config.bindings.strength_reason = Some(QuestionId::from("E1"));
        let found = CatalogValidator::new().validate_all(&config, &[scored("E1")]);
        assert!(matches!(
            found.as_slice(),
            [CatalogError::BindingKindMismatch { expected: "free-text", .. }]
        ));
    }
}
