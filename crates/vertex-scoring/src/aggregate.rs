//! Scoring aggregation
//!
//! - Per-dimension level: mean of the answered scored questions in the active
//!   set, or 1 when the dimension has no contributing answer
//! - Global level: weight-normalized mean over the dimensions present in the
//!   weight table
//!
//! Missing data never fails; it degrades to the pessimistic fallback.

use crate::gate::can_advance;
use crate::snapshot::ScoreSnapshot;
use indexmap::IndexMap;
use vertex_catalog::{Catalog, EngineConfig, QuestionSet};
use vertex_model::{AnswerStore, DimensionKey, MAX_LEVEL, MIN_LEVEL};

/// Score the answers to the questions in `active`
#[must_use]
pub fn score(catalog: &Catalog, answers: &AnswerStore, active: &QuestionSet) -> ScoreSnapshot {
    let config = catalog.config();
    let mut sums: IndexMap<DimensionKey, (u32, usize)> =
        config.dimension_keys().map(|k| (k, (0, 0))).collect();

    for question in catalog.questions() {
        let Some(key) = question.scored_dimension() else {
            continue;
        };
        if !active.contains(&question.id) {
            continue;
        }
        let (Some(entry), Some(score)) = (sums.get_mut(&key), answers.score(&question.id)) else {
            continue;
        };
        entry.0 += u32::from(score);
        entry.1 += 1;
    }

    let levels: IndexMap<DimensionKey, f64> = sums
        .iter()
        .map(|(key, &(sum, count))| (*key, dimension_level(sum, count)))
        .collect();
    let coverage = sums.iter().map(|(key, &(_, count))| (*key, count)).collect();
    let global = global_level(config, &levels);
    let can_advance = can_advance(&levels, config.advancement_threshold);

    tracing::debug!(global, can_advance, active = active.len(), "Computed score snapshot");

    ScoreSnapshot {
        levels,
        global,
        can_advance,
        coverage,
    }
}

/// Mean score, 1 when nothing was answered
#[must_use]
pub fn dimension_level(sum: u32, count: usize) -> f64 {
    if count == 0 {
        return MIN_LEVEL;
    }
    (f64::from(sum) / count as f64).clamp(MIN_LEVEL, MAX_LEVEL)
}

/// Weight-normalized mean of `levels`
///
/// Dimensions absent from the weight table are left out and the remaining
/// weights renormalized. With no usable weight the global level is 1.
#[must_use]
pub fn global_level(config: &EngineConfig, levels: &IndexMap<DimensionKey, f64>) -> f64 {
    let (weighted, total) = levels
        .iter()
        .filter_map(|(key, level)| config.weight(*key).map(|w| (level, w)))
        .fold((0.0, 0.0), |(acc, total), (level, w)| (acc + level * w, total + w));

    if total > 0.0 {
        (weighted / total).clamp(MIN_LEVEL, MAX_LEVEL)
    } else {
        MIN_LEVEL
    }
}
