//! Score snapshot

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use vertex_model::{DimensionKey, MIN_LEVEL};

/// Derived scores for one answer set
///
/// Levels are kept unrounded; rounding happens only when presenting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Level per declared dimension, in declaration order
    pub levels: IndexMap<DimensionKey, f64>,
    /// Weighted global level
    pub global: f64,
    /// Whether every dimension reaches the advancement threshold
    pub can_advance: bool,
    /// Scored answers that contributed to each dimension
    pub coverage: IndexMap<DimensionKey, usize>,
}

impl ScoreSnapshot {
    /// Level of a dimension, the pessimistic fallback when undeclared
    #[inline]
    #[must_use]
    pub fn level(&self, key: DimensionKey) -> f64 {
        self.levels.get(&key).copied().unwrap_or(MIN_LEVEL)
    }

    /// Lowest dimension level
    #[must_use]
    pub fn min_level(&self) -> f64 {
        self.levels.values().copied().fold(f64::INFINITY, f64::min)
    }

    /// Dimensions lowest first; ties keep declaration order
    #[must_use]
    pub fn ranked_ascending(&self) -> Vec<(DimensionKey, f64)> {
        let mut ranked: Vec<(DimensionKey, f64)> = self.levels.iter().map(|(k, v)| (*k, *v)).collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
        ranked
    }

    /// Dimensions highest first; ties keep declaration order
    #[must_use]
    pub fn ranked_descending(&self) -> Vec<(DimensionKey, f64)> {
        let mut ranked: Vec<(DimensionKey, f64)> = self.levels.iter().map(|(k, v)| (*k, *v)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Highest dimension, first declared on ties
    #[must_use]
    pub fn best(&self) -> Option<DimensionKey> {
        self.ranked_descending().first().map(|(k, _)| *k)
    }

    /// Lowest dimension, first declared on ties
    #[must_use]
    pub fn worst(&self) -> Option<DimensionKey> {
        self.ranked_ascending().first().map(|(k, _)| *k)
    }

    /// Dimensions without any contributing answer
    ///
    /// Their level is the fallback of 1 and cannot be told apart from a
    /// dimension that genuinely scored the minimum.
    #[must_use]
    pub fn not_assessed(&self) -> Vec<DimensionKey> {
        self.levels
            .keys()
            .filter(|k| self.coverage.get(*k).copied().unwrap_or(0) == 0)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot(values: [f64; 6]) -> ScoreSnapshot {
        let levels: IndexMap<DimensionKey, f64> = DimensionKey::ALL.into_iter().zip(values).collect();
        let coverage = levels.keys().map(|k| (*k, 1)).collect();
        ScoreSnapshot {
            levels,
            global: 1.0,
            can_advance: false,
            coverage,
        }
    }

    #[test]
    fn ties_keep_declaration_order() {
        let snap = snapshot([1.0, 1.0, 5.0, 3.0, 3.0, 3.0]);
        let ascending: Vec<DimensionKey> = snap.ranked_ascending().into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            ascending,
            vec![
                DimensionKey::Strategy,
                DimensionKey::Process,
                DimensionKey::People,
                DimensionKey::Tech,
                DimensionKey::Risk,
                DimensionKey::Finance,
            ]
        );
        assert_eq!(snap.worst(), Some(DimensionKey::Strategy));
        assert_eq!(snap.best(), Some(DimensionKey::Finance));
    }

    #[test]
    fn all_tied_best_and_worst_are_first_declared() {
        let snap = snapshot([2.0; 6]);
        assert_eq!(snap.best(), Some(DimensionKey::Strategy));
        assert_eq!(snap.worst(), Some(DimensionKey::Strategy));
    }

    #[test]
    fn json_keeps_declared_dimension_order() {
        let snap = snapshot([1.0, 2.0, 3.0, 4.0, 5.0, 2.5]);
        let json = serde_json::to_string(&snap).unwrap();

        assert!(json.starts_with(
            r#"{"levels":{"strategy":1.0,"process":2.0,"finance":3.0,"people":4.0,"tech":5.0,"risk":2.5},"global":1.0,"can_advance":false"#
        ));
        assert!(json.contains(r#""coverage":{"strategy":1,"#));
        let back: ScoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ranked_descending()[0].0, DimensionKey::Tech);
    }

    #[test]
    fn not_assessed_reads_coverage() {
        let mut snap = snapshot([1.0; 6]);
        snap.coverage.insert(DimensionKey::Tech, 0);
        assert_eq!(snap.not_assessed(), vec![DimensionKey::Tech]);
        assert_eq!(snap.min_level(), 1.0);
    }
}
