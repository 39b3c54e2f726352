//! Advancement gate

use indexmap::IndexMap;
use vertex_model::DimensionKey;

/// Whether every level reaches `threshold`
///
/// A hard gate: one dimension below the threshold blocks advancement, with
/// no partial credit. Compares unrounded levels.
#[must_use]
pub fn can_advance(levels: &IndexMap<DimensionKey, f64>, threshold: f64) -> bool {
    levels.values().all(|level| *level >= threshold)
}
