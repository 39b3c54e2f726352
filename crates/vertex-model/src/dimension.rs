//! Maturity dimensions
//!
//! The set of dimensions is closed: every template table in the engine is
//! keyed by [`DimensionKey`] and matched exhaustively, so adding a dimension
//! is a compile error until every table covers it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Lowest option score
pub const MIN_SCORE: u8 = 1;
/// Highest option score
pub const MAX_SCORE: u8 = 5;
/// Lowest maturity level (also the fallback for unassessed dimensions)
pub const MIN_LEVEL: f64 = 1.0;
/// Highest maturity level
pub const MAX_LEVEL: f64 = 5.0;

/// Key of a maturity dimension
///
/// Serialized as its lowercase name so it can key maps in every document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DimensionKey {
    /// Direction, focus and prioritisation
    Strategy,
    /// Repeatability of operations
    Process,
    /// Financial visibility and control
    Finance,
    /// Roles, delegation and performance management
    People,
    /// Tools and data
    Tech,
    /// Governance, controls and compliance
    Risk,
}

impl DimensionKey {
    /// All keys in canonical order
    pub const ALL: [DimensionKey; 6] = [
        DimensionKey::Strategy,
        DimensionKey::Process,
        DimensionKey::Finance,
        DimensionKey::People,
        DimensionKey::Tech,
        DimensionKey::Risk,
    ];

    /// Stable string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKey::Strategy => "strategy",
            DimensionKey::Process => "process",
            DimensionKey::Finance => "finance",
            DimensionKey::People => "people",
            DimensionKey::Tech => "tech",
            DimensionKey::Risk => "risk",
        }
    }
}

impl Display for DimensionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionKey {
    type Err = ParseDimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDimensionError(s.to_string()))
    }
}

impl Serialize for DimensionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DimensionKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Unknown dimension name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension: {0}")]
pub struct ParseDimensionError(pub String);

/// A named, displayable dimension
///
/// Declaration order of dimensions in the configuration is the tie-break
/// order used by every ranking in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Dimension key
    pub key: DimensionKey,
    /// Display name
    pub name: String,
}

impl Dimension {
    /// Create new dimension
    #[inline]
    #[must_use]
    pub fn new(key: DimensionKey, name: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_round_trips_through_str() {
        for key in DimensionKey::ALL {
            assert_eq!(DimensionKey::from_str(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn key_parse_is_case_insensitive() {
        assert_eq!("Finance".parse::<DimensionKey>().unwrap(), DimensionKey::Finance);
        assert!("marketing".parse::<DimensionKey>().is_err());
    }

    #[test]
    fn key_serializes_lowercase() {
        let json = serde_json::to_string(&DimensionKey::Tech).unwrap();
        assert_eq!(json, "\"tech\"");
    }
}
