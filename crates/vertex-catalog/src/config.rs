//! Engine configuration
//!
//! Every constant the engine consults (weights, thresholds, tier boundaries,
//! benchmark tables, size buckets, list caps and report bindings) lives here
//! so it can be tuned from a TOML/YAML/JSON document without touching code.

use crate::error::ConfigError;
use crate::format::{read_document, DocumentFormat};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};
use std::path::Path;
use std::str::FromStr;
use vertex_model::{Dimension, DimensionKey, QuestionId};

/// Tunable engine constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Dimensions in declaration order (the tie-break order)
    pub dimensions: Vec<Dimension>,
    /// Relative weight per dimension; absent dimensions are left out of the global level
    pub weights: IndexMap<DimensionKey, f64>,
    /// Minimum level every dimension needs to advance
    pub advancement_threshold: f64,
    /// Lowest level of tiers 2..=5
    pub tier_boundaries: Vec<f64>,
    /// Ranking thresholds
    pub thresholds: RankingThresholds,
    /// List caps
    pub limits: ReportLimits,
    /// Employee-count partition
    pub size_buckets: SizeBuckets,
    /// Reference level per size bucket and dimension
    pub benchmarks: IndexMap<SizeBucket, IndexMap<DimensionKey, f64>>,
    /// Questions feeding specific report sections
    pub bindings: ReportBindings,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With advancement threshold
    #[inline]
    #[must_use]
    pub fn with_advancement_threshold(mut self, threshold: f64) -> Self {
        self.advancement_threshold = threshold;
        self
    }

    /// With weight for one dimension
    #[inline]
    #[must_use]
    pub fn with_weight(mut self, key: DimensionKey, weight: f64) -> Self {
        self.weights.insert(key, weight);
        self
    }

    /// Without weight for one dimension
    #[inline]
    #[must_use]
    pub fn without_weight(mut self, key: DimensionKey) -> Self {
        self.weights.shift_remove(&key);
        self
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// Returns error if the document is invalid
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Parse from YAML
    ///
    /// # Errors
    /// Returns error if the document is invalid
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse from JSON
    ///
    /// # Errors
    /// Returns error if the document is invalid
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load from file, format chosen by extension
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let (text, format) = read_document(path.as_ref())?;
        match format {
            DocumentFormat::Toml => Self::from_toml_str(&text),
            DocumentFormat::Yaml => Self::from_yaml_str(&text),
            DocumentFormat::Json => Self::from_json_str(&text),
        }
    }

    /// Display name of a dimension
    #[must_use]
    pub fn dimension_name(&self, key: DimensionKey) -> &str {
        self.dimensions
            .iter()
            .find(|d| d.key == key)
            .map_or(key.as_str(), |d| d.name.as_str())
    }

    /// Declared dimension keys in order
    pub fn dimension_keys(&self) -> impl Iterator<Item = DimensionKey> + '_ {
        self.dimensions.iter().map(|d| d.key)
    }

    /// Weight of a dimension, `None` when absent from the table
    #[inline]
    #[must_use]
    pub fn weight(&self, key: DimensionKey) -> Option<f64> {
        self.weights.get(&key).copied()
    }

    /// Maturity tier of a level
    ///
    /// With the default boundaries this is the half-up rounding of the level.
    #[must_use]
    pub fn tier_for(&self, level: f64) -> MaturityTier {
        let passed = self
            .tier_boundaries
            .iter()
            .take(4)
            .filter(|b| level >= **b)
            .count();
        MaturityTier::from_index(passed)
    }

    /// Reference levels for a bucket, falling back to the unknown bucket
    #[must_use]
    pub fn benchmark_for(&self, bucket: SizeBucket) -> Option<&IndexMap<DimensionKey, f64>> {
        self.benchmarks
            .get(&bucket)
            .or_else(|| self.benchmarks.get(&SizeBucket::Unknown))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        let dimensions = vec![
            Dimension::new(DimensionKey::Strategy, "Strategy"),
            Dimension::new(DimensionKey::Process, "Processes"),
            Dimension::new(DimensionKey::Finance, "Finance"),
            Dimension::new(DimensionKey::People, "People & Roles"),
            Dimension::new(DimensionKey::Tech, "Technology & Data"),
            Dimension::new(DimensionKey::Risk, "Governance & Risk"),
        ];
        let weights = IndexMap::from([
            (DimensionKey::Strategy, 0.17),
            (DimensionKey::Process, 0.17),
            (DimensionKey::Finance, 0.18),
            (DimensionKey::People, 0.16),
            (DimensionKey::Tech, 0.16),
            (DimensionKey::Risk, 0.16),
        ]);

        Self {
            dimensions,
            weights,
            advancement_threshold: 2.0,
            tier_boundaries: vec![1.5, 2.5, 3.5, 4.5],
            thresholds: RankingThresholds::default(),
            limits: ReportLimits::default(),
            size_buckets: SizeBuckets::default(),
            benchmarks: default_benchmarks(),
            bindings: ReportBindings::default(),
        }
    }
}

fn bench_row(values: [f64; 6]) -> IndexMap<DimensionKey, f64> {
    DimensionKey::ALL.into_iter().zip(values).collect()
}

fn default_benchmarks() -> IndexMap<SizeBucket, IndexMap<DimensionKey, f64>> {
    IndexMap::from([
        (SizeBucket::Micro, bench_row([2.3, 2.1, 2.0, 2.0, 2.0, 2.0])),
        (SizeBucket::Small, bench_row([2.8, 2.6, 2.6, 2.6, 2.4, 2.4])),
        (SizeBucket::Mid, bench_row([3.2, 3.1, 3.2, 3.0, 3.0, 3.1])),
        (SizeBucket::Large, bench_row([3.6, 3.6, 3.7, 3.5, 3.6, 3.6])),
        (SizeBucket::Unknown, bench_row([2.8, 2.6, 2.6, 2.6, 2.4, 2.4])),
    ])
}

/// Thresholds used by the synthesizer's ranking rules
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingThresholds {
    /// Dimensions at or above count as strengths
    pub strength: f64,
    /// Dimensions at or below count as weaknesses
    pub weakness: f64,
    /// Pain points below use the fragility wording
    pub pain_severity: f64,
    /// Benchmark gap beyond which a dimension is ahead/behind
    pub benchmark_margin: f64,
}

impl Default for RankingThresholds {
    fn default() -> Self {
        Self {
            strength: 3.5,
            weakness: 2.5,
            pain_severity: 2.5,
            benchmark_margin: 0.3,
        }
    }
}

/// Length caps of report lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportLimits {
    /// Ranked pain points
    pub pain_points: usize,
    /// Ranked gaps
    pub gaps: usize,
    /// Dimensions contributing to strengths / weaknesses
    pub swot_dimensions: usize,
    /// Evidence labels per SWOT entry
    pub evidence_per_entry: usize,
    /// Strengths list
    pub strengths: usize,
    /// Weaknesses list
    pub weaknesses: usize,
    /// Opportunities list
    pub opportunities: usize,
    /// Threats list
    pub threats: usize,
    /// Lowest dimensions feeding root causes
    pub root_cause_dimensions: usize,
    /// Root-cause hypotheses
    pub root_causes: usize,
    /// Quick wins
    pub quick_wins: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            pain_points: 3,
            gaps: 3,
            swot_dimensions: 2,
            evidence_per_entry: 2,
            strengths: 4,
            weaknesses: 4,
            opportunities: 5,
            threats: 5,
            root_cause_dimensions: 2,
            root_causes: 6,
            quick_wins: 6,
        }
    }
}

/// Company size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SizeBucket {
    /// Head count not declared
    Unknown,
    /// 1 to 9
    Micro,
    /// 10 to 49
    Small,
    /// 50 to 199
    Mid,
    /// 200 and more
    Large,
}

impl SizeBucket {
    /// All buckets
    pub const ALL: [SizeBucket; 5] = [
        SizeBucket::Unknown,
        SizeBucket::Micro,
        SizeBucket::Small,
        SizeBucket::Mid,
        SizeBucket::Large,
    ];

    /// Stable string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Unknown => "unknown",
            SizeBucket::Micro => "micro",
            SizeBucket::Small => "small",
            SizeBucket::Mid => "mid",
            SizeBucket::Large => "large",
        }
    }
}

impl Display for SizeBucket {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SizeBucket::ALL
            .into_iter()
            .find(|b| b.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown size bucket: {s}"))
    }
}

impl Serialize for SizeBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SizeBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Inclusive upper head counts of the bounded buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeBuckets {
    /// Micro upper bound
    pub micro_max: u32,
    /// Small upper bound
    pub small_max: u32,
    /// Mid upper bound; anything above is large
    pub mid_max: u32,
}

impl SizeBuckets {
    /// Bucket of a declared head count
    ///
    /// Missing or zero head count is [`SizeBucket::Unknown`].
    #[must_use]
    pub fn bucket_for(&self, employees: Option<u32>) -> SizeBucket {
        match employees {
            None | Some(0) => SizeBucket::Unknown,
            Some(n) if n <= self.micro_max => SizeBucket::Micro,
            Some(n) if n <= self.small_max => SizeBucket::Small,
            Some(n) if n <= self.mid_max => SizeBucket::Mid,
            Some(_) => SizeBucket::Large,
        }
    }
}

impl Default for SizeBuckets {
    fn default() -> Self {
        Self {
            micro_max: 9,
            small_max: 49,
            mid_max: 199,
        }
    }
}

/// Five maturity tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaturityTier {
    /// Level 1
    Chaotic,
    /// Level 2
    Intuitive,
    /// Level 3
    Ordered,
    /// Level 4
    Controlled,
    /// Level 5
    Scalable,
}

impl MaturityTier {
    /// All tiers, lowest first
    pub const ALL: [MaturityTier; 5] = [
        MaturityTier::Chaotic,
        MaturityTier::Intuitive,
        MaturityTier::Ordered,
        MaturityTier::Controlled,
        MaturityTier::Scalable,
    ];

    /// Tier from 0-based index, saturating
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(4)]
    }

    /// Tier number 1..=5
    #[inline]
    #[must_use]
    pub fn number(&self) -> u8 {
        match self {
            MaturityTier::Chaotic => 1,
            MaturityTier::Intuitive => 2,
            MaturityTier::Ordered => 3,
            MaturityTier::Controlled => 4,
            MaturityTier::Scalable => 5,
        }
    }

    /// Tier name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            MaturityTier::Chaotic => "Chaotic",
            MaturityTier::Intuitive => "Intuitive",
            MaturityTier::Ordered => "Ordered",
            MaturityTier::Controlled => "Controlled",
            MaturityTier::Scalable => "Scalable",
        }
    }

    /// Presentation colour hint
    #[inline]
    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            MaturityTier::Chaotic => "red",
            MaturityTier::Intuitive => "orange",
            MaturityTier::Ordered => "yellow",
            MaturityTier::Controlled => "green",
            MaturityTier::Scalable => "blue",
        }
    }

    /// "Level N – Name"
    #[must_use]
    pub fn label(&self) -> String {
        format!("Level {} – {}", self.number(), self.name())
    }
}

impl Display for MaturityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Questions whose answers feed specific report sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportBindings {
    /// Scored question behind the decision-style phrase
    pub decision_style: Option<QuestionId>,
    /// Scored question behind the dependency phrase
    pub dependency: Option<QuestionId>,
    /// Explicit strength pick
    pub strength_pick: Option<QuestionId>,
    /// Free-text reason for the strength pick
    pub strength_reason: Option<QuestionId>,
    /// Explicit weakness pick
    pub weakness_pick: Option<QuestionId>,
    /// Free-text impact of the weakness pick
    pub weakness_impact: Option<QuestionId>,
    /// Explicit opportunity pick
    pub opportunity_pick: Option<QuestionId>,
    /// Explicit threat pick
    pub threat_pick: Option<QuestionId>,
}

impl Default for ReportBindings {
    fn default() -> Self {
        Self {
            decision_style: Some(QuestionId::from("E1")),
            dependency: Some(QuestionId::from("P1")),
            strength_pick: Some(QuestionId::from("S0")),
            strength_reason: Some(QuestionId::from("S1")),
            weakness_pick: Some(QuestionId::from("W0")),
            weakness_impact: Some(QuestionId::from("W1")),
            opportunity_pick: Some(QuestionId::from("O0")),
            threat_pick: Some(QuestionId::from("T0")),
        }
    }
}

impl ReportBindings {
    /// Every binding with its name, for validation
    #[must_use]
    pub fn entries(&self) -> [(&'static str, Option<&QuestionId>); 8] {
        [
            ("decision_style", self.decision_style.as_ref()),
            ("dependency", self.dependency.as_ref()),
            ("strength_pick", self.strength_pick.as_ref()),
            ("strength_reason", self.strength_reason.as_ref()),
            ("weakness_pick", self.weakness_pick.as_ref()),
            ("weakness_impact", self.weakness_impact.as_ref()),
            ("opportunity_pick", self.opportunity_pick.as_ref()),
            ("threat_pick", self.threat_pick.as_ref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let config = EngineConfig::default();
        let total: f64 = config.weights.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tiers_follow_half_up_rounding() {
        let config = EngineConfig::default();
        assert_eq!(config.tier_for(1.0), MaturityTier::Chaotic);
        assert_eq!(config.tier_for(1.49), MaturityTier::Chaotic);
        assert_eq!(config.tier_for(1.5), MaturityTier::Intuitive);
        assert_eq!(config.tier_for(3.2), MaturityTier::Ordered);
        assert_eq!(config.tier_for(4.5), MaturityTier::Scalable);
        assert_eq!(config.tier_for(5.0), MaturityTier::Scalable);
    }

    #[test]
    fn size_bucket_boundaries() {
        let buckets = SizeBuckets::default();
        assert_eq!(buckets.bucket_for(None), SizeBucket::Unknown);
        assert_eq!(buckets.bucket_for(Some(0)), SizeBucket::Unknown);
        assert_eq!(buckets.bucket_for(Some(9)), SizeBucket::Micro);
        assert_eq!(buckets.bucket_for(Some(10)), SizeBucket::Small);
        assert_eq!(buckets.bucket_for(Some(49)), SizeBucket::Small);
        assert_eq!(buckets.bucket_for(Some(199)), SizeBucket::Mid);
        assert_eq!(buckets.bucket_for(Some(200)), SizeBucket::Large);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
advancement_threshold = 2.5

[weights]
strategy = 0.5
finance = 0.5
"#,
        )
        .unwrap();

        assert_eq!(config.advancement_threshold, 2.5);
        assert_eq!(config.weights.len(), 2);
        assert_eq!(config.weight(DimensionKey::Tech), None);
        assert_eq!(config.dimensions.len(), 6);
        assert_eq!(config.thresholds, RankingThresholds::default());
    }

    #[test]
    fn benchmark_falls_back_to_unknown() {
        let mut config = EngineConfig::default();
        config.benchmarks.shift_remove(&SizeBucket::Large);
        let row = config.benchmark_for(SizeBucket::Large).unwrap();
        assert_eq!(row.get(&DimensionKey::Strategy), Some(&2.8));
    }

    #[test]
    fn tier_label() {
        assert_eq!(MaturityTier::Ordered.label(), "Level 3 – Ordered");
    }
}
