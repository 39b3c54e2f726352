//! Report structure
//!
//! Read-only output of the synthesizer, fully recomputed on every request.

use serde::Serialize;
use vertex_catalog::{MaturityTier, SizeBucket};
use vertex_model::DimensionKey;
use vertex_scoring::SignalCounts;

/// Slack absorbing float error when a gap lands on the margin
const GAP_TOLERANCE: f64 = 1e-9;

/// Complete diagnostic report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Declared company name
    pub company: Option<String>,
    /// Weighted global level, unrounded
    pub global_level: f64,
    /// Advancement verdict
    pub can_advance: bool,
    /// Cover and summary
    pub narrative: Narrative,
    /// One reading per declared dimension, in declaration order
    pub dimensions: Vec<DimensionReading>,
    /// Dimensions without any contributing answer
    pub not_assessed: Vec<DimensionKey>,
    /// Lowest dimensions with their pain framing
    pub pain_points: Vec<PainPoint>,
    /// Strengths, weaknesses, opportunities, threats
    pub swot: Swot,
    /// Remediation order
    pub gaps: Vec<Gap>,
    /// Root-cause hypotheses
    pub root_causes: Vec<String>,
    /// 30/60/90-day plan
    pub plan: PhasedPlan,
    /// Reference KPIs for every dimension
    pub kpis: Vec<KpiSet>,
    /// Company size presentation
    pub size: SizeInfo,
    /// Comparison with the reference levels of the size bucket
    pub benchmark: Vec<BenchmarkRow>,
    /// Market framing for the declared industry
    pub competitive: CompetitiveContext,
    /// Short, concrete first moves
    pub quick_wins: Vec<QuickWin>,
    /// Next-phase framing
    pub phase_two: PhaseTwo,
    /// Signals found in the answers
    pub signals: SignalCounts,
}

impl Report {
    /// Display name of a dimension as used in this report
    #[must_use]
    pub fn dimension_name(&self, key: DimensionKey) -> &str {
        self.dimensions
            .iter()
            .find(|d| d.dimension == key)
            .map_or(key.as_str(), |d| d.name.as_str())
    }
}

/// Cover and summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Narrative {
    /// Tier of the global level
    pub tier: MaturityTier,
    /// "Level N – Name"
    pub tier_label: String,
    /// Presentation colour of the tier
    pub color: String,
    /// Tier headline
    pub headline: String,
    /// Tier introduction
    pub intro: String,
    /// Interpolated summary paragraph
    pub summary: String,
}

/// Reading of one dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionReading {
    /// Dimension
    pub dimension: DimensionKey,
    /// Display name
    pub name: String,
    /// Unrounded level
    pub level: f64,
    /// Tier of the level
    pub tier: MaturityTier,
    /// Presentation colour
    pub color: String,
    /// Reading selected by the rounded level
    pub reading: String,
}

/// Ranked pain point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PainPoint {
    /// 1-based rank
    pub rank: usize,
    /// Dimension
    pub dimension: DimensionKey,
    /// Dimension display name
    pub name: String,
    /// Pain title
    pub title: String,
    /// "This happens because …"
    pub cause: String,
    /// Severity wording
    pub risk: String,
}

/// SWOT entry with optional supporting evidence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwotEntry {
    /// Entry text
    pub text: String,
    /// Dimension behind the entry, if rule-derived from one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<DimensionKey>,
    /// Verbatim answer labels supporting the entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl SwotEntry {
    /// Entry without dimension or evidence
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            dimension: None,
            evidence: Vec::new(),
        }
    }
}

/// Four-quadrant summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Swot {
    /// Strengths
    pub strengths: Vec<SwotEntry>,
    /// Weaknesses
    pub weaknesses: Vec<SwotEntry>,
    /// Opportunities
    pub opportunities: Vec<SwotEntry>,
    /// Threats
    pub threats: Vec<SwotEntry>,
}

/// Priority of a gap, by rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapPriority {
    /// Rank 1
    Critical,
    /// Rank 2
    Important,
    /// Rank 3 and beyond
    CanWait,
}

impl GapPriority {
    /// Priority of a 1-based rank
    #[must_use]
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 | 1 => GapPriority::Critical,
            2 => GapPriority::Important,
            _ => GapPriority::CanWait,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            GapPriority::Critical => "Critical priority",
            GapPriority::Important => "Important priority",
            GapPriority::CanWait => "Can wait",
        }
    }
}

/// Remediation gap
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    /// 1-based rank
    pub rank: usize,
    /// Priority of the rank
    pub priority: GapPriority,
    /// Dimension
    pub dimension: DimensionKey,
    /// Dimension display name
    pub name: String,
    /// Rationale of the rank
    pub rationale: String,
}

/// Focus dimension of the plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusArea {
    /// Dimension
    pub dimension: DimensionKey,
    /// Display name
    pub name: String,
    /// Goal of the focus
    pub goal: String,
}

/// 30/60/90-day plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasedPlan {
    /// Lowest dimension
    pub primary: FocusArea,
    /// Second-lowest dimension
    pub secondary: Option<FocusArea>,
    /// First 30 days
    pub days_30: Vec<String>,
    /// Days 31 to 60
    pub days_60: Vec<String>,
    /// Days 61 to 90
    pub days_90: Vec<String>,
}

/// KPI checklist of one dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiSet {
    /// Dimension
    pub dimension: DimensionKey,
    /// Display name
    pub name: String,
    /// Suggested indicators
    pub kpis: Vec<String>,
}

/// Size bucket presentation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeInfo {
    /// Bucket
    pub bucket: SizeBucket,
    /// Display name with head-count range
    pub name: String,
    /// What is typical for the bucket
    pub hint: String,
}

/// Position relative to the reference level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenchmarkStatus {
    /// At least the margin above the reference
    Ahead,
    /// Within the margin
    OnPar,
    /// At least the margin below the reference
    Behind,
}

impl BenchmarkStatus {
    /// Status of `gap` given the margin; both bounds are inclusive
    #[must_use]
    pub fn classify(gap: f64, margin: f64) -> Self {
        if gap >= margin - GAP_TOLERANCE {
            BenchmarkStatus::Ahead
        } else if gap <= -margin + GAP_TOLERANCE {
            BenchmarkStatus::Behind
        } else {
            BenchmarkStatus::OnPar
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            BenchmarkStatus::Ahead => "ahead",
            BenchmarkStatus::OnPar => "on par",
            BenchmarkStatus::Behind => "behind",
        }
    }
}

/// Benchmark comparison of one dimension
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkRow {
    /// Dimension
    pub dimension: DimensionKey,
    /// Display name
    pub name: String,
    /// Own level
    pub level: f64,
    /// Reference level of the bucket
    pub reference: f64,
    /// Own level minus reference
    pub gap: f64,
    /// Classification of the gap
    pub status: BenchmarkStatus,
}

/// Competitive framing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompetitiveContext {
    /// One-line framing
    pub headline: String,
    /// Market dynamics
    pub dynamics: Vec<String>,
    /// Market opportunities
    pub opportunities: Vec<String>,
    /// Market threats
    pub threats: Vec<String>,
}

/// Quick-win card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickWin {
    /// Title with time box
    pub title: String,
    /// What to do
    pub description: String,
    /// Short category tag
    pub tag: String,
}

/// Next-phase verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseVerdict {
    /// Ready to advance
    Advance,
    /// Stabilize first
    Stabilize,
}

/// Next-phase framing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseTwo {
    /// Verdict
    pub verdict: PhaseVerdict,
    /// Title
    pub title: String,
    /// Message
    pub message: String,
    /// Next actions
    pub next_steps: Vec<String>,
}
