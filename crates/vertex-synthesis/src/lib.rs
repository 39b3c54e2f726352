//! Vertex Synthesis
//!
//! Rule and template driven report generation. No inference, no search:
//! every artifact is a sort, a slice or a table lookup over the score
//! snapshot, the signal multiset, the free-text answers and the company
//! profile.
//!
//! # Core Concepts
//!
//! - [`Synthesizer`]: builds each report section from one frozen view
//! - [`Report`]: the read-only result, `Serialize` for JSON output
//! - [`render_text`]: plain-text document of a report
//!
//! # Example
//!
//! ```rust
//! use vertex_catalog::{Catalog, QuestionSet};
//! use vertex_model::{AnswerStore, CompanyProfile};
//! use vertex_synthesis::{synthesize, PhaseVerdict};
//!
//! let catalog = Catalog::builtin();
//! let answers = AnswerStore::new();
//! let active = QuestionSet::visible(&catalog, &answers);
//! let report = synthesize(&catalog, &answers, &active, &CompanyProfile::new());
//! assert_eq!(report.phase_two.verdict, PhaseVerdict::Stabilize);
//! assert_eq!(report.pain_points.len(), 3);
//! ```

#![warn(missing_docs)]

mod market;
mod render;
mod report;
mod synthesizer;
mod templates;

// Re-exports
pub use market::{competitive_context, size_info};
pub use render::render_text;
pub use report::{
    BenchmarkRow, BenchmarkStatus, CompetitiveContext, DimensionReading, FocusArea, Gap,
    GapPriority, KpiSet, Narrative, PainPoint, PhaseTwo, PhaseVerdict, PhasedPlan, QuickWin,
    Report, SizeInfo, Swot, SwotEntry,
};
pub use synthesizer::Synthesizer;

use vertex_catalog::{Catalog, QuestionSet};
use vertex_model::{AnswerStore, CompanyProfile};

/// Score the answers to `active` and build the report
///
/// Answers outside `active` are ignored for scoring, signals and evidence.
#[must_use]
pub fn synthesize(
    catalog: &Catalog,
    answers: &AnswerStore,
    active: &QuestionSet,
    profile: &CompanyProfile,
) -> Report {
    let answers = answers.filtered(|id| active.contains(id));
    let snapshot = vertex_scoring::score(catalog, &answers, active);
    Synthesizer::new(catalog, &snapshot, &answers, profile).build()
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
