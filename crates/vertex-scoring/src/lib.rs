//! Vertex Scoring
//!
//! Turns an answer set into numbers.
//!
//! # Core Concepts
//!
//! - [`score`]: per-dimension levels and the weighted global level for the
//!   answers to an active question set
//! - [`ScoreSnapshot`]: the derived result, never mutated in place
//! - [`collect_signals`]: multiset of the qualitative tags across all answers
//! - [`can_advance`]: the hard advancement gate
//!
//! # Example
//!
//! ```rust
//! use vertex_catalog::{Catalog, QuestionSet};
//! use vertex_model::AnswerStore;
//! use vertex_scoring::score;
//!
//! let catalog = Catalog::builtin();
//! let snapshot = score(&catalog, &AnswerStore::new(), &QuestionSet::all(&catalog));
//! assert_eq!(snapshot.global, 1.0);
//! assert!(!snapshot.can_advance);
//! ```

#![warn(missing_docs)]

mod aggregate;
mod gate;
mod signals;
mod snapshot;

// Re-exports
pub use aggregate::{dimension_level, global_level, score};
pub use gate::can_advance;
pub use signals::{collect_signals, SignalCounts};
pub use snapshot::ScoreSnapshot;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
