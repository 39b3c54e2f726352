//! Vertex Catalog
//!
//! Static inputs of the diagnostic engine.
//!
//! # Core Concepts
//!
//! - [`EngineConfig`]: every tunable constant (weights, thresholds, tier
//!   boundaries, benchmark tables, size buckets, list caps, report bindings)
//! - [`Catalog`]: ordered questions plus configuration, validated on construction
//! - [`CatalogValidator`]: the static authoring checks, including the rule that
//!   predicates only read questions declared earlier
//! - [`visible`] / [`QuestionSet`]: visibility resolution and frozen question sets
//!
//! # Example
//!
//! ```rust
//! use vertex_catalog::{visible, Catalog};
//! use vertex_model::AnswerStore;
//!
//! let catalog = Catalog::builtin();
//! let first = visible(&catalog, &AnswerStore::new());
//! assert_eq!(first[0].id.as_str(), "E1");
//! ```

#![warn(missing_docs)]

mod catalog;
mod config;
mod defaults;
mod error;
mod format;
mod validation;
mod visibility;

// Re-exports
pub use catalog::Catalog;
pub use config::{
    EngineConfig, MaturityTier, RankingThresholds, ReportBindings, ReportLimits, SizeBucket,
    SizeBuckets,
};
pub use defaults::default_questions;
pub use error::{CatalogError, ConfigError};
pub use format::{read_document, DocumentFormat};
pub use validation::CatalogValidator;
pub use visibility::{visible, QuestionSet};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog consumers
    pub use crate::{visible, Catalog, EngineConfig, MaturityTier, QuestionSet, SizeBucket};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
