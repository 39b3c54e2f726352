//! Vertex Model
//!
//! Plain data types shared by every layer of the diagnostic engine.
//!
//! # Core Concepts
//!
//! - [`DimensionKey`] / [`Dimension`]: weighted axes of business maturity
//! - [`Question`]: a catalog entry (scored choice or free text) with an
//!   optional visibility [`Predicate`] and a possibly answer-dependent [`Prompt`]
//! - [`Answer`] / [`AnswerStore`]: what the respondent recorded, one per question
//! - [`CompanyProfile`]: free-form company facts used for benchmarking
//!
//! # Example
//!
//! ```rust
//! use vertex_model::{Answer, AnswerStore, Predicate, QuestionId, Section, DimensionKey};
//!
//! let mut answers = AnswerStore::new();
//! let gate = Predicate::score_at_least("E1", 3);
//! assert!(!gate.evaluate(&answers));
//!
//! answers.record(
//!     QuestionId::from("E1"),
//!     Answer::choice(4, "Goals drive decisions", Section::Dimension(DimensionKey::Strategy), vec![]),
//! );
//! assert!(gate.evaluate(&answers));
//! ```

#![warn(missing_docs)]

mod answer;
mod dimension;
mod predicate;
mod profile;
mod question;

// Re-exports
pub use answer::{Answer, AnswerStore};
pub use dimension::{Dimension, DimensionKey, ParseDimensionError, MAX_LEVEL, MAX_SCORE, MIN_LEVEL, MIN_SCORE};
pub use predicate::Predicate;
pub use profile::CompanyProfile;
pub use question::{ChoiceOption, Prompt, Question, QuestionId, QuestionKind, Section};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the questionnaire model
    pub use crate::{
        Answer, AnswerStore, ChoiceOption, CompanyProfile, Dimension, DimensionKey, Predicate,
        Prompt, Question, QuestionId, QuestionKind, Section,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
