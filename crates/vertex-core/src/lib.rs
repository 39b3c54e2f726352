//! Vertex Core - Assessment session facade
//!
//! The inbound/outbound boundary of the diagnostic engine:
//! - Records choice and free-text answers with boundary validation
//! - Resolves visible questions and answer-echoing prompts
//! - Scores the live visible set, or the set frozen at finish
//! - Refuses to finish while visible required questions are unanswered
//! - Builds the report over the frozen set only
//!
//! # Example
//!
//! ```rust
//! use vertex_core::prelude::*;
//!
//! let mut session = Session::builtin();
//! session.record_choice("E1", "React to whatever is urgent that day")?;
//! assert!(session.report().is_none());
//!
//! let missing = session.missing_required();
//! assert!(!missing.is_empty());
//! assert!(session.finish().is_err());
//! # Ok::<(), SessionError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod session;
mod types;

// Re-exports
pub use error::{SessionError, SessionResult};
pub use session::Session;
pub use types::{Progress, SessionId};

pub use vertex_catalog::{Catalog, EngineConfig, QuestionSet};
pub use vertex_model::{CompanyProfile, DimensionKey, Question, QuestionId};
pub use vertex_scoring::ScoreSnapshot;
pub use vertex_synthesis::{render_text, Report};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving an assessment session
    pub use crate::{
        Catalog, CompanyProfile, DimensionKey, Progress, Report, ScoreSnapshot, Session,
        SessionError, SessionId,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
