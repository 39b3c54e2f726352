//! Error types for Vertex Core
//!
//! Only inbound calls can fail, and only on boundary validation:
//! - Unknown question or option
//! - Answer kind not matching the question kind
//! - Finishing with required questions unanswered
//!
//! Scoring and reporting never fail.

use vertex_model::{QuestionId, QuestionKind};

/// Session boundary error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Question id not in the catalog
    #[error("unknown question: {0}")]
    UnknownQuestion(QuestionId),

    /// Text for a choice question or a choice for a text question
    #[error("question {question} expects a {expected:?} answer")]
    KindMismatch {
        /// Question answered
        question: QuestionId,
        /// Kind the question accepts
        expected: QuestionKind,
    },

    /// Label not among the question's options
    #[error("question {question} has no option '{label}'")]
    UnknownOption {
        /// Question answered
        question: QuestionId,
        /// Label given
        label: String,
    },

    /// Visible required questions without an answer
    #[error("required questions unanswered: {}", join_ids(.0))]
    RequiredUnanswered(Vec<QuestionId>),
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter().map(QuestionId::as_str).collect::<Vec<_>>().join(", ")
}

/// Result alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_lists_ids() {
        let err = SessionError::RequiredUnanswered(vec![QuestionId::from("E1"), QuestionId::from("W0")]);
        assert_eq!(err.to_string(), "required questions unanswered: E1, W0");
    }
}
