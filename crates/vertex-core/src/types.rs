//! Session value types

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unique session identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Ulid);

impl SessionId {
    /// Generate new session ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answered vs visible question counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Visible questions carrying an answer
    pub answered: usize,
    /// Currently visible questions
    pub visible: usize,
}

impl Progress {
    /// Share answered in 0..=1, 0 when nothing is visible
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.visible == 0 {
            0.0
        } else {
            self.answered as f64 / self.visible as f64
        }
    }

    /// Whether every visible question is answered
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answered == self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
    }

    #[test]
    fn empty_progress_is_zero() {
        let p = Progress { answered: 0, visible: 0 };
        assert_eq!(p.ratio(), 0.0);
        assert!(p.is_complete());
        assert_eq!(Progress { answered: 1, visible: 4 }.ratio(), 0.25);
    }
}
