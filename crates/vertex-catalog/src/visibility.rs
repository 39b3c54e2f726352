//! Visibility resolution
//!
//! - [`visible`]: ordered subset of the catalog active under the current answers
//! - [`QuestionSet`]: ordered set of question ids, used both for the live
//!   active set and for the set frozen when a session finishes

use crate::catalog::Catalog;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use vertex_model::{AnswerStore, Question, QuestionId};

/// Questions visible under `answers`, in catalog order
///
/// Stateless: always reflects the current answers, so changing an earlier
/// answer can make later questions appear or disappear.
#[must_use]
pub fn visible<'a>(catalog: &'a Catalog, answers: &AnswerStore) -> Vec<&'a Question> {
    catalog
        .questions()
        .iter()
        .filter(|q| q.is_visible(answers))
        .collect()
}

/// Ordered set of question ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet(IndexSet<QuestionId>);

impl QuestionSet {
    /// Create empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the questions visible under `answers`
    #[must_use]
    pub fn visible(catalog: &Catalog, answers: &AnswerStore) -> Self {
        visible(catalog, answers).into_iter().map(|q| q.id.clone()).collect()
    }

    /// Every question of the catalog
    #[must_use]
    pub fn all(catalog: &Catalog) -> Self {
        catalog.questions().iter().map(|q| q.id.clone()).collect()
    }

    /// Whether `id` is in the set
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    /// Number of ids
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &QuestionId> {
        self.0.iter()
    }
}

impl FromIterator<QuestionId> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = QuestionId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a QuestionId;
    type IntoIter = indexmap::set::Iter<'a, QuestionId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
