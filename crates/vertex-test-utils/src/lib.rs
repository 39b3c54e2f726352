//! Testing utilities for the Vertex workspace
//!
//! Shared fixtures for building answer sets and level tables.

#![allow(missing_docs)]

use indexmap::IndexMap;
use vertex_catalog::Catalog;
use vertex_model::{Answer, AnswerStore, ChoiceOption, DimensionKey, Question, QuestionKind};

/// Option of `question` whose score is closest to `score`, first on ties
pub fn option_near(question: &Question, score: u8) -> Option<&ChoiceOption> {
    question
        .options
        .iter()
        .min_by_key(|o| o.score.abs_diff(score))
}

/// Answer every scored question of every dimension with the option closest to
/// the score given for that dimension. Context questions are left unanswered.
pub fn answers_with_dimension_scores(catalog: &Catalog, scores: &[(DimensionKey, u8)]) -> AnswerStore {
    let mut answers = AnswerStore::new();
    for &(key, score) in scores {
        for question in catalog.questions_in(key) {
            if let Some(option) = option_near(question, score) {
                answers.record(question.id.clone(), Answer::from_option(question, option));
            }
        }
    }
    answers
}

/// Every dimension answered at `score`
pub fn answers_all(catalog: &Catalog, score: u8) -> AnswerStore {
    let scores: Vec<(DimensionKey, u8)> = catalog
        .config()
        .dimension_keys()
        .map(|k| (k, score))
        .collect();
    answers_with_dimension_scores(catalog, &scores)
}

/// Record the option labelled `label` on choice question `id`
///
/// Panics when the question or option does not exist.
pub fn pick(answers: &mut AnswerStore, catalog: &Catalog, id: &str, label: &str) {
    let question = catalog.question(id).unwrap_or_else(|| panic!("no question {id}"));
    let option = question
        .find_option(label)
        .unwrap_or_else(|| panic!("no option '{label}' on {id}"));
    answers.record(question.id.clone(), Answer::from_option(question, option));
}

/// Record the first option of choice question `id`
pub fn pick_first(answers: &mut AnswerStore, catalog: &Catalog, id: &str) {
    let question = catalog.question(id).unwrap_or_else(|| panic!("no question {id}"));
    assert_eq!(question.kind, QuestionKind::ScoredChoice, "{id} is not a choice question");
    answers.record(question.id.clone(), Answer::from_option(question, &question.options[0]));
}

/// Record free text on question `id`
pub fn write(answers: &mut AnswerStore, catalog: &Catalog, id: &str, text: &str) {
    let question = catalog.question(id).unwrap_or_else(|| panic!("no question {id}"));
    answers.record(question.id.clone(), Answer::text_answer(text, question.section));
}

/// Level table in canonical dimension order
pub fn levels(values: [f64; 6]) -> IndexMap<DimensionKey, f64> {
    DimensionKey::ALL.into_iter().zip(values).collect()
}

/// Approximate float equality
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
