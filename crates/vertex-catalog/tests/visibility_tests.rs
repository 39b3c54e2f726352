use proptest::prelude::*;
use vertex_catalog::{visible, Catalog, CatalogValidator, EngineConfig, QuestionSet};
use vertex_model::{Answer, AnswerStore, Question, QuestionKind};

/// Record the option at `picks[i] % options` for every scored question, in
/// catalog order, whether visible or not.
fn answer_everything(catalog: &Catalog, picks: &[usize]) -> AnswerStore {
    let mut answers = AnswerStore::new();
    for (question, pick) in catalog
        .questions()
        .iter()
        .filter(|q| q.kind == QuestionKind::ScoredChoice)
        .zip(picks.iter().cycle())
    {
        let option = &question.options[pick % question.options.len()];
        answers.record(question.id.clone(), Answer::from_option(question, option));
    }
    answers
}

fn ids(questions: &[&Question]) -> Vec<String> {
    questions.iter().map(|q| q.id.to_string()).collect()
}

#[test]
fn test_empty_answers_show_ungated_questions_only() {
    let catalog = Catalog::builtin();
    let shown = ids(&visible(&catalog, &AnswerStore::new()));
    assert_eq!(
        shown,
        vec!["E1", "E3", "P1", "P3", "F1", "F3", "R1", "R3", "T1", "T3", "G1", "G3", "S0", "W0", "O0", "T0"]
    );
}

#[test]
fn test_builtin_config_round_trips_through_toml() {
    let config = EngineConfig::default();
    let text = toml::to_string(&config).unwrap();
    let parsed = EngineConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_config_file_overrides_builtin_constants() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");
    std::fs::write(&path, "advancement_threshold = 3.0\n[limits]\nquick_wins = 4\n").unwrap();

    let config = EngineConfig::from_path(&path).unwrap();
    assert_eq!(config.advancement_threshold, 3.0);
    assert_eq!(config.limits.quick_wins, 4);
    assert_eq!(config.limits.root_causes, 6);

    let catalog = Catalog::builtin_with_config(config).unwrap();
    assert!(CatalogValidator::new()
        .validate(catalog.config(), catalog.questions())
        .is_ok());
}

proptest! {
    #[test]
    fn prop_visibility_is_deterministic(picks in proptest::collection::vec(0usize..5, 1..24)) {
        let catalog = Catalog::builtin();
        let answers = answer_everything(&catalog, &picks);

        let first = ids(&visible(&catalog, &answers));
        let second = ids(&visible(&catalog, &answers));
        prop_assert_eq!(&first, &second);

        let set: Vec<String> = QuestionSet::visible(&catalog, &answers)
            .iter()
            .map(|id| id.to_string())
            .collect();
        prop_assert_eq!(first, set);
    }

    #[test]
    fn prop_visible_is_an_ordered_subsequence(picks in proptest::collection::vec(0usize..5, 1..24)) {
        let catalog = Catalog::builtin();
        let answers = answer_everything(&catalog, &picks);

        let positions: Vec<usize> = visible(&catalog, &answers)
            .iter()
            .filter_map(|q| catalog.position(&q.id))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
