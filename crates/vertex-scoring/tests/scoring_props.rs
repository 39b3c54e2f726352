use indexmap::IndexMap;
use proptest::prelude::*;
use vertex_catalog::{Catalog, QuestionSet};
use vertex_model::{Answer, AnswerStore, DimensionKey, Question, MAX_LEVEL, MIN_LEVEL};
use vertex_scoring::{can_advance, collect_signals, score};

fn scored_questions(catalog: &Catalog) -> Vec<&Question> {
    catalog
        .questions()
        .iter()
        .filter(|q| q.scored_dimension().is_some())
        .collect()
}

/// `picks[i]`: `None` leaves question i unanswered, `Some(n)` picks option n % len
fn build_answers(catalog: &Catalog, picks: &[Option<usize>]) -> AnswerStore {
    let mut answers = AnswerStore::new();
    for (question, pick) in scored_questions(catalog).into_iter().zip(picks) {
        if let Some(n) = pick {
            let option = &question.options[n % question.options.len()];
            answers.record(question.id.clone(), Answer::from_option(question, option));
        }
    }
    answers
}

fn active_subset(catalog: &Catalog, mask: &[bool]) -> QuestionSet {
    catalog
        .questions()
        .iter()
        .zip(mask.iter().cycle())
        .filter(|(_, keep)| **keep)
        .map(|(q, _)| q.id.clone())
        .collect()
}

fn picks() -> impl Strategy<Value = Vec<Option<usize>>> {
    proptest::collection::vec(proptest::option::of(0usize..5), 18)
}

fn in_range(v: f64) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&v)
}

#[test]
fn test_unvisited_dimension_reports_one() {
    let catalog = Catalog::builtin();
    let answers = vertex_test_utils::answers_with_dimension_scores(
        &catalog,
        &[
            (DimensionKey::Strategy, 4),
            (DimensionKey::Process, 4),
            (DimensionKey::Finance, 4),
            (DimensionKey::People, 4),
            (DimensionKey::Tech, 4),
        ],
    );
    let snap = score(&catalog, &answers, &QuestionSet::visible(&catalog, &answers));

    assert_eq!(snap.level(DimensionKey::Risk), 1.0);
    assert!(!snap.level(DimensionKey::Risk).is_nan());
    assert_eq!(snap.not_assessed(), vec![DimensionKey::Risk]);
    assert!(!snap.can_advance);
}

proptest! {
    #[test]
    fn prop_levels_within_bounds(picks in picks(), mask in proptest::collection::vec(any::<bool>(), 1..30)) {
        let catalog = Catalog::builtin();
        let answers = build_answers(&catalog, &picks);
        let snap = score(&catalog, &answers, &active_subset(&catalog, &mask));

        prop_assert_eq!(snap.levels.len(), 6);
        prop_assert!(snap.levels.values().all(|l| in_range(*l)));
        prop_assert!(in_range(snap.global));
    }

    #[test]
    fn prop_global_is_weighted_mean(picks in picks()) {
        let catalog = Catalog::builtin();
        let answers = build_answers(&catalog, &picks);
        let snap = score(&catalog, &answers, &QuestionSet::visible(&catalog, &answers));

        let config = catalog.config();
        let (weighted, total) = snap
            .levels
            .iter()
            .filter_map(|(k, l)| config.weight(*k).map(|w| (l * w, w)))
            .fold((0.0, 0.0), |(a, t), (lw, w)| (a + lw, t + w));
        prop_assert!((snap.global - weighted / total).abs() < 1e-9);
    }

    #[test]
    fn prop_snapshot_is_idempotent(picks in picks()) {
        let catalog = Catalog::builtin();
        let answers = build_answers(&catalog, &picks);
        let active = QuestionSet::visible(&catalog, &answers);

        let first = score(&catalog, &answers, &active);
        let second = score(&catalog, &answers, &active);
        prop_assert_eq!(first.global.to_bits(), second.global.to_bits());
        prop_assert_eq!(first, second);
        prop_assert_eq!(collect_signals(&answers), collect_signals(&answers));
    }

    #[test]
    fn prop_raising_a_score_never_lowers_levels(
        picks in picks(),
        target in 0usize..18,
        low in 0usize..5,
        bump in 1usize..5,
    ) {
        let catalog = Catalog::builtin();
        let question = scored_questions(&catalog)[target];
        let high = (low + bump).min(4);
        prop_assume!(question.options[low].score < question.options[high].score);

        let active = QuestionSet::all(&catalog);
        let mut before = build_answers(&catalog, &picks);
        before.record(question.id.clone(), Answer::from_option(question, &question.options[low]));
        let mut after = before.clone();
        after.record(question.id.clone(), Answer::from_option(question, &question.options[high]));

        let a = score(&catalog, &before, &active);
        let b = score(&catalog, &after, &active);
        let key = question.section.dimension().unwrap();
        prop_assert!(b.level(key) >= a.level(key));
        prop_assert!(b.global >= a.global - 1e-12);
    }

    #[test]
    fn prop_gate_matches_minimum(values in proptest::collection::vec(1.0f64..=5.0, 6), threshold in 1.0f64..=5.0) {
        let levels: IndexMap<DimensionKey, f64> = DimensionKey::ALL.into_iter().zip(values.iter().copied()).collect();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(can_advance(&levels, threshold), min >= threshold);
    }

    #[test]
    fn prop_gate_boundary(threshold in 1.0f64..=5.0, slot in 0usize..6) {
        let mut values = [5.0; 6];
        values[slot] = threshold;
        let at: IndexMap<DimensionKey, f64> = DimensionKey::ALL.into_iter().zip(values).collect();
        prop_assert!(can_advance(&at, threshold));

        values[slot] = threshold - 1e-9;
        let below: IndexMap<DimensionKey, f64> = DimensionKey::ALL.into_iter().zip(values).collect();
        prop_assert!(!can_advance(&below, threshold));
    }
}
