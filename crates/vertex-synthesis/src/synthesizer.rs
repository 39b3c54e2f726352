//! Diagnostic synthesizer
//!
//! Deterministic selection and ranking over a score snapshot:
//! - Ranking is a stable sort on the unrounded levels, so ties keep
//!   declaration order and no rank is ever duplicated
//! - Every list is deduplicated by text and capped by [`ReportLimits`]
//! - Nothing here can fail; missing answers only remove optional entries
//!
//! [`ReportLimits`]: vertex_catalog::ReportLimits

use crate::market::{competitive_context, size_info};
use crate::report::{
    BenchmarkRow, BenchmarkStatus, CompetitiveContext, DimensionReading, FocusArea, Gap,
    GapPriority, KpiSet, Narrative, PainPoint, PhaseTwo, PhaseVerdict, PhasedPlan, QuickWin,
    Report, SizeInfo, Swot, SwotEntry,
};
use crate::templates::{self, LevelRule, QuickWinTemplate};
use std::collections::HashSet;
use vertex_catalog::{Catalog, EngineConfig, SizeBucket};
use vertex_model::{AnswerStore, CompanyProfile, DimensionKey, QuestionId, MIN_LEVEL};
use vertex_scoring::{collect_signals, ScoreSnapshot, SignalCounts};

/// Score used for a phrase binding that was never answered
const DEFAULT_PHRASE_SCORE: u8 = 2;

/// Which end of the score range evidence is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Extreme {
    Highest,
    Lowest,
}

/// Builds a [`Report`] from one frozen view of the answers
///
/// The answers must already be restricted to the question set the snapshot
/// was computed from; the synthesizer reads them once and never mutates them.
#[derive(Debug)]
pub struct Synthesizer<'a> {
    catalog: &'a Catalog,
    snapshot: &'a ScoreSnapshot,
    answers: &'a AnswerStore,
    profile: &'a CompanyProfile,
    signals: SignalCounts,
    competitive: CompetitiveContext,
}

impl<'a> Synthesizer<'a> {
    /// Create synthesizer
    #[must_use]
    pub fn new(
        catalog: &'a Catalog,
        snapshot: &'a ScoreSnapshot,
        answers: &'a AnswerStore,
        profile: &'a CompanyProfile,
    ) -> Self {
        Self {
            catalog,
            snapshot,
            answers,
            profile,
            signals: collect_signals(answers),
            competitive: competitive_context(profile),
        }
    }

    #[inline]
    fn config(&self) -> &'a EngineConfig {
        self.catalog.config()
    }

    fn name(&self, key: DimensionKey) -> String {
        self.config().dimension_name(key).to_string()
    }

    /// Assemble the full report
    #[must_use]
    pub fn build(&self) -> Report {
        let size = self.size();
        let report = Report {
            company: self.profile.company_name.clone(),
            global_level: self.snapshot.global,
            can_advance: self.snapshot.can_advance,
            narrative: self.narrative(),
            dimensions: self.readings(),
            not_assessed: self.snapshot.not_assessed(),
            pain_points: self.pain_points(),
            swot: self.swot(),
            gaps: self.gaps(),
            root_causes: self.root_causes(),
            plan: self.plan(),
            kpis: self.kpis(),
            benchmark: self.benchmark(size.bucket),
            quick_wins: self.quick_wins(size.bucket),
            size,
            competitive: self.competitive.clone(),
            phase_two: self.phase_two(),
            signals: self.signals.clone(),
        };

        tracing::info!(
            global = report.global_level,
            can_advance = report.can_advance,
            tier = %report.narrative.tier,
            not_assessed = report.not_assessed.len(),
            "Synthesized report"
        );
        report
    }

    /// Tier cover and interpolated summary
    #[must_use]
    pub fn narrative(&self) -> Narrative {
        let config = self.config();
        let tier = config.tier_for(self.snapshot.global);
        let (headline, intro) = templates::tier_cover(tier);

        let bindings = &config.bindings;
        let style = templates::decision_style(self.bound_score(bindings.decision_style.as_ref()));
        let dependency = templates::dependency(self.bound_score(bindings.dependency.as_ref()));
        let balance = match (self.snapshot.best(), self.snapshot.worst()) {
            (Some(best), Some(worst)) if best != worst => format!(
                "There is progress in {}, while {} limits sustainable growth.",
                self.name(best),
                self.name(worst)
            ),
            _ => templates::BALANCED_PROGRESS.to_string(),
        };

        let summary = format!(
            "Today your company sits at maturity {}. Main decisions are made {style}, and operations depend {dependency}. {balance}",
            tier.label()
        );

        Narrative {
            tier,
            tier_label: tier.label(),
            color: tier.color().to_string(),
            headline: headline.to_string(),
            intro: intro.to_string(),
            summary,
        }
    }

    fn bound_score(&self, binding: Option<&QuestionId>) -> u8 {
        binding
            .and_then(|id| self.answers.score(id))
            .unwrap_or(DEFAULT_PHRASE_SCORE)
    }

    /// One reading per declared dimension
    #[must_use]
    pub fn readings(&self) -> Vec<DimensionReading> {
        let config = self.config();
        self.snapshot
            .levels
            .iter()
            .map(|(&key, &level)| {
                let tier = config.tier_for(level);
                DimensionReading {
                    dimension: key,
                    name: self.name(key),
                    level,
                    tier,
                    color: tier.color().to_string(),
                    reading: templates::dimension(key).readings[reading_index(level)].to_string(),
                }
            })
            .collect()
    }

    /// Lowest dimensions as pain points
    #[must_use]
    pub fn pain_points(&self) -> Vec<PainPoint> {
        let config = self.config();
        self.snapshot
            .ranked_ascending()
            .into_iter()
            .take(config.limits.pain_points)
            .enumerate()
            .map(|(i, (key, level))| {
                let t = templates::dimension(key);
                let risk = if level < config.thresholds.pain_severity {
                    templates::PAIN_FRAGILITY
                } else {
                    templates::PAIN_LIMITS_GROWTH
                };
                PainPoint {
                    rank: i + 1,
                    dimension: key,
                    name: self.name(key),
                    title: t.pain_title.to_string(),
                    cause: format!("This happens because {}.", t.pain_cause),
                    risk: risk.to_string(),
                }
            })
            .collect()
    }

    /// Strengths, weaknesses, opportunities and threats
    #[must_use]
    pub fn swot(&self) -> Swot {
        Swot {
            strengths: self.strengths(),
            weaknesses: self.weaknesses(),
            opportunities: self.opportunities(),
            threats: self.threats(),
        }
    }

    fn strengths(&self) -> Vec<SwotEntry> {
        let config = self.config();
        let bindings = &config.bindings;
        let pick = self.enriched_pick(
            bindings.strength_pick.as_ref(),
            bindings.strength_reason.as_ref(),
            "because",
        );
        let dimensions = self
            .snapshot
            .ranked_descending()
            .into_iter()
            .filter(|(_, level)| *level >= config.thresholds.strength)
            .take(config.limits.swot_dimensions)
            .map(|(key, _)| SwotEntry {
                text: format!("Solid base in {}.", self.name(key)),
                dimension: Some(key),
                evidence: self.evidence(key, Extreme::Highest),
            });

        let entries: Vec<SwotEntry> = pick.into_iter().chain(dimensions).collect();
        finish_quadrant(entries, templates::STRENGTHS_DEFAULT, config.limits.strengths)
    }

    fn weaknesses(&self) -> Vec<SwotEntry> {
        let config = self.config();
        let bindings = &config.bindings;
        let pick = self.enriched_pick(
            bindings.weakness_pick.as_ref(),
            bindings.weakness_impact.as_ref(),
            "impact",
        );
        let dimensions = self
            .snapshot
            .ranked_ascending()
            .into_iter()
            .filter(|(_, level)| *level <= config.thresholds.weakness)
            .take(config.limits.swot_dimensions)
            .map(|(key, _)| SwotEntry {
                text: format!("Relevant gap in {}.", self.name(key)),
                dimension: Some(key),
                evidence: self.evidence(key, Extreme::Lowest),
            });

        let entries: Vec<SwotEntry> = pick.into_iter().chain(dimensions).collect();
        finish_quadrant(entries, templates::WEAKNESSES_DEFAULT, config.limits.weaknesses)
    }

    fn opportunities(&self) -> Vec<SwotEntry> {
        let config = self.config();
        let pick = self.pick(config.bindings.opportunity_pick.as_ref());
        let market = self.competitive.opportunities.iter().take(2).cloned();
        let rules = self.triggered(templates::OPPORTUNITY_RULES);

        let entries = pick
            .into_iter()
            .chain(market)
            .chain(rules)
            .chain(std::iter::once(templates::OPPORTUNITY_MANAGEMENT_SYSTEM.to_string()))
            .map(SwotEntry::plain)
            .collect();
        dedup_capped(entries, config.limits.opportunities)
    }

    fn threats(&self) -> Vec<SwotEntry> {
        let config = self.config();
        let pick = self.pick(config.bindings.threat_pick.as_ref());
        let market = self.competitive.threats.iter().take(1).cloned();
        let rules = self.triggered(templates::THREAT_RULES);

        let entries = pick
            .into_iter()
            .chain(market)
            .chain(rules)
            .chain(std::iter::once(templates::THREAT_GROWTH_WITHOUT_CONTROL.to_string()))
            .map(SwotEntry::plain)
            .collect();
        dedup_capped(entries, config.limits.threats)
    }

    fn pick(&self, binding: Option<&QuestionId>) -> Option<String> {
        binding
            .and_then(|id| self.answers.label(id))
            .map(str::to_string)
    }

    /// Picked label, annotated with the free-text follow-up when present
    fn enriched_pick(
        &self,
        pick: Option<&QuestionId>,
        follow_up: Option<&QuestionId>,
        prefix: &str,
    ) -> Option<SwotEntry> {
        let label = self.pick(pick)?;
        let text = match follow_up.and_then(|id| self.answers.text(id)) {
            Some(note) => format!("{label} ({prefix}: {note})"),
            None => label,
        };
        Some(SwotEntry::plain(text))
    }

    fn triggered(&self, rules: &'static [LevelRule]) -> impl Iterator<Item = String> + '_ {
        rules
            .iter()
            .filter(|rule| {
                rule.below.iter().all(|(k, v)| self.snapshot.level(*k) < *v)
                    && rule.at_least.iter().all(|(k, v)| self.snapshot.level(*k) >= *v)
            })
            .map(|rule| rule.text.to_string())
    }

    /// Verbatim labels of the most extreme answers in a dimension
    ///
    /// Equal scores keep catalog order.
    fn evidence(&self, key: DimensionKey, extreme: Extreme) -> Vec<String> {
        let mut scored: Vec<(u8, &str)> = self
            .catalog
            .questions_in(key)
            .filter_map(|q| {
                let answer = self.answers.get(&q.id)?;
                Some((answer.score()?, answer.label()?))
            })
            .collect();
        match extreme {
            Extreme::Highest => scored.sort_by(|a, b| b.0.cmp(&a.0)),
            Extreme::Lowest => scored.sort_by(|a, b| a.0.cmp(&b.0)),
        }
        scored
            .into_iter()
            .take(self.config().limits.evidence_per_entry)
            .map(|(_, label)| label.to_string())
            .collect()
    }

    /// Remediation order with rank-keyed rationale
    #[must_use]
    pub fn gaps(&self) -> Vec<Gap> {
        self.snapshot
            .ranked_ascending()
            .into_iter()
            .take(self.config().limits.gaps)
            .enumerate()
            .map(|(i, (key, _))| {
                let rank = i + 1;
                Gap {
                    rank,
                    priority: GapPriority::from_rank(rank),
                    dimension: key,
                    name: self.name(key),
                    rationale: templates::gap_rationale(rank).to_string(),
                }
            })
            .collect()
    }

    /// Signal hypotheses first, then those of the lowest dimensions
    #[must_use]
    pub fn root_causes(&self) -> Vec<String> {
        let limits = &self.config().limits;
        let from_signals = templates::SIGNAL_HYPOTHESES
            .iter()
            .filter(|(signal, _)| self.signals.contains(signal))
            .map(|(_, text)| *text);
        let from_levels = self
            .snapshot
            .ranked_ascending()
            .into_iter()
            .take(limits.root_cause_dimensions)
            .flat_map(|(key, _)| templates::dimension(key).root_causes.iter().copied());

        let mut seen = HashSet::new();
        from_signals
            .chain(from_levels)
            .filter(|text| seen.insert(*text))
            .take(limits.root_causes)
            .map(str::to_string)
            .collect()
    }

    /// 30/60/90-day plan around the two lowest dimensions
    #[must_use]
    pub fn plan(&self) -> PhasedPlan {
        let ranked = self.snapshot.ranked_ascending();
        let (primary_key, primary_level) = ranked
            .first()
            .copied()
            .unwrap_or((DimensionKey::ALL[0], MIN_LEVEL));
        let secondary_key = ranked.get(1).map(|(k, _)| *k);

        let primary = &templates::dimension(primary_key).plan;
        let secondary = secondary_key.map(|k| &templates::dimension(k).plan);

        let mut days_30 = vec![primary.quick_win.to_string()];
        if primary_level < self.config().advancement_threshold {
            days_30.extend(primary.urgent.iter().map(|s| (*s).to_string()));
        }
        days_30.extend(primary.actions.iter().take(1).map(|s| (*s).to_string()));

        let mut days_60: Vec<String> = primary.actions.iter().skip(1).take(1).map(|s| (*s).to_string()).collect();
        let mut days_90: Vec<String> = primary.actions.iter().skip(2).map(|s| (*s).to_string()).collect();
        if let Some(second) = secondary {
            days_60.push(second.quick_win.to_string());
            days_60.extend(second.actions.iter().take(1).map(|s| (*s).to_string()));
            days_90.extend(second.actions.iter().skip(1).map(|s| (*s).to_string()));
        }
        days_90.push(templates::PLAN_CONSOLIDATION.to_string());

        PhasedPlan {
            primary: self.focus(primary_key),
            secondary: secondary_key.map(|k| self.focus(k)),
            days_30,
            days_60,
            days_90,
        }
    }

    fn focus(&self, key: DimensionKey) -> FocusArea {
        FocusArea {
            dimension: key,
            name: self.name(key),
            goal: templates::dimension(key).plan.goal.to_string(),
        }
    }

    /// KPI checklist for every declared dimension
    #[must_use]
    pub fn kpis(&self) -> Vec<KpiSet> {
        self.config()
            .dimension_keys()
            .map(|key| KpiSet {
                dimension: key,
                name: self.name(key),
                kpis: templates::dimension(key).kpis.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect()
    }

    /// Size bucket presentation
    #[must_use]
    pub fn size(&self) -> SizeInfo {
        size_info(&self.config().size_buckets, self.profile)
    }

    /// Comparison against the reference row of the bucket
    ///
    /// Dimensions without a reference value are left out.
    #[must_use]
    pub fn benchmark(&self, bucket: SizeBucket) -> Vec<BenchmarkRow> {
        let config = self.config();
        let Some(row) = config.benchmark_for(bucket) else {
            tracing::debug!(%bucket, "No benchmark row for size bucket");
            return Vec::new();
        };

        self.snapshot
            .levels
            .iter()
            .filter_map(|(&key, &level)| {
                let reference = *row.get(&key)?;
                let gap = level - reference;
                Some(BenchmarkRow {
                    dimension: key,
                    name: self.name(key),
                    level,
                    reference,
                    gap,
                    status: BenchmarkStatus::classify(gap, config.thresholds.benchmark_margin),
                })
            })
            .collect()
    }

    /// First moves: management base, the two lowest dimensions, size, market
    #[must_use]
    pub fn quick_wins(&self, bucket: SizeBucket) -> Vec<QuickWin> {
        let lowest: Vec<DimensionKey> = self
            .snapshot
            .ranked_ascending()
            .into_iter()
            .take(2)
            .map(|(k, _)| k)
            .collect();

        let mut wins = vec![card(&templates::MANAGEMENT_QUICK_WIN)];
        wins.extend(
            templates::QUICK_WIN_ORDER
                .iter()
                .filter(|k| lowest.contains(k))
                .map(|k| card(&templates::dimension(*k).quick_win)),
        );
        match bucket {
            SizeBucket::Micro => wins.push(card(&templates::OWNER_DEPENDENCY_QUICK_WIN)),
            SizeBucket::Mid | SizeBucket::Large => {
                wins.push(card(&templates::INDICATOR_GOVERNANCE_QUICK_WIN));
            }
            SizeBucket::Small | SizeBucket::Unknown => {}
        }
        wins.push(QuickWin {
            title: templates::COMPETITIVE_MOVE_TITLE.to_string(),
            description: self
                .competitive
                .opportunities
                .first()
                .cloned()
                .unwrap_or_else(|| templates::COMPETITIVE_MOVE_FALLBACK.to_string()),
            tag: templates::COMPETITIVE_MOVE_TAG.to_string(),
        });

        wins.truncate(self.config().limits.quick_wins);
        wins
    }

    /// Ready-to-advance or stabilize-first framing
    #[must_use]
    pub fn phase_two(&self) -> PhaseTwo {
        if self.snapshot.can_advance {
            return PhaseTwo {
                verdict: PhaseVerdict::Advance,
                title: templates::PHASE_TWO_READY_TITLE.to_string(),
                message: templates::PHASE_TWO_READY_MESSAGE.to_string(),
                next_steps: templates::PHASE_TWO_READY_STEPS.iter().map(|s| (*s).to_string()).collect(),
            };
        }

        let threshold = self.config().advancement_threshold;
        let blocking: Vec<String> = self
            .snapshot
            .levels
            .iter()
            .filter(|(_, level)| **level < threshold)
            .map(|(key, _)| self.name(*key))
            .collect();

        let mut next_steps = Vec::with_capacity(templates::PHASE_TWO_STABILIZE_STEPS.len() + 1);
        if !blocking.is_empty() {
            next_steps.push(format!(
                "Strengthen {} to at least level {threshold:.1}.",
                blocking.join(", ")
            ));
        }
        next_steps.extend(templates::PHASE_TWO_STABILIZE_STEPS.iter().map(|s| (*s).to_string()));

        PhaseTwo {
            verdict: PhaseVerdict::Stabilize,
            title: templates::PHASE_TWO_STABILIZE_TITLE.to_string(),
            message: templates::PHASE_TWO_STABILIZE_MESSAGE.to_string(),
            next_steps,
        }
    }
}

/// Index into a five-entry reading table for a level
#[inline]
fn reading_index(level: f64) -> usize {
    level.round().clamp(1.0, 5.0) as usize - 1
}

fn card(t: &QuickWinTemplate) -> QuickWin {
    QuickWin {
        title: t.title.to_string(),
        description: t.description.to_string(),
        tag: t.tag.to_string(),
    }
}

fn dedup_capped(entries: Vec<SwotEntry>, cap: usize) -> Vec<SwotEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|e| seen.insert(e.text.clone()))
        .take(cap)
        .collect()
}

fn finish_quadrant(entries: Vec<SwotEntry>, fallback: &str, cap: usize) -> Vec<SwotEntry> {
    if entries.is_empty() {
        return vec![SwotEntry::plain(fallback)];
    }
    dedup_capped(entries, cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vertex_catalog::QuestionSet;
    use vertex_scoring::score;
    use vertex_test_utils::{answers_with_dimension_scores, pick, write};

    fn snapshot_of(catalog: &Catalog, answers: &AnswerStore) -> ScoreSnapshot {
        score(catalog, answers, &QuestionSet::visible(catalog, answers))
    }

    #[test]
    fn reading_index_rounds_and_clamps() {
        assert_eq!(reading_index(1.0), 0);
        assert_eq!(reading_index(1.49), 0);
        assert_eq!(reading_index(2.5), 2);
        assert_eq!(reading_index(5.0), 4);
    }

    #[test]
    fn narrative_names_best_and_worst_unless_tied() {
        let catalog = Catalog::builtin();
        let profile = CompanyProfile::new();
        let mut table: Vec<(DimensionKey, u8)> = DimensionKey::ALL.into_iter().map(|k| (k, 3)).collect();
        table[2].1 = 5;
        table[4].1 = 1;
        let answers = answers_with_dimension_scores(&catalog, &table);
        let snap = snapshot_of(&catalog, &answers);
        let summary = Synthesizer::new(&catalog, &snap, &answers, &profile).narrative().summary;
        assert!(summary.ends_with("There is progress in Finance, while Technology & Data limits sustainable growth."));

        let tied = vertex_test_utils::answers_all(&catalog, 3);
        let snap = snapshot_of(&catalog, &tied);
        let summary = Synthesizer::new(&catalog, &snap, &tied, &profile).narrative().summary;
        assert!(summary.ends_with(templates::BALANCED_PROGRESS));
        assert!(!summary.contains("while"));
    }

    #[test]
    fn strength_pick_carries_reason() {
        let catalog = Catalog::builtin();
        let mut answers = answers_with_dimension_scores(&catalog, &[(DimensionKey::Finance, 5)]);
        vertex_test_utils::pick_first(&mut answers, &catalog, "S0");
        let label = answers.label("S0").unwrap().to_string();
        write(&mut answers, &catalog, "S1", "  long-standing clients  ");

        let snap = snapshot_of(&catalog, &answers);
        let profile = CompanyProfile::new();
        let swot = Synthesizer::new(&catalog, &snap, &answers, &profile).swot();

        assert_eq!(swot.strengths[0].text, format!("{label} (because: long-standing clients)"));
        assert_eq!(swot.strengths[1].dimension, Some(DimensionKey::Finance));
        assert_eq!(swot.strengths[1].text, "Solid base in Finance.");
        assert!(!swot.strengths[1].evidence.is_empty());
    }

    #[test]
    fn weakness_evidence_uses_lowest_labels() {
        let catalog = Catalog::builtin();
        let mut answers = answers_with_dimension_scores(&catalog, &[(DimensionKey::Process, 4)]);
        pick(&mut answers, &catalog, "P3", "We put out the fire and move on");

        let snap = snapshot_of(&catalog, &answers);
        let profile = CompanyProfile::new();
        let weak = Synthesizer::new(&catalog, &snap, &answers, &profile).weaknesses();

        assert!(weak.iter().all(|e| e.dimension != Some(DimensionKey::Process)));
        let strategy = weak.iter().find(|e| e.dimension == Some(DimensionKey::Strategy)).unwrap();
        assert!(strategy.evidence.is_empty());
    }

    #[test]
    fn signals_unlock_root_causes_first() {
        let catalog = Catalog::builtin();
        let mut answers = AnswerStore::new();
        pick(&mut answers, &catalog, "P1", "Everything falls apart");

        let snap = snapshot_of(&catalog, &answers);
        let profile = CompanyProfile::new();
        let causes = Synthesizer::new(&catalog, &snap, &answers, &profile).root_causes();

        assert_eq!(
            causes[0],
            "Operational know-how lives in a few people instead of in documented processes."
        );
        assert!(causes.len() <= 6);
        let unique: HashSet<&String> = causes.iter().collect();
        assert_eq!(unique.len(), causes.len());
    }

    #[test]
    fn quick_wins_follow_size_and_lowest_dimensions() {
        let catalog = Catalog::builtin();
        let answers = answers_with_dimension_scores(
            &catalog,
            &[
                (DimensionKey::Strategy, 4),
                (DimensionKey::Process, 2),
                (DimensionKey::Finance, 1),
                (DimensionKey::People, 4),
                (DimensionKey::Tech, 4),
                (DimensionKey::Risk, 4),
            ],
        );
        let snap = snapshot_of(&catalog, &answers);
        let profile = CompanyProfile::new().with_employees(4).with_industry("Retail");
        let wins = Synthesizer::new(&catalog, &snap, &answers, &profile).quick_wins(SizeBucket::Micro);

        let tags: Vec<&str> = wins.iter().map(|w| w.tag.as_str()).collect();
        assert_eq!(tags, vec!["Base", "Finance", "Processes", "Scale", "Competition"]);
        assert_eq!(
            wins[4].description,
            "Improve margin through product mix, pricing and discount control."
        );
    }

    #[test]
    fn urgent_items_only_below_threshold() {
        let catalog = Catalog::builtin();
        let low = AnswerStore::new();
        let snap = snapshot_of(&catalog, &low);
        let profile = CompanyProfile::new();
        let plan = Synthesizer::new(&catalog, &snap, &low, &profile).plan();

        assert_eq!(plan.primary.dimension, DimensionKey::Strategy);
        assert_eq!(plan.secondary.as_ref().map(|f| f.dimension), Some(DimensionKey::Process));
        assert!(plan
            .days_30
            .contains(&"Stop or postpone the initiatives that fall outside the 3 priorities.".to_string()));

        let high = vertex_test_utils::answers_all(&catalog, 3);
        let snap = snapshot_of(&catalog, &high);
        let plan = Synthesizer::new(&catalog, &snap, &high, &profile).plan();
        assert_eq!(plan.days_30.len(), 2);
        assert_eq!(plan.days_90.last().map(String::as_str), Some(templates::PLAN_CONSOLIDATION));
    }

    #[test]
    fn stabilize_names_blocking_dimensions() {
        let catalog = Catalog::builtin();
        let answers = answers_with_dimension_scores(
            &catalog,
            &[
                (DimensionKey::Strategy, 3),
                (DimensionKey::Process, 3),
                (DimensionKey::Finance, 3),
                (DimensionKey::People, 3),
                (DimensionKey::Tech, 1),
                (DimensionKey::Risk, 3),
            ],
        );
        let snap = snapshot_of(&catalog, &answers);
        let profile = CompanyProfile::new();
        let phase = Synthesizer::new(&catalog, &snap, &answers, &profile).phase_two();

        assert_eq!(phase.verdict, PhaseVerdict::Stabilize);
        assert_eq!(phase.next_steps[0], "Strengthen Technology & Data to at least level 2.0.");
    }
}
