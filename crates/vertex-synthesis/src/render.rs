//! Plain-text rendering of a [`Report`]

use crate::report::{Report, SwotEntry};
use std::fmt::{self, Display, Formatter, Write as _};

/// Render the report as a plain-text document
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    let title = report.company.as_deref().unwrap_or("Your company");
    let _ = writeln!(out, "{title}: 360 diagnostic");
    let _ = writeln!(
        out,
        "Global level {:.1} ({})\n",
        report.global_level, report.narrative.tier_label
    );
    let _ = writeln!(out, "{}\n", report.narrative.headline);
    let _ = writeln!(out, "{}\n", report.narrative.intro);
    let _ = writeln!(out, "{}\n", report.narrative.summary);

    section(&mut out, "Dimensions");
    for d in &report.dimensions {
        let _ = writeln!(out, "- {} {:.1} ({}): {}", d.name, d.level, d.tier.name(), d.reading);
    }
    if !report.not_assessed.is_empty() {
        let names: Vec<&str> = report
            .not_assessed
            .iter()
            .map(|k| report.dimension_name(*k))
            .collect();
        let _ = writeln!(out, "Not assessed (no answers): {}", names.join(", "));
    }
    out.push('\n');

    section(&mut out, "Main pain points");
    for p in &report.pain_points {
        let _ = writeln!(out, "{}. {} ({})", p.rank, p.title, p.name);
        let _ = writeln!(out, "   {} {}", p.cause, p.risk);
    }
    out.push('\n');

    section(&mut out, "SWOT");
    quadrant(&mut out, "Strengths", &report.swot.strengths);
    quadrant(&mut out, "Weaknesses", &report.swot.weaknesses);
    quadrant(&mut out, "Opportunities", &report.swot.opportunities);
    quadrant(&mut out, "Threats", &report.swot.threats);
    out.push('\n');

    section(&mut out, "Priority gaps");
    for g in &report.gaps {
        let _ = writeln!(out, "{}. {}: {}. {}", g.rank, g.priority.label(), g.name, g.rationale);
    }
    out.push('\n');

    section(&mut out, "Root-cause hypotheses");
    bullets(&mut out, &report.root_causes);
    out.push('\n');

    section(&mut out, "30/60/90-day plan");
    let plan = &report.plan;
    let _ = writeln!(out, "Primary focus: {} ({})", plan.primary.name, plan.primary.goal);
    if let Some(secondary) = &plan.secondary {
        let _ = writeln!(out, "Secondary focus: {} ({})", secondary.name, secondary.goal);
    }
    for (label, items) in [
        ("First 30 days", &plan.days_30),
        ("Days 31-60", &plan.days_60),
        ("Days 61-90", &plan.days_90),
    ] {
        let _ = writeln!(out, "{label}:");
        bullets(&mut out, items);
    }
    out.push('\n');

    section(&mut out, "Quick wins");
    for w in &report.quick_wins {
        let _ = writeln!(out, "- [{}] {}: {}", w.tag, w.title, w.description);
    }
    out.push('\n');

    section(&mut out, "Benchmark");
    let _ = writeln!(out, "Size: {}. {}", report.size.name, report.size.hint);
    for row in &report.benchmark {
        let _ = writeln!(
            out,
            "- {}: {:.1} vs {:.1} ({:+.1}, {})",
            row.name,
            row.level,
            row.reference,
            row.gap,
            row.status.label()
        );
    }
    out.push('\n');

    section(&mut out, "Competitive context");
    let _ = writeln!(out, "{}", report.competitive.headline);
    bullets(&mut out, &report.competitive.dynamics);
    out.push('\n');

    section(&mut out, "Suggested KPIs");
    for set in &report.kpis {
        let _ = writeln!(out, "{}: {}", set.name, set.kpis.join("; "));
    }
    out.push('\n');

    section(&mut out, &report.phase_two.title);
    let _ = writeln!(out, "{}", report.phase_two.message);
    bullets(&mut out, &report.phase_two.next_steps);

    out
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{title}\n{}", "=".repeat(title.chars().count()));
}

fn bullets(out: &mut String, items: &[String]) {
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}

fn quadrant(out: &mut String, title: &str, entries: &[SwotEntry]) {
    let _ = writeln!(out, "{title}:");
    for entry in entries {
        if entry.evidence.is_empty() {
            let _ = writeln!(out, "- {}", entry.text);
        } else {
            let _ = writeln!(out, "- {} Evidence: {}", entry.text, entry.evidence.join("; "));
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&render_text(self))
    }
}
