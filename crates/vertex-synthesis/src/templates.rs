//! Template tables
//!
//! Every table is keyed by [`DimensionKey`] or [`MaturityTier`] and matched
//! exhaustively, so a new dimension or tier does not compile until each
//! table covers it.

use vertex_catalog::MaturityTier;
use vertex_model::DimensionKey;

/// Static text attached to one dimension
#[derive(Debug)]
pub(crate) struct DimensionTemplates {
    /// One reading per rounded level 1..=5
    pub(crate) readings: [&'static str; 5],
    pub(crate) pain_title: &'static str,
    /// Completes "This happens because …"
    pub(crate) pain_cause: &'static str,
    pub(crate) root_causes: &'static [&'static str],
    pub(crate) plan: ActionTemplate,
    pub(crate) kpis: &'static [&'static str],
    pub(crate) quick_win: QuickWinTemplate,
}

/// Remediation template for a focus dimension
#[derive(Debug)]
pub(crate) struct ActionTemplate {
    pub(crate) goal: &'static str,
    pub(crate) actions: &'static [&'static str],
    pub(crate) quick_win: &'static str,
    /// Added to the first 30 days while the dimension blocks advancement
    pub(crate) urgent: &'static [&'static str],
}

/// Quick-win card
#[derive(Debug)]
pub(crate) struct QuickWinTemplate {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) tag: &'static str,
}

static STRATEGY: DimensionTemplates = DimensionTemplates {
    readings: [
        "Decisions come from urgency and reaction. Focus is missing and prioritising is hard.",
        "Guided by intuition: it works, but it does not align the team or make it possible to say no.",
        "Objectives start to bring order, but they do not yet govern the whole operation.",
        "Goals and measurement reduce improvisation and sharpen priorities.",
        "Clear vision and criteria: sustained focus and long-term decisions.",
    ],
    pain_title: "Lack of focus and clear priorities",
    pain_cause: "decisions are driven more by urgency than by a shared direction",
    root_causes: &[
        "There is no explicit direction to filter decisions and opportunities.",
        "Priorities change with the urgency of the day, so effort is scattered.",
        "Objectives are not translated into goals with owners.",
    ],
    plan: ActionTemplate {
        goal: "Define a clear focus and the criteria to prioritise",
        actions: &[
            "Write down the 3 priorities for the next 12 months.",
            "Define go/no-go criteria for new opportunities.",
            "Turn each priority into a goal with an owner and a date.",
            "Review priorities monthly against results.",
        ],
        quick_win: "Agree on 3 priorities and share them with the team.",
        urgent: &["Stop or postpone the initiatives that fall outside the 3 priorities."],
    },
    kpis: &[
        "Initiatives aligned with the annual priorities (%)",
        "Goals achieved vs planned (quarterly)",
        "Opportunities declined by explicit criteria",
    ],
    quick_win: QuickWinTemplate {
        title: "Focus and priorities (7 days)",
        description: "Agree on 3 priorities and the criteria to say no to whatever falls outside them.",
        tag: "Strategy",
    },
};

static PROCESS: DimensionTemplates = DimensionTemplates {
    readings: [
        "Strong dependence on people. High risk when growing.",
        "Processes run from memory: inconsistency and rework.",
        "Partial order, but consistency and standardisation are missing.",
        "Stable processes: better continuity and coordination.",
        "Documented, repeatable processes: a solid base to scale.",
    ],
    pain_title: "Operational dependence and low repeatability",
    pain_cause: "operations rely on habits and people more than on stable processes",
    root_causes: &[
        "Critical processes are not documented, so each person does them differently.",
        "Errors are fixed case by case without changing how the work is done.",
        "Handoffs between areas have no clear owner.",
    ],
    plan: ActionTemplate {
        goal: "Make critical processes repeatable and independent of specific people",
        actions: &[
            "Map the 2 processes that generate the most rework.",
            "Document each one with owner, steps and checklist.",
            "Train a backup for every critical task.",
            "Log incidents and review them every two weeks.",
        ],
        quick_win: "Write a one-page checklist for the most error-prone process.",
        urgent: &["Identify the tasks only one person knows how to do and assign a backup."],
    },
    kpis: &[
        "Rework or error rate",
        "On-time delivery (%)",
        "Critical processes documented",
    ],
    quick_win: QuickWinTemplate {
        title: "Standardise 2 critical processes (14 days)",
        description: "Document flow, owner and checklist. In retail: dispatch and complaints. In services: delivery and change requests.",
        tag: "Processes",
    },
};

static FINANCE: DimensionTemplates = DimensionTemplates {
    readings: [
        "Low visibility. Cash and margin surprises.",
        "Control through the bank balance: enough to survive, not to manage.",
        "Income and expense control: a base for decisions.",
        "Managed by margin and results: better profitability decisions.",
        "Budget plus indicators: anticipation and control.",
    ],
    pain_title: "Low financial visibility for decisions",
    pain_cause: "the numbers are not yet used as a control system",
    root_causes: &[
        "Income, costs and margins are not reviewed on a fixed schedule.",
        "There is no cash projection, so shortfalls are discovered late.",
        "Prices are set without knowing the real cost of each product or service.",
    ],
    plan: ActionTemplate {
        goal: "See and control cash and margins",
        actions: &[
            "Build a simple dashboard: sales, margin, cash and fixed costs.",
            "Project cash 4 weeks ahead and update it weekly.",
            "Calculate the margin per product line or customer.",
            "Set a monthly budget and compare actuals against it.",
        ],
        quick_win: "Start a weekly 4-week cash projection.",
        urgent: &["Review overdue receivables and upcoming payments this week."],
    },
    kpis: &[
        "Gross margin (%)",
        "Cash runway (weeks)",
        "Days sales outstanding",
        "Budget variance (%)",
    ],
    quick_win: QuickWinTemplate {
        title: "Cash and margin control (14 days)",
        description: "Build a simple dashboard: sales, margin, 4-week cash projection, fixed costs and alerts.",
        tag: "Finance",
    },
};

static PEOPLE: DimensionTemplates = DimensionTemplates {
    readings: [
        "Blurred roles: everything lands on the owner.",
        "Friction and confusion. Much depends on specific people.",
        "Partial delegation: progress, but decisions are still concentrated.",
        "Defined roles and reasonable autonomy: less dependence on the owner.",
        "High autonomy: clear responsibilities and distributed decisions.",
    ],
    pain_title: "Blurred roles and concentration on the owner",
    pain_cause: "there is no clear and consistent definition of owners and boundaries",
    root_causes: &[
        "Responsibilities are implicit, so decisions escalate by default.",
        "There is no follow-up routine to agree on goals and review performance.",
        "Delegation happens without the authority or criteria to decide.",
    ],
    plan: ActionTemplate {
        goal: "Clarify roles and delegate decisions",
        actions: &[
            "Define a minimal RACI for the key decisions.",
            "Write a one-page role description for each position.",
            "Delegate 3 recurring decisions with clear criteria.",
            "Hold monthly one-to-one follow-ups against goals.",
        ],
        quick_win: "Agree who decides, who executes and who supports in the 5 most frequent decisions.",
        urgent: &["Name a substitute for every decision that only the owner takes today."],
    },
    kpis: &[
        "Decisions escalated to the owner per week",
        "Roles with written responsibilities (%)",
        "Team goals achieved (%)",
    ],
    quick_win: QuickWinTemplate {
        title: "Roles and delegation (10 days)",
        description: "Define a minimal RACI (who decides, executes, supports). Reduces dependence on the owner.",
        tag: "People",
    },
};

static TECH: DimensionTemplates = DimensionTemplates {
    readings: [
        "Basic technology. Scattered data.",
        "Loose tools without an integrated system.",
        "Supports key tasks, but information is not integrated.",
        "Data supports business control.",
        "Technology and reliable data allow scaling with speed.",
    ],
    pain_title: "Scattered data and unintegrated tools",
    pain_cause: "information is not organised to support decisions",
    root_causes: &[
        "Key data lives in spreadsheets and chats with no single source.",
        "Reports are assembled by hand, so they arrive late or not at all.",
        "Tools were adopted one by one without an integration plan.",
    ],
    plan: ActionTemplate {
        goal: "Centralise the data needed to decide",
        actions: &[
            "List the key data sources (sales, stock, customers, cash).",
            "Choose a single source of truth for each one.",
            "Build one weekly dashboard with 5 indicators.",
            "Automate the most repetitive manual report.",
        ],
        quick_win: "Create one weekly dashboard fed from a single source.",
        urgent: &["Back up the critical spreadsheets and files today."],
    },
    kpis: &[
        "Hours per week spent on manual reporting",
        "Processes supported by a system (%)",
        "Dashboard update frequency",
    ],
    quick_win: QuickWinTemplate {
        title: "Data in order (10 days)",
        description: "Centralise the key sources and create 1 weekly dashboard. Avoid endless spreadsheets.",
        tag: "Data",
    },
};

static RISK: DimensionTemplates = DimensionTemplates {
    readings: [
        "Badly exposed. No minimum controls.",
        "High risk from dependence and lack of discipline.",
        "Can hold out for a while, but without systematic monitoring.",
        "Minimum controls and basic discipline.",
        "Risks managed as a system: continuity and robustness.",
    ],
    pain_title: "Exposure to operational risks",
    pain_cause: "there are no systematic minimum controls to prevent impacts",
    root_causes: &[
        "The main risks have not been identified or given an owner.",
        "Contracts and key documents are informal or incomplete.",
        "There is no contingency plan for losing a key person or customer.",
    ],
    plan: ActionTemplate {
        goal: "Install minimum controls over the main risks",
        actions: &[
            "List the top 5 risks with impact and likelihood.",
            "Assign an owner and a basic control to each one.",
            "Put contracts and critical documentation in order.",
            "Review the risk list quarterly.",
        ],
        quick_win: "Identify the top 5 risks and assign an owner to each.",
        urgent: &["Check backups, key contracts and cash exposure this week."],
    },
    kpis: &[
        "Top risks with an owner and a control (%)",
        "Incidents per month",
        "Critical documents up to date (%)",
    ],
    quick_win: QuickWinTemplate {
        title: "Minimum controls and risks (10 days)",
        description: "Identify the top 5 risks and define basic controls (contracts, compliance, backups, cash).",
        tag: "Risk",
    },
};

/// Templates of one dimension
pub(crate) fn dimension(key: DimensionKey) -> &'static DimensionTemplates {
    match key {
        DimensionKey::Strategy => &STRATEGY,
        DimensionKey::Process => &PROCESS,
        DimensionKey::Finance => &FINANCE,
        DimensionKey::People => &PEOPLE,
        DimensionKey::Tech => &TECH,
        DimensionKey::Risk => &RISK,
    }
}

/// Cover headline and introduction of a tier
pub(crate) fn tier_cover(tier: MaturityTier) -> (&'static str, &'static str) {
    match tier {
        MaturityTier::Chaotic => (
            "Your company runs on constant effort, and today it is exposed.",
            "Growth so far rests mainly on experience and on solving what is urgent. That keeps the business moving, but it wears people out and raises the risk as the business grows.",
        ),
        MaturityTier::Intuitive => (
            "Your company works, but it depends too much on intuition and key people.",
            "There are signs of order, yet most decisions and tasks still rest on a few people. Turning that know-how into routines is the next step to grow without breaking.",
        ),
        MaturityTier::Ordered => (
            "Your company has left chaos behind; the challenge now is to professionalise.",
            "There is progress in order and control that reduces improvisation. The next step is to turn that order into a management system to grow more safely.",
        ),
        MaturityTier::Controlled => (
            "Your company has a solid base to grow with control.",
            "Management relies on processes and data. The challenge now is to optimise, reduce risks and prepare the next level of growth.",
        ),
        MaturityTier::Scalable => (
            "Your company is ready to scale.",
            "Processes, data and roles work as a system. The focus now is efficiency and keeping governance ahead of growth.",
        ),
    }
}

/// Decision-style phrase by score of the bound strategy question
pub(crate) fn decision_style(score: u8) -> &'static str {
    match score {
        0..=2 => "mainly from intuition and urgency",
        3 => "with objectives as a reference",
        _ => "relying on goals and data",
    }
}

/// Dependency phrase by score of the bound process question
pub(crate) fn dependency(score: u8) -> &'static str {
    match score {
        0..=2 => "heavily on key people",
        3 => "moderately on some people",
        _ => "little on any single person",
    }
}

/// Severity wording of a pain point
pub(crate) const PAIN_FRAGILITY: &str =
    "This increases business fragility and may cause breakdowns when growing.";
/// Severity wording of a pain point at or above the severity threshold
pub(crate) const PAIN_LIMITS_GROWTH: &str =
    "This may limit growth or reduce profitability if not reinforced.";

/// Root-cause hypotheses unlocked by a signal, in precedence order
pub(crate) static SIGNAL_HYPOTHESES: &[(&str, &str)] = &[
    (
        "owner-dependency",
        "The owner is the bottleneck: escalations and decisions converge on one person.",
    ),
    (
        "key-person-risk",
        "Operational know-how lives in a few people instead of in documented processes.",
    ),
    (
        "firefighting",
        "Problems are solved as they appear but never turned into process improvements.",
    ),
    (
        "cash-blindness",
        "Cash is tracked through the bank balance, so margin problems surface late.",
    ),
    (
        "margin-blind",
        "Prices are set without knowing margins, so growth may not translate into profit.",
    ),
    (
        "no-focus",
        "Saying yes to every opportunity dilutes resources and blurs priorities.",
    ),
    (
        "role-confusion",
        "Unclear responsibilities make tasks fall through the cracks or get duplicated.",
    ),
    (
        "fragile",
        "The business has no buffer: a single incident can stop operations.",
    ),
];

/// Level condition of a rule-triggered SWOT entry
#[derive(Debug)]
pub(crate) struct LevelRule {
    /// Every listed dimension is strictly below its level
    pub(crate) below: &'static [(DimensionKey, f64)],
    /// Every listed dimension is at or above its level
    pub(crate) at_least: &'static [(DimensionKey, f64)],
    pub(crate) text: &'static str,
}

pub(crate) static OPPORTUNITY_RULES: &[LevelRule] = &[
    LevelRule {
        below: &[],
        at_least: &[(DimensionKey::Strategy, 3.5)],
        text: "A clear direction lets you decline distractions and double down on the most profitable segments.",
    },
    LevelRule {
        below: &[],
        at_least: &[(DimensionKey::Process, 3.5), (DimensionKey::People, 3.5)],
        text: "Stable processes and clear roles allow growing volume without growing chaos.",
    },
    LevelRule {
        below: &[],
        at_least: &[(DimensionKey::Tech, 3.5)],
        text: "Use your data and tools to automate reporting and decide every week.",
    },
    LevelRule {
        below: &[(DimensionKey::Finance, 3.0)],
        at_least: &[(DimensionKey::Strategy, 3.0)],
        text: "Connect your objectives to a simple budget to fund the priorities you already have.",
    },
];

pub(crate) static THREAT_RULES: &[LevelRule] = &[
    LevelRule {
        below: &[(DimensionKey::Process, 3.0), (DimensionKey::Finance, 3.0)],
        at_least: &[],
        text: "Operational disorder combined with weak financial visibility can hide losses until cash runs short.",
    },
    LevelRule {
        below: &[(DimensionKey::People, 3.0), (DimensionKey::Process, 3.0)],
        at_least: &[],
        text: "Reliance on specific people without repeatable processes turns any absence into a disruption.",
    },
    LevelRule {
        below: &[(DimensionKey::Risk, 3.0)],
        at_least: &[],
        text: "Without minimum controls, a single incident (key customer, key person, cash) can stop the business.",
    },
    LevelRule {
        below: &[(DimensionKey::Tech, 3.0), (DimensionKey::Finance, 3.0)],
        at_least: &[],
        text: "Decisions taken without reliable data may erode margins unnoticed.",
    },
];

pub(crate) const BALANCED_PROGRESS: &str =
    "Every area sits at the same level, so growth depends on moving them forward together.";
pub(crate) const STRENGTHS_DEFAULT: &str =
    "Strengths are present, but not yet consistent across all areas.";
pub(crate) const WEAKNESSES_DEFAULT: &str =
    "No critical weaknesses, but there are professionalisation opportunities.";
pub(crate) const OPPORTUNITY_MANAGEMENT_SYSTEM: &str =
    "Create a minimum management system (KPIs + routines + owners) in 30–45 days.";
pub(crate) const THREAT_GROWTH_WITHOUT_CONTROL: &str =
    "Growing without strengthening processes and control can cause operational or cash breakdowns.";

/// Fixed rationale of a gap by rank (1-based), saturating at the last
pub(crate) fn gap_rationale(rank: usize) -> &'static str {
    match rank {
        0 | 1 => "Reduce immediate risks and stabilise operations.",
        2 => "Enables progress with more control and coherent decisions.",
        _ => "Pays off better after strengthening the critical.",
    }
}

pub(crate) static MANAGEMENT_QUICK_WIN: QuickWinTemplate = QuickWinTemplate {
    title: "Minimum management system (7 days)",
    description: "Define 5 KPIs, a weekly routine and owners. This reduces improvisation and increases control.",
    tag: "Base",
};

pub(crate) static OWNER_DEPENDENCY_QUICK_WIN: QuickWinTemplate = QuickWinTemplate {
    title: "Remove dependence on the owner (30 days)",
    description: "Move 3 recurring decisions to a defined role with a checklist and a weekly routine.",
    tag: "Scale",
};

pub(crate) static INDICATOR_GOVERNANCE_QUICK_WIN: QuickWinTemplate = QuickWinTemplate {
    title: "Indicator governance (30 days)",
    description: "Monthly management meeting, a dashboard per area, and tracked agreements.",
    tag: "Governance",
};

pub(crate) const COMPETITIVE_MOVE_TITLE: &str = "Quick competitive move (15 days)";
pub(crate) const COMPETITIVE_MOVE_FALLBACK: &str =
    "Define a differentiator and turn it into an offer and a sales routine.";
pub(crate) const COMPETITIVE_MOVE_TAG: &str = "Competition";

/// Closing item of the 90-day bucket
pub(crate) const PLAN_CONSOLIDATION: &str =
    "Consolidate the indicators of both focus areas in one monthly review.";

/// Order in which low dimensions contribute quick wins
pub(crate) const QUICK_WIN_ORDER: [DimensionKey; 6] = [
    DimensionKey::Finance,
    DimensionKey::Process,
    DimensionKey::People,
    DimensionKey::Tech,
    DimensionKey::Risk,
    DimensionKey::Strategy,
];

pub(crate) const PHASE_TWO_READY_TITLE: &str = "Your company is ready for the next step";
pub(crate) const PHASE_TWO_READY_MESSAGE: &str =
    "Your company has a minimum base to move to Phase 2 (Define focus and direction).";
pub(crate) static PHASE_TWO_READY_STEPS: &[&str] = &[
    "Define the 2–3 strategic priorities for the next 12 months.",
    "Translate each priority into goals with owners and indicators.",
    "Set a monthly review routine to track progress.",
];

pub(crate) const PHASE_TWO_STABILIZE_TITLE: &str = "Before moving on…";
pub(crate) const PHASE_TWO_STABILIZE_MESSAGE: &str =
    "Before defining strategy, critical dimensions must be strengthened. Advancing now would increase business risk.";
pub(crate) static PHASE_TWO_STABILIZE_STEPS: &[&str] = &[
    "Run the 30-day plan and measure its indicators every week.",
    "Repeat this diagnostic in 60–90 days.",
];
