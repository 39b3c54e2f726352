//! Built-in question bank
//!
//! Six dimensions with three scored questions each. The second question of
//! every dimension is only asked once the first one scores 3 or more. The
//! context block captures one explicit strength, weakness, opportunity and
//! threat pick; the strength and weakness picks get an optional free-text
//! follow-up that echoes the picked label.

use vertex_model::{DimensionKey, Predicate, Prompt, Question, QuestionId, Section};

const STRATEGY: Section = Section::Dimension(DimensionKey::Strategy);
const PROCESS: Section = Section::Dimension(DimensionKey::Process);
const FINANCE: Section = Section::Dimension(DimensionKey::Finance);
const PEOPLE: Section = Section::Dimension(DimensionKey::People);
const TECH: Section = Section::Dimension(DimensionKey::Tech);
const RISK: Section = Section::Dimension(DimensionKey::Risk);

/// Minimum score on the first question of a dimension to unlock the second
const DEEPEN_AT: u8 = 3;

/// Built-in questions in catalog order
#[must_use]
pub fn default_questions() -> Vec<Question> {
    let mut questions = Vec::with_capacity(24);
    questions.extend(strategy());
    questions.extend(process());
    questions.extend(finance());
    questions.extend(people());
    questions.extend(tech());
    questions.extend(risk());
    questions.extend(context());
    questions
}

fn strategy() -> [Question; 3] {
    [
        Question::choice("E1", STRATEGY, "Strategy", "When you make important decisions in your company, you usually…")
            .option("React to whatever is urgent that day", 1, &["reactive"])
            .option("Follow my experience and intuition", 2, &["intuition"])
            .option("Use clear objectives as a reference", 3, &["objectives"])
            .option("Weigh them against measurable goals and results", 4, &["metrics"])
            .option("Apply criteria aligned with a long-term vision", 5, &["vision"]),
        Question::choice("E2", STRATEGY, "Strategy", "How clear is the direction of the company for the next 2–3 years?")
            .visible_if(Predicate::score_at_least("E1", DEEPEN_AT))
            .option("We have not defined it", 1, &[])
            .option("It is in my head, not written down", 2, &[])
            .option("It has been discussed but not documented", 3, &[])
            .option("It is defined and we use it to prioritise", 4, &[])
            .option("It is defined, communicated and guides decisions", 5, &[]),
        Question::choice("E3", STRATEGY, "Strategy", "When a new opportunity appears, how do you decide between yes and no?")
            .option("I almost always say yes so as not to lose it", 1, &["no-focus"])
            .option("It depends on the moment and the urgency", 2, &["no-focus"])
            .option("I compare it with our general objectives", 3, &["some-focus"])
            .option("I assess it against criteria (profit, resources, priority)", 4, &["focus"])
            .option("We have clear criteria and a prioritisation process", 5, &["focus", "system"]),
    ]
}

fn process() -> [Question; 3] {
    [
        Question::choice("P1", PROCESS, "Processes", "If a key person is away for a week, what happens to operations?")
            .option("Everything falls apart", 1, &["key-person-risk"])
            .option("We cope, but with a lot of effort", 2, &["key-person-risk"])
            .option("There are problems, but nothing critical", 3, &["some-dependency"])
            .option("Most things keep working", 4, &["resilient-ops"])
            .option("No impact, processes are clear", 5, &["repeatable"]),
        Question::choice("P2", PROCESS, "Processes", "The important tasks in the company…")
            .visible_if(Predicate::score_at_least("P1", DEEPEN_AT))
            .option("Are done by whoever is available", 1, &[])
            .option("Are shared out, but without clarity", 2, &[])
            .option("Have defined owners", 3, &[])
            .option("Follow well-known processes", 4, &[])
            .option("Are documented and standardised", 5, &["repeatable"]),
        Question::choice("P3", PROCESS, "Processes", "When something goes wrong (an error, a complaint, a delay), usually…")
            .option("We put out the fire and move on", 1, &["firefighting"])
            .option("We talk about it, but keep no record", 2, &["firefighting"])
            .option("We fix it and sometimes adjust the process", 3, &["improve-sometimes"])
            .option("We analyse the cause and agree an adjustment", 4, &["continuous-improvement"])
            .option("We run incident management and continuous improvement", 5, &["continuous-improvement", "system"]),
    ]
}

fn finance() -> [Question; 3] {
    [
        Question::choice("F1", FINANCE, "Finance", "How do you know whether this month was good or bad for the company?")
            .option("From the general feeling", 1, &["low-visibility"])
            .option("By looking at the bank account", 2, &["cash-blindness"])
            .option("By reviewing income and expenses", 3, &["basic-control"])
            .option("By analysing results and margins", 4, &["margin-focus"])
            .option("By comparing against budget and indicators", 5, &["budget"]),
        Question::choice("F2", FINANCE, "Finance", "How often do you review financial information to make decisions?")
            .visible_if(Predicate::score_at_least("F1", DEEPEN_AT))
            .option("Almost never", 1, &[])
            .option("Only when there are problems", 2, &[])
            .option("Monthly", 3, &[])
            .option("Regularly, with indicators", 4, &[])
            .option("With formal control and follow-up", 5, &["budget"]),
        Question::choice("F3", FINANCE, "Finance", "Regarding prices and margins, your company…")
            .option("Does not know its margin per product or service", 1, &["margin-blind"])
            .option("Estimates them, but does not track them", 2, &["margin-blind"])
            .option("Knows its overall margins", 3, &["margin-focus"])
            .option("Knows its margins per line or customer", 4, &["margin-focus"])
            .option("Manages margins with targets and actions", 5, &["margin-focus", "system"]),
    ]
}

fn people() -> [Question; 3] {
    [
        Question::choice("R1", PEOPLE, "People & Roles", "In your company, responsibilities…")
            .option("Are not clear", 1, &["role-confusion"])
            .option("Are understood, but not defined", 2, &["role-confusion"])
            .option("Are more or less clear", 3, &["some-clarity"])
            .option("Are defined per role", 4, &["role-clarity"])
            .option("Are clear and do not depend on the owner", 5, &["role-clarity", "autonomy"]),
        Question::choice("R2", PEOPLE, "People & Roles", "When an important problem comes up…")
            .visible_if(Predicate::score_at_least("R1", DEEPEN_AT))
            .option("The owner always solves it", 1, &["owner-dependency"])
            .option("It usually goes through the owner", 2, &["owner-dependency"])
            .option("Some people solve it on their own", 3, &["some-autonomy"])
            .option("Owners act autonomously", 4, &["autonomy"])
            .option("The system absorbs the problem", 5, &["autonomy", "system"]),
        Question::choice("R3", PEOPLE, "People & Roles", "About performance and follow-up, today…")
            .option("There is no formal follow-up", 1, &["no-people-mgmt"])
            .option("We talk when there are problems", 2, &["no-people-mgmt"])
            .option("There is informal follow-up and general goals", 3, &["basic-people-mgmt"])
            .option("There are meetings and performance agreements", 4, &["people-mgmt"])
            .option("There are KPIs, roles and management routines", 5, &["people-mgmt", "system"]),
    ]
}

fn tech() -> [Question; 3] {
    [
        Question::choice("T1", TECH, "Technology & Data", "What role does technology play in your company today?")
            .option("Only the basics (email, chat)", 1, &["low-tech"])
            .option("Loose, unconnected tools", 2, &["fragmented-tech"])
            .option("It supports some key tasks", 3, &["some-tech"])
            .option("It is part of how the business is controlled", 4, &["data-driven"])
            .option("It lets us scale and decide better", 5, &["data-driven", "system"]),
        Question::choice("T2", TECH, "Technology & Data", "The information you use to decide…")
            .visible_if(Predicate::score_at_least("T1", DEEPEN_AT))
            .option("Is scattered", 1, &["data-chaos"])
            .option("Is assembled by hand", 2, &["manual-reporting"])
            .option("Is centralised", 3, &["centralized"])
            .option("Is updated regularly", 4, &["regular-data"])
            .option("Is reliable and accessible", 5, &["trusted-data"]),
        Question::choice("T3", TECH, "Technology & Data", "For sales and operations, the company…")
            .option("Works with spreadsheets and messages", 1, &["manual-ops"])
            .option("Has tools, but they are not integrated", 2, &["fragmented-tech"])
            .option("Has a base system (simple ERP/CRM)", 3, &["some-tech"])
            .option("Integrates data for follow-up", 4, &["data-driven"])
            .option("Automates and monitors with dashboards", 5, &["data-driven", "automation"]),
    ]
}

fn risk() -> [Question; 3] {
    [
        Question::choice(
            "G1",
            RISK,
            "Governance & Risk",
            "If a serious problem happened today (key person, large customer, cash), the company…",
        )
        .option("Would be badly exposed", 1, &["fragile"])
        .option("Would have serious problems", 2, &["fragile"])
        .option("Could hold out for a while", 3, &["some-resilience"])
        .option("Has minimum controls", 4, &["controls"])
        .option("Has clear plans and controls", 5, &["controls", "system"]),
        Question::choice("G2", RISK, "Governance & Risk", "How aware are you of the main risks of the business?")
            .visible_if(Predicate::score_at_least("G1", DEEPEN_AT))
            .option("I have not identified them", 1, &[])
            .option("I sense them", 2, &[])
            .option("I know them, but do not manage them", 3, &[])
            .option("I monitor them", 4, &[])
            .option("I manage them actively", 5, &["controls"]),
        Question::choice("G3", RISK, "Governance & Risk", "About contracts, compliance and key documentation…")
            .option("Everything is very informal", 1, &["compliance-risk"])
            .option("Some things exist, but are incomplete", 2, &["compliance-risk"])
            .option("The essentials are reasonably covered", 3, &["basic-compliance"])
            .option("It is in order and has owners", 4, &["controls"])
            .option("It is managed as a system (review and control)", 5, &["controls", "system"]),
    ]
}

fn echo(template: &str, source: &str, fallback: &str) -> Prompt {
    Prompt::Echo {
        template: template.to_string(),
        source: QuestionId::from(source),
        fallback: fallback.to_string(),
    }
}

fn context() -> [Question; 6] {
    [
        Question::choice(
            "S0",
            Section::Context,
            "Context",
            "Pick one real strength of your company (the most representative today):",
        )
        .option("Product or service valued by customers", 3, &["strength-value"])
        .option("Speed to solve and execute", 3, &["strength-speed"])
        .option("Strong commercial relationship with customers", 3, &["strength-relationship"])
        .option("Committed and stable team", 3, &["strength-team"])
        .option("Clear differentiation from competitors", 3, &["strength-differentiation"]),
        Question::text(
            "S1",
            Section::Context,
            "Context",
            echo(
                "Why do you consider \"{answer}\" a strength? (optional)",
                "S0",
                "the selected option",
            ),
        )
        .visible_if(Predicate::answered("S0")),
        Question::choice("W0", Section::Context, "Context", "What is your most dangerous weakness today?")
            .option("Dependence on the owner or a key person", 2, &["weak-owner", "owner-dependency"])
            .option("Lack of financial control (cash, margin)", 2, &["weak-finance", "cash-blindness"])
            .option("Processes that are hard to repeat (everything depends on people)", 2, &["weak-process"])
            .option("Unstable sales or weak commercial pipeline", 2, &["weak-sales"])
            .option("Scattered technology and data", 2, &["weak-tech"]),
        Question::text(
            "W1",
            Section::Context,
            "Context",
            echo(
                "What impact does \"{answer}\" have on you today? (optional)",
                "W0",
                "the selected weakness",
            ),
        )
        .visible_if(Predicate::answered("W0")),
        Question::choice("O0", Section::Context, "Context", "Which opportunity would you most like to capture? (optional)")
            .required(false)
            .option("Grow with current customers", 3, &["opportunity-existing"])
            .option("Reach a new segment or region", 3, &["opportunity-market"])
            .option("Launch a new product or service", 3, &["opportunity-offer"])
            .option("Improve margins through efficiency", 3, &["opportunity-efficiency"])
            .option("Digitalise sales or operations", 3, &["opportunity-digital"]),
        Question::choice("T0", Section::Context, "Context", "Which external threat worries you most? (optional)")
            .required(false)
            .option("New or aggressive competitors", 2, &["threat-competition"])
            .option("Dependence on a few large customers", 2, &["threat-concentration", "key-person-risk"])
            .option("Rising costs or supplier problems", 2, &["threat-costs"])
            .option("Regulatory or compliance changes", 2, &["threat-regulation"])
            .option("Falling demand in the market", 2, &["threat-demand"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use vertex_model::QuestionKind;

    #[test]
    fn ids_are_unique() {
        let questions = default_questions();
        let ids: HashSet<&str> = questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), questions.len());
    }

    #[test]
    fn every_dimension_has_three_scored_questions() {
        let questions = default_questions();
        for key in DimensionKey::ALL {
            let n = questions
                .iter()
                .filter(|q| q.scored_dimension() == Some(key))
                .count();
            assert_eq!(n, 3, "{key}");
        }
    }

    #[test]
    fn context_block_is_unscored() {
        let questions = default_questions();
        let context: Vec<&Question> = questions
            .iter()
            .filter(|q| q.section == Section::Context)
            .collect();
        assert_eq!(context.len(), 6);
        assert!(context.iter().all(|q| q.scored_dimension().is_none()));
        assert!(context
            .iter()
            .filter(|q| q.kind == QuestionKind::FreeText)
            .all(|q| !q.is_required()));
    }

    #[test]
    fn follow_ups_echo_their_pick() {
        let questions = default_questions();
        let s1 = questions.iter().find(|q| q.id.as_str() == "S1").unwrap();
        assert_eq!(s1.prompt.dependency().map(QuestionId::as_str), Some("S0"));
    }
}
