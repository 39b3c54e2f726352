//! Market lookups driven by the company profile
//!
//! - Competitive context selected by keywords in the declared industry
//! - Size bucket presentation

use crate::report::{CompetitiveContext, SizeInfo};
use vertex_catalog::{SizeBucket, SizeBuckets};
use vertex_model::CompanyProfile;

struct ContextPack {
    keywords: &'static [&'static str],
    headline: &'static str,
    dynamics: &'static [&'static str],
    opportunities: &'static [&'static str],
    threats: &'static [&'static str],
}

static RETAIL: ContextPack = ContextPack {
    keywords: &["retail", "commerce", "shop", "store"],
    headline: "Competition on price, experience and availability.",
    dynamics: &[
        "Margin pressure is high: discounts and promotions compete hard.",
        "Experience (lead times, service, after-sales) can differentiate more than the product.",
        "Stock and operations: mistakes cause direct losses in sales and reputation.",
    ],
    opportunities: &[
        "Improve margin through product mix, pricing and discount control.",
        "Standardise operations (receiving, dispatch, complaints) to cut rework.",
        "Unify data (sales, inventory, complaints) for weekly decisions.",
    ],
    threats: &[
        "Competitors with better logistics and stock win on availability.",
        "Uncontrolled growth can destroy margin through discounts and hidden costs.",
    ],
};

static SERVICES: ContextPack = ContextPack {
    keywords: &["servic", "consult", "agency"],
    headline: "Competition on trust, delivery and perceived value.",
    dynamics: &[
        "Sales depend on reputation and measurable results (cases, indicators).",
        "Profitability is set by team utilisation and scope control.",
        "The typical risk: promising more than operations can sustain.",
    ],
    opportunities: &[
        "Standardise the offer and its scope (packages) to sell with less friction.",
        "Measure profitability per client or project (hours, costs, margin).",
        "Create weekly follow-up routines with simple indicators.",
    ],
    threats: &[
        "Growth without processes leads to overload and lower quality.",
        "Dependence on 1–2 clients or key leaders increases fragility.",
    ],
};

static CONSTRUCTION: ContextPack = ContextPack {
    keywords: &["construct", "works", "real estate", "property"],
    headline: "Competition on execution, compliance and cost control.",
    dynamics: &[
        "Small deviations in cost or schedule become large losses.",
        "Coordination of suppliers, crews and purchasing defines the margin.",
        "Contractual and safety risks affect continuity.",
    ],
    opportunities: &[
        "Weekly control of progress against budget (actual cost and commitments).",
        "Standardise purchasing and change-order management.",
        "Minimum risk controls and critical documentation.",
    ],
    threats: &[
        "Financial and purchasing disorder creates invisible deviations.",
        "Dependence on one key person can paralyse execution.",
    ],
};

static GENERAL: ContextPack = ContextPack {
    keywords: &[],
    headline: "Competition on differentiation, efficiency and control.",
    dynamics: &[
        "Consistent execution beats improvisation.",
        "Financial control (margin and cash) decides who grows and who breaks.",
        "Well-ordered data allows deciding faster than the market.",
    ],
    opportunities: &[
        "Define focus: which customers, which offer, what to prioritise.",
        "Standardise critical processes to reduce rework.",
        "Create minimum control: indicators, routines and owners.",
    ],
    threats: &[
        "Growing sales without control raises the risk of an operational or cash breakdown.",
        "Dependence on the owner or a key person can hold back scaling.",
    ],
};

static PACKS: [&ContextPack; 3] = [&RETAIL, &SERVICES, &CONSTRUCTION];

/// Competitive context for the declared industry
///
/// The first pack whose keyword appears in the lower-cased industry wins;
/// an undeclared or unmatched industry gets the general pack.
#[must_use]
pub fn competitive_context(profile: &CompanyProfile) -> CompetitiveContext {
    let industry = profile.industry_normalized();
    let pack = PACKS
        .iter()
        .copied()
        .find(|p| !industry.is_empty() && p.keywords.iter().any(|k| industry.contains(k)))
        .unwrap_or(&GENERAL);

    CompetitiveContext {
        headline: pack.headline.to_string(),
        dynamics: to_strings(pack.dynamics),
        opportunities: to_strings(pack.opportunities),
        threats: to_strings(pack.threats),
    }
}

/// Presentation of the size bucket for the declared head count
#[must_use]
pub fn size_info(buckets: &SizeBuckets, profile: &CompanyProfile) -> SizeInfo {
    let bucket = buckets.bucket_for(profile.employees);
    let (name, hint) = match bucket {
        SizeBucket::Unknown => (
            "Not declared".to_string(),
            "Declare the head count to refine the benchmark.",
        ),
        SizeBucket::Micro => (
            format!("Micro (1–{})", buckets.micro_max),
            "Strong dependence on the owner is common.",
        ),
        SizeBucket::Small => (
            format!("Small ({}–{})", buckets.micro_max + 1, buckets.small_max),
            "Scaling requires processes and financial control.",
        ),
        SizeBucket::Mid => (
            format!("Mid-size ({}–{})", buckets.small_max + 1, buckets.mid_max),
            "Typical risk: weak governance and unintegrated data.",
        ),
        SizeBucket::Large => (
            format!("Large ({}+)", buckets.mid_max + 1),
            "Focus: governance, control and efficiency.",
        ),
    };

    SizeInfo {
        bucket,
        name,
        hint: hint.to_string(),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn industry_keywords_select_pack() {
        let retail = competitive_context(&CompanyProfile::new().with_industry("E-commerce"));
        assert!(retail.headline.contains("availability"));

        let services = competitive_context(&CompanyProfile::new().with_industry("Consulting"));
        assert!(services.headline.contains("trust"));

        let building = competitive_context(&CompanyProfile::new().with_industry("Construction"));
        assert!(building.headline.contains("execution"));
    }

    #[test]
    fn unmatched_industry_uses_general_pack() {
        let ctx = competitive_context(&CompanyProfile::new().with_industry("Mining"));
        assert!(ctx.headline.contains("differentiation"));
        assert_eq!(competitive_context(&CompanyProfile::new()), ctx);
    }

    #[test]
    fn size_names_follow_configured_bounds() {
        let buckets = SizeBuckets::default();
        let info = size_info(&buckets, &CompanyProfile::new().with_employees(12));
        assert_eq!(info.bucket, SizeBucket::Small);
        assert_eq!(info.name, "Small (10–49)");

        let unknown = size_info(&buckets, &CompanyProfile::new());
        assert_eq!(unknown.bucket, SizeBucket::Unknown);
    }
}
