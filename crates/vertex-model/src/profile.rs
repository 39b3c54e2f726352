//! Company profile

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form facts about the assessed company
///
/// Only `industry` and `employees` influence the report (competitive context
/// and size benchmark); the rest is echoed back for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    /// Company name
    pub company_name: Option<String>,
    /// Industry, matched by keyword
    pub industry: Option<String>,
    /// Sub-industry
    pub sub_industry: Option<String>,
    /// Country
    pub country: Option<String>,
    /// City
    pub city: Option<String>,
    /// Years in operation
    pub years_operating: Option<u32>,
    /// Declared head count
    pub employees: Option<u32>,
    /// Annual revenue, free text
    pub annual_revenue: Option<String>,
    /// Business model (B2B, B2C, ...)
    pub business_model: Option<String>,
    /// Main customers
    pub main_customers: Option<String>,
    /// Known competitors
    pub competitors: Option<String>,
    /// Any other key/value facts
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl CompanyProfile {
    /// Create empty profile
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With industry
    #[inline]
    #[must_use]
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// With head count
    #[inline]
    #[must_use]
    pub fn with_employees(mut self, employees: u32) -> Self {
        self.employees = Some(employees);
        self
    }

    /// With company name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    /// Lower-cased industry, empty when undeclared
    #[must_use]
    pub fn industry_normalized(&self) -> String {
        self.industry
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_land_in_extra() {
        let json = r#"{"industry": "Retail", "employees": 12, "founder": "Ana"}"#;
        let profile: CompanyProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.employees, Some(12));
        assert_eq!(profile.industry_normalized(), "retail");
        assert_eq!(profile.extra.get("founder").map(String::as_str), Some("Ana"));
    }
}
