//! Skill records: the raw row shape and the derived (banded) row shape.

use serde::{Deserialize, Serialize};

use crate::band::Band;
use crate::error::{DomainError, DomainResult};

/// One row of the skill dataset, as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub skill_category: String,
    pub industry: String,
    /// Synthetic 0..=100 score of susceptibility to AI-driven displacement.
    pub ai_exposure_level: f64,
    /// Synthetic 0..=100 likelihood of task automation.
    pub automation_risk: f64,
    /// Years until the skill's value declines by half.
    pub skill_half_life_years: f64,
    pub reskilling_frequency_years: f64,
    pub current_market_demand: f64,
}

impl SkillRecord {
    /// Column names every data source must provide.
    pub const COLUMNS: [&'static str; 7] = [
        "skill_category",
        "industry",
        "ai_exposure_level",
        "automation_risk",
        "skill_half_life_years",
        "reskilling_frequency_years",
        "current_market_demand",
    ];

    /// Validate the record and attach both bands.
    pub fn derive(self) -> DomainResult<DerivedRecord> {
        if self.skill_category.trim().is_empty() {
            return Err(DomainError::validation("skill_category must not be empty"));
        }
        if self.industry.trim().is_empty() {
            return Err(DomainError::validation("industry must not be empty"));
        }

        non_negative("skill_half_life_years", self.skill_half_life_years)?;
        non_negative("reskilling_frequency_years", self.reskilling_frequency_years)?;
        non_negative("current_market_demand", self.current_market_demand)?;

        let ai_exposure_band = Band::from_score("ai_exposure_level", self.ai_exposure_level)?;
        let automation_risk_band = Band::from_score("automation_risk", self.automation_risk)?;

        Ok(DerivedRecord {
            record: self,
            ai_exposure_band,
            automation_risk_band,
        })
    }
}

fn non_negative(field: &str, value: f64) -> DomainResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "{field} must be a finite number >= 0 (got {value})"
        )))
    }
}

/// A skill record plus its derived bands.
///
/// Only constructible through [`SkillRecord::derive`], so the bands always
/// agree with the scores they were computed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRecord {
    #[serde(flatten)]
    record: SkillRecord,
    ai_exposure_band: Band,
    automation_risk_band: Band,
}

impl DerivedRecord {
    pub fn record(&self) -> &SkillRecord {
        &self.record
    }

    pub fn skill_category(&self) -> &str {
        &self.record.skill_category
    }

    pub fn industry(&self) -> &str {
        &self.record.industry
    }

    pub fn ai_exposure_band(&self) -> Band {
        self.ai_exposure_band
    }

    pub fn automation_risk_band(&self) -> Band {
        self.automation_risk_band
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn record(category: &str, industry: &str, ai: f64, risk: f64) -> SkillRecord {
        SkillRecord {
            skill_category: category.to_string(),
            industry: industry.to_string(),
            ai_exposure_level: ai,
            automation_risk: risk,
            skill_half_life_years: 2.0,
            reskilling_frequency_years: 1.5,
            current_market_demand: 90.0,
        }
    }

    #[test]
    fn derive_attaches_both_bands_independently() {
        let derived = record("Tech", "Finance", 85.0, 60.0).derive().unwrap();
        assert_eq!(derived.ai_exposure_band(), Band::High);
        assert_eq!(derived.automation_risk_band(), Band::Medium);
        assert_eq!(derived.skill_category(), "Tech");
        assert_eq!(derived.industry(), "Finance");
    }

    #[test]
    fn derive_rejects_out_of_domain_scores() {
        assert!(record("Tech", "Finance", 101.0, 10.0).derive().is_err());
        assert!(record("Tech", "Finance", 10.0, -1.0).derive().is_err());
    }

    #[test]
    fn derive_rejects_negative_durations_and_blank_labels() {
        let mut r = record("Tech", "Finance", 10.0, 10.0);
        r.skill_half_life_years = -0.1;
        assert!(r.derive().is_err());

        let mut r = record("Tech", "Finance", 10.0, 10.0);
        r.current_market_demand = f64::NAN;
        assert!(r.derive().is_err());

        assert!(record("  ", "Finance", 10.0, 10.0).derive().is_err());
        assert!(record("Tech", "", 10.0, 10.0).derive().is_err());
    }

    #[test]
    fn derived_record_serializes_flat() {
        let derived = record("Tech", "Finance", 85.0, 60.0).derive().unwrap();
        let json = serde_json::to_value(&derived).unwrap();
        assert_eq!(json["skill_category"], "Tech");
        assert_eq!(json["ai_exposure_level"], 85.0);
        assert_eq!(json["ai_exposure_band"], "High");
        assert_eq!(json["automation_risk_band"], "Medium");
    }
}
