use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use halflife_core::{Selection, SkillTable};

// -------------------------
// Request DTOs
// -------------------------

/// Multi-select state sent by the client.
///
/// A missing/`null` dimension means "default" (every value present); an
/// empty array selects nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub industries: Option<Vec<String>>,
}

impl SelectionRequest {
    pub fn into_selection(self, table: &SkillTable) -> Selection {
        let mut selection = Selection::all(table);
        if let Some(categories) = self.categories {
            selection = selection.with_categories(categories);
        }
        if let Some(industries) = self.industries {
            selection = selection.with_industries(industries);
        }
        selection
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub source: String,
    pub loaded: bool,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use halflife_core::SkillRecord;

    fn table() -> SkillTable {
        let row = |c: &str, i: &str| SkillRecord {
            skill_category: c.to_string(),
            industry: i.to_string(),
            ai_exposure_level: 50.0,
            automation_risk: 50.0,
            skill_half_life_years: 3.0,
            reskilling_frequency_years: 1.0,
            current_market_demand: 50.0,
        };
        SkillTable::derive(vec![row("Tech", "Finance"), row("Creative", "Media")]).unwrap()
    }

    #[test]
    fn missing_dimensions_default_to_everything() {
        let req: SelectionRequest = serde_json::from_str("{}").unwrap();
        let selection = req.into_selection(&table());
        assert_eq!(selection.categories().len(), 2);
        assert_eq!(selection.industries().len(), 2);
    }

    #[test]
    fn explicit_empty_array_selects_nothing() {
        let req: SelectionRequest =
            serde_json::from_str(r#"{"categories": [], "industries": null}"#).unwrap();
        let selection = req.into_selection(&table());
        assert!(selection.categories().is_empty());
        assert_eq!(selection.industries().len(), 2);
    }
}
