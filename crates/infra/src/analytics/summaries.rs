//! Grouped summary tables (group-by mean, cross-tabulation).

use std::collections::BTreeMap;

use serde::Serialize;

use halflife_core::{Band, SkillTable};

/// Mean half-life of one skill category.
///
/// Field names match the source columns so chart specs can reference them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMean {
    pub skill_category: String,
    pub skill_half_life_years: f64,
}

/// Row count of one (industry, AI-exposure band) cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryBandCount {
    pub industry: String,
    pub ai_exposure_band: Band,
    pub count: usize,
}

/// Group by `skill_category`, mean of `skill_half_life_years`, ordered by category.
pub fn mean_half_life_by_category(table: &SkillTable) -> Vec<CategoryMean> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in table {
        // Running mean per group.
        let (mean, n) = groups.entry(row.skill_category()).or_insert((0.0, 0));
        *n += 1;
        *mean += (row.record().skill_half_life_years - *mean) / *n as f64;
    }

    groups
        .into_iter()
        .map(|(category, (mean, _))| CategoryMean {
            skill_category: category.to_string(),
            skill_half_life_years: mean,
        })
        .collect()
}

/// Cross-tabulate `industry` × `ai_exposure_band`.
///
/// Ordered by industry, then band (`Low`, `Medium`, `High`). Empty cells are omitted.
pub fn count_by_industry_and_band(table: &SkillTable) -> Vec<IndustryBandCount> {
    let mut cells: BTreeMap<(&str, Band), usize> = BTreeMap::new();
    for row in table {
        *cells.entry((row.industry(), row.ai_exposure_band())).or_insert(0) += 1;
    }

    cells
        .into_iter()
        .map(|((industry, band), count)| IndustryBandCount {
            industry: industry.to_string(),
            ai_exposure_band: band,
            count,
        })
        .collect()
}
