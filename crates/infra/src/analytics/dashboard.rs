//! Full dashboard view for one selection: KPIs plus every chart.

use chrono::{DateTime, Utc};
use serde::Serialize;

use halflife_core::{Selection, SkillTable};

use super::charts::ChartSpec;
use super::kpis::{KpiCard, Kpis};

pub const DASHBOARD_TITLE: &str = "Skill Half-Life in the Age of AI";

/// Immutable snapshot computed fresh for each request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub selection: Selection,
    pub row_count: usize,
    pub kpis: Kpis,
    pub kpi_cards: Vec<KpiCard>,
    pub charts: Vec<ChartSpec>,
}

impl Dashboard {
    /// Filter `table` by `selection`, then aggregate.
    pub fn build(table: &SkillTable, selection: &Selection, generated_at: DateTime<Utc>) -> Self {
        let filtered = table.filter(selection);
        tracing::debug!(
            total_rows = table.len(),
            filtered_rows = filtered.len(),
            categories = selection.categories().len(),
            industries = selection.industries().len(),
            "building dashboard"
        );

        let kpis = Kpis::compute(&filtered);
        Self {
            title: DASHBOARD_TITLE.to_string(),
            generated_at,
            selection: selection.clone(),
            row_count: filtered.len(),
            kpis,
            kpi_cards: kpis.cards(),
            charts: ChartSpec::build_all(&filtered),
        }
    }
}
