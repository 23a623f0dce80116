//! Aggregations over the filtered working table.
//!
//! Everything here is a pure function of a `SkillTable`:
//! - `kpis`: the four scalar metrics
//! - `summaries`: group-by / cross-tab tables
//! - `charts`: chart specifications built from the above
//! - `dashboard`: filter + all of the above for one selection

pub mod charts;
pub mod dashboard;
pub mod kpis;
pub mod summaries;

pub use charts::{ChartData, ChartId, ChartKind, ChartSpec, Orientation};
pub use dashboard::{DASHBOARD_TITLE, Dashboard};
pub use kpis::{
    HIGH_SCORE_THRESHOLD, KpiCard, Kpis, count_high_automation_risk, mean_half_life,
    mean_reskilling_interval, pct_high_ai_exposure,
};
pub use summaries::{
    CategoryMean, IndustryBandCount, count_by_industry_and_band, mean_half_life_by_category,
};
