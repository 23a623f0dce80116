//! Chart specifications handed to the presentation layer.
//!
//! A spec names the chart kind, its encodings (x/y/color/size) and the
//! table it plots. Drawing is left to whoever consumes the spec.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use halflife_core::{DomainError, SkillTable};

use super::summaries::{
    CategoryMean, IndustryBandCount, count_by_industry_and_band, mean_half_life_by_category,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Scatter,
    Histogram,
    Box,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// The six dashboard charts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartId {
    HalfLifeByCategory,
    ExposureVsHalfLife,
    AutomationRiskDistribution,
    DemandVsAutomationRisk,
    ReskillingByCategory,
    IndustryExposure,
}

impl ChartId {
    /// Display order on the dashboard.
    pub const ALL: [ChartId; 6] = [
        ChartId::HalfLifeByCategory,
        ChartId::ExposureVsHalfLife,
        ChartId::AutomationRiskDistribution,
        ChartId::DemandVsAutomationRisk,
        ChartId::ReskillingByCategory,
        ChartId::IndustryExposure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartId::HalfLifeByCategory => "half_life_by_category",
            ChartId::ExposureVsHalfLife => "exposure_vs_half_life",
            ChartId::AutomationRiskDistribution => "automation_risk_distribution",
            ChartId::DemandVsAutomationRisk => "demand_vs_automation_risk",
            ChartId::ReskillingByCategory => "reskilling_by_category",
            ChartId::IndustryExposure => "industry_exposure",
        }
    }
}

impl core::fmt::Display for ChartId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown chart id: {s}")))
    }
}

/// Table plotted by a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Records(SkillTable),
    CategoryMeans(Vec<CategoryMean>),
    IndustryBandCounts(Vec<IndustryBandCount>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            ChartData::Records(t) => t.len(),
            ChartData::CategoryMeans(v) => v.len(),
            ChartData::IndustryBandCounts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub id: ChartId,
    pub kind: ChartKind,
    pub title: String,
    pub x: String,
    pub y: Option<String>,
    pub color: Option<String>,
    pub size: Option<String>,
    pub orientation: Orientation,
    /// Bin count for histograms.
    pub bins: Option<u32>,
    /// Axis/legend labels keyed by field name.
    pub labels: BTreeMap<String, String>,
    pub data: ChartData,
}

impl ChartSpec {
    fn new(id: ChartId, kind: ChartKind, title: &str, x: &str, data: ChartData) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            x: x.to_string(),
            y: None,
            color: None,
            size: None,
            orientation: Orientation::Vertical,
            bins: None,
            labels: BTreeMap::new(),
            data,
        }
    }

    fn y(mut self, field: &str) -> Self {
        self.y = Some(field.to_string());
        self
    }

    fn color(mut self, field: &str) -> Self {
        self.color = Some(field.to_string());
        self
    }

    fn size(mut self, field: &str) -> Self {
        self.size = Some(field.to_string());
        self
    }

    fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    fn bins(mut self, bins: u32) -> Self {
        self.bins = Some(bins);
        self
    }

    fn label(mut self, field: &str, label: &str) -> Self {
        self.labels.insert(field.to_string(), label.to_string());
        self
    }

    /// Build one chart over an already-filtered table.
    pub fn build(id: ChartId, table: &SkillTable) -> Self {
        let rows = || ChartData::Records(table.clone());

        match id {
            ChartId::HalfLifeByCategory => Self::new(
                id,
                ChartKind::Bar,
                "Average Skill Half-Life by Skill Category",
                "skill_half_life_years",
                ChartData::CategoryMeans(mean_half_life_by_category(table)),
            )
            .y("skill_category")
            .horizontal()
            .label("skill_half_life_years", "Years")
            .label("skill_category", "Skill Category"),

            ChartId::ExposureVsHalfLife => Self::new(
                id,
                ChartKind::Scatter,
                "AI Exposure vs Skill Half-Life",
                "ai_exposure_level",
                rows(),
            )
            .y("skill_half_life_years")
            .size("current_market_demand")
            .color("skill_category")
            .label("ai_exposure_level", "AI Exposure Level")
            .label("skill_half_life_years", "Years"),

            ChartId::AutomationRiskDistribution => Self::new(
                id,
                ChartKind::Histogram,
                "Distribution of Automation Risk",
                "automation_risk",
                rows(),
            )
            .bins(10)
            .label("automation_risk", "Automation Risk Level"),

            ChartId::DemandVsAutomationRisk => Self::new(
                id,
                ChartKind::Scatter,
                "Market Demand vs Automation Risk",
                "automation_risk",
                rows(),
            )
            .y("current_market_demand")
            .size("skill_half_life_years")
            .color("skill_category")
            .label("automation_risk", "Automation Risk")
            .label("current_market_demand", "Market Demand"),

            ChartId::ReskillingByCategory => Self::new(
                id,
                ChartKind::Box,
                "Reskilling Frequency by Skill Category",
                "skill_category",
                rows(),
            )
            .y("reskilling_frequency_years")
            .label("reskilling_frequency_years", "Years"),

            ChartId::IndustryExposure => Self::new(
                id,
                ChartKind::Bar,
                "Industry Exposure to AI-Driven Skill Decay",
                "industry",
                ChartData::IndustryBandCounts(count_by_industry_and_band(table)),
            )
            .y("count")
            .color("ai_exposure_band")
            .label("count", "Number of Skills"),
        }
    }

    /// All six charts, in dashboard order.
    pub fn build_all(table: &SkillTable) -> Vec<Self> {
        ChartId::ALL.into_iter().map(|id| Self::build(id, table)).collect()
    }
}
