//! Scalar KPIs over a (possibly empty) table.
//!
//! Every function is total: an empty table yields `None` ("no data") for
//! means and percentages, and `0` for counts.

use serde::Serialize;

use halflife_core::SkillTable;

/// Scores strictly above this count as "high" (a score of exactly 70 does not).
pub const HIGH_SCORE_THRESHOLD: f64 = 70.0;

/// Running mean: stays finite for any finite inputs, however large.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (mean, n) = values.fold((0.0, 0usize), |(m, n), v| {
        let n = n + 1;
        (m + (v - m) / n as f64, n)
    });
    if n == 0 { None } else { Some(mean) }
}

/// Round to `places` decimals and drop trailing zeros, keeping one (`2.00` -> `2.0`).
fn format_rounded(value: f64, places: usize) -> String {
    let fixed = format!("{value:.places$}");
    if !fixed.contains('.') {
        return fixed;
    }
    let trimmed = fixed.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}

/// Arithmetic mean of `skill_half_life_years`.
pub fn mean_half_life(table: &SkillTable) -> Option<f64> {
    mean(table.iter().map(|r| r.record().skill_half_life_years))
}

/// Share of rows with `ai_exposure_level > 70`, in percent.
pub fn pct_high_ai_exposure(table: &SkillTable) -> Option<f64> {
    if table.is_empty() {
        return None;
    }
    let high = table
        .iter()
        .filter(|r| r.record().ai_exposure_level > HIGH_SCORE_THRESHOLD)
        .count();
    Some(100.0 * high as f64 / table.len() as f64)
}

/// Arithmetic mean of `reskilling_frequency_years`.
pub fn mean_reskilling_interval(table: &SkillTable) -> Option<f64> {
    mean(table.iter().map(|r| r.record().reskilling_frequency_years))
}

/// Number of rows with `automation_risk > 70`.
pub fn count_high_automation_risk(table: &SkillTable) -> usize {
    table
        .iter()
        .filter(|r| r.record().automation_risk > HIGH_SCORE_THRESHOLD)
        .count()
}

/// The four headline metrics for one filtered table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub mean_half_life: Option<f64>,
    pub pct_high_ai_exposure: Option<f64>,
    pub mean_reskilling_interval: Option<f64>,
    pub high_automation_risk_count: usize,
}

impl Kpis {
    pub fn compute(table: &SkillTable) -> Self {
        Self {
            mean_half_life: mean_half_life(table),
            pct_high_ai_exposure: pct_high_ai_exposure(table),
            mean_reskilling_interval: mean_reskilling_interval(table),
            high_automation_risk_count: count_high_automation_risk(table),
        }
    }

    /// Display form: labelled values rounded like the dashboard shows them
    /// (`2.0`, `5.75`, `33.3%`), with `"no data"` for empty means.
    pub fn cards(&self) -> Vec<KpiCard> {
        vec![
            KpiCard::new(
                "Mean Skill Half-Life (Years)",
                self.mean_half_life.map(|v| format_rounded(v, 2)),
            ),
            KpiCard::new(
                "High AI Exposure Skills (%)",
                self.pct_high_ai_exposure
                    .map(|v| format!("{}%", format_rounded(v, 1))),
            ),
            KpiCard::new(
                "Mean Reskilling Interval (Years)",
                self.mean_reskilling_interval.map(|v| format_rounded(v, 2)),
            ),
            KpiCard::new(
                "High Automation Risk Skills",
                Some(self.high_automation_risk_count.to_string()),
            ),
        ]
    }
}

/// A labelled, formatted KPI ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub label: String,
    pub value: String,
}

impl KpiCard {
    pub const NO_DATA: &'static str = "no data";

    fn new(label: &str, value: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.unwrap_or_else(|| Self::NO_DATA.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halflife_core::SkillRecord;

    fn row(ai: f64, risk: f64, half_life: f64, reskill: f64) -> SkillRecord {
        SkillRecord {
            skill_category: "Tech".to_string(),
            industry: "Finance".to_string(),
            ai_exposure_level: ai,
            automation_risk: risk,
            skill_half_life_years: half_life,
            reskilling_frequency_years: reskill,
            current_market_demand: 50.0,
        }
    }

    #[test]
    fn single_row_scenario() {
        let table = SkillTable::derive(vec![row(85.0, 60.0, 2.0, 1.5)]).unwrap();
        assert_eq!(mean_half_life(&table), Some(2.0));
        assert_eq!(pct_high_ai_exposure(&table), Some(100.0));
        assert_eq!(mean_reskilling_interval(&table), Some(1.5));
        assert_eq!(count_high_automation_risk(&table), 0);
    }

    #[test]
    fn empty_table_yields_sentinels() {
        let table = SkillTable::empty();
        let kpis = Kpis::compute(&table);
        assert_eq!(kpis.mean_half_life, None);
        assert_eq!(kpis.pct_high_ai_exposure, None);
        assert_eq!(kpis.mean_reskilling_interval, None);
        assert_eq!(kpis.high_automation_risk_count, 0);

        let cards = kpis.cards();
        assert_eq!(cards[0].value, KpiCard::NO_DATA);
        assert_eq!(cards[1].value, KpiCard::NO_DATA);
        assert_eq!(cards[2].value, KpiCard::NO_DATA);
        assert_eq!(cards[3].value, "0");
    }

    #[test]
    fn threshold_is_strict() {
        let table = SkillTable::derive(vec![
            row(70.0, 70.0, 1.0, 1.0),
            row(70.1, 70.1, 1.0, 1.0),
            row(100.0, 100.0, 1.0, 1.0),
            row(10.0, 0.0, 1.0, 1.0),
        ])
        .unwrap();

        assert_eq!(count_high_automation_risk(&table), 2);
        assert_eq!(pct_high_ai_exposure(&table), Some(50.0));
    }

    #[test]
    fn means_and_cards_are_rounded_for_display() {
        let table = SkillTable::derive(vec![
            row(80.0, 10.0, 1.0, 1.0),
            row(10.0, 10.0, 2.0, 2.0),
            row(10.0, 80.0, 2.0, 2.5),
        ])
        .unwrap();
        let kpis = Kpis::compute(&table);

        assert!((kpis.mean_half_life.unwrap() - 5.0 / 3.0).abs() < 1e-12);
        let cards = kpis.cards();
        assert_eq!(cards[0].label, "Mean Skill Half-Life (Years)");
        assert_eq!(cards[0].value, "1.67");
        assert_eq!(cards[1].value, "33.3%");
        assert_eq!(cards[2].value, "1.83");
        assert_eq!(cards[3].value, "1");
    }

    #[test]
    fn cards_drop_trailing_zeros() {
        let table = SkillTable::derive(vec![row(85.0, 60.0, 2.0, 1.5)]).unwrap();
        let cards = Kpis::compute(&table).cards();
        assert_eq!(cards[0].value, "2.0");
        assert_eq!(cards[1].value, "100.0%");
        assert_eq!(cards[2].value, "1.5");

        assert_eq!(format_rounded(5.75, 2), "5.75");
        assert_eq!(format_rounded(50.0, 1), "50.0");
        assert_eq!(format_rounded(7.0, 0), "7");
    }

    #[test]
    fn huge_finite_values_keep_a_finite_mean() {
        let table = SkillTable::derive(vec![
            row(10.0, 10.0, 1e308, 1e308),
            row(10.0, 10.0, 1e308, 1e308),
        ])
        .unwrap();
        let kpis = Kpis::compute(&table);

        let mean = kpis.mean_half_life.unwrap();
        assert!(mean.is_finite());
        assert!((mean - 1e308).abs() / 1e308 < 1e-12);
        assert!(kpis.mean_reskilling_interval.unwrap().is_finite());

        let json = serde_json::to_value(kpis).unwrap();
        assert!(!json["mean_half_life"].is_null());
        assert_ne!(kpis.cards()[0].value, "inf");
    }
}
