//! Aggregate figures derived once per series.
//!
//! Every decision stage reads from the same `DerivedStatistics`, so the
//! thresholds and comparisons of one stage can never disagree with another.

use serde::Serialize;

use crate::config::Hemisphere;
use crate::series::MonthlyClimateSeries;

/// Month counted as "warm" at or above this mean temperature (°C).
pub const WARM_MONTH_C: f64 = 10.0;

/// Summary statistics of a `MonthlyClimateSeries`.
///
/// Seasonal fields refer to the summer/winter halves of the hemisphere the
/// statistics were derived for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedStatistics {
    pub hemisphere: Hemisphere,
    /// Sum of the twelve monthly totals, mm.
    pub annual_precip: f64,
    /// Arithmetic mean of the twelve monthly means, °C.
    pub annual_mean_temp: f64,
    pub coldest_month_temp: f64,
    pub hottest_month_temp: f64,
    /// Months with mean temperature ≥ 10 °C.
    pub months_above_10c: usize,
    pub summer_precip: f64,
    pub winter_precip: f64,
    pub wettest_summer_month_precip: f64,
    pub driest_summer_month_precip: f64,
    pub wettest_winter_month_precip: f64,
    pub driest_winter_month_precip: f64,
    /// Driest month of the whole year, mm.
    pub driest_month_precip: f64,
    /// Mean temperature over the summer half, °C.
    pub summer_mean_temp: f64,
    /// Mean temperature over the winter half, °C.
    pub winter_mean_temp: f64,
}

impl DerivedStatistics {
    pub fn derive(series: &MonthlyClimateSeries, hemisphere: Hemisphere) -> Self {
        let temps = series.temperature();
        let precips = series.precipitation();
        let summer = hemisphere.summer_months();
        let winter = hemisphere.winter_months();

        let summer_p = summer.map(|m| precips[m]);
        let winter_p = winter.map(|m| precips[m]);

        Self {
            hemisphere,
            annual_precip: precips.iter().sum(),
            annual_mean_temp: mean(temps),
            coldest_month_temp: min(temps),
            hottest_month_temp: max(temps),
            months_above_10c: temps.iter().filter(|&&t| t >= WARM_MONTH_C).count(),
            summer_precip: summer_p.iter().sum(),
            winter_precip: winter_p.iter().sum(),
            wettest_summer_month_precip: max(&summer_p),
            driest_summer_month_precip: min(&summer_p),
            wettest_winter_month_precip: max(&winter_p),
            driest_winter_month_precip: min(&winter_p),
            driest_month_precip: min(precips),
            summer_mean_temp: mean(&summer.map(|m| temps[m])),
            winter_mean_temp: mean(&winter.map(|m| temps[m])),
        }
    }

    /// Share of annual precipitation falling in the summer half (0 for a rainless year).
    pub fn summer_precip_fraction(&self) -> f64 {
        if self.annual_precip > 0.0 {
            self.summer_precip / self.annual_precip
        } else {
            0.0
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn min(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
