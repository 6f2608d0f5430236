//! Third letter (groups C and D) and the polar subtype.

use crate::code::{MainGroup, PolarType, TemperatureLevel};
use crate::statistics::DerivedStatistics;

/// Coldest month at or below this (°C) gives `d`, group D only.
pub const EXTREME_COLD_C: f64 = -38.0;
/// Hottest month at or above this (°C) gives `a`.
pub const HOT_SUMMER_C: f64 = 22.0;
/// At least this many months ≥ 10 °C give `b`.
pub const WARM_SUMMER_MONTHS: usize = 4;
/// Hottest month below this (°C) is ice cap when polar subdivision is enabled.
pub const ICE_CAP_HOTTEST_C: f64 = 0.0;

/// Evaluated in fixed order `d` → `a` → `b` → `c`.
///
/// A hot summer takes precedence over the warm-month count: a climate with
/// a 23 °C peak and six warm months is `a`, not `b`.
pub fn temperature_level(group: MainGroup, stats: &DerivedStatistics) -> TemperatureLevel {
    if group == MainGroup::Continental && stats.coldest_month_temp <= EXTREME_COLD_C {
        TemperatureLevel::ExtremelyColdWinter
    } else if stats.hottest_month_temp >= HOT_SUMMER_C {
        TemperatureLevel::HotSummer
    } else if stats.months_above_10c >= WARM_SUMMER_MONTHS {
        TemperatureLevel::WarmSummer
    } else {
        TemperatureLevel::ColdSummer
    }
}

/// `T` unless subdivision is on and even the hottest month stays below freezing.
pub fn polar_type(stats: &DerivedStatistics, subdivide: bool) -> PolarType {
    if subdivide && stats.hottest_month_temp < ICE_CAP_HOTTEST_C {
        PolarType::IceCap
    } else {
        PolarType::Tundra
    }
}
