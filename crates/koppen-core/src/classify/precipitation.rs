//! Second letter: seasonal precipitation pattern.

use crate::code::{AridPattern, SeasonalPattern, TropicalPattern};
use crate::statistics::DerivedStatistics;

/// Driest month at or above this (mm) makes a tropical climate fully humid.
pub const TROPICAL_HUMID_MM: f64 = 60.0;
/// Dry-summer test: driest summer month must also be below this (mm).
pub const DRY_SUMMER_MAX_MM: f64 = 40.0;

/// `f`, `w` or `m` for group A.
///
/// A dry month counts against a savanna only if the year as a whole is too
/// dry to compensate: the cut-off is `100 − P/25` mm.
pub fn tropical_pattern(stats: &DerivedStatistics) -> TropicalPattern {
    let driest = stats.driest_month_precip;
    if driest >= TROPICAL_HUMID_MM {
        TropicalPattern::Rainforest
    } else if driest < 100.0 - stats.annual_precip / 25.0 {
        TropicalPattern::Savanna
    } else {
        TropicalPattern::Monsoon
    }
}

/// `W` below half the aridity threshold, `S` otherwise.
pub fn arid_pattern(stats: &DerivedStatistics, threshold: f64) -> AridPattern {
    if stats.annual_precip < threshold / 2.0 {
        AridPattern::Desert
    } else {
        AridPattern::Steppe
    }
}

/// `s`, `w` or `f`, shared by groups C and D. Dry summer is tested first.
pub fn seasonal_pattern(stats: &DerivedStatistics) -> SeasonalPattern {
    let dry_summer = stats.driest_summer_month_precip < stats.wettest_winter_month_precip / 3.0
        && stats.driest_summer_month_precip < DRY_SUMMER_MAX_MM;

    if dry_summer {
        SeasonalPattern::DrySummer
    } else if stats.driest_winter_month_precip < stats.wettest_summer_month_precip / 10.0 {
        SeasonalPattern::DryWinter
    } else {
        SeasonalPattern::FullyHumid
    }
}
