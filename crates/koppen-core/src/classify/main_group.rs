//! First letter: main climate group.
//!
//! Priority order B → E → A → D → C. Aridity is tested against a
//! temperature-scaled threshold before any temperature rule, so a location
//! with tropical temperatures can still come out arid.

use crate::code::MainGroup;
use crate::error::ClassifyError;
use crate::statistics::DerivedStatistics;

/// Summer share of annual precipitation above which the threshold is raised.
pub const SUMMER_RAIN_FRACTION: f64 = 0.7;
/// mm of threshold per °C of annual mean temperature.
pub const ARIDITY_PER_DEGREE: f64 = 20.0;
/// Threshold offset for summer-concentrated rainfall, mm.
pub const SUMMER_RAIN_OFFSET_MM: f64 = 280.0;

/// Hottest month below this (°C) is polar.
pub const POLAR_HOTTEST_C: f64 = 10.0;
/// Coldest month at or above this (°C) is tropical.
pub const TROPICAL_COLDEST_C: f64 = 18.0;
/// Coldest month below this (°C) is continental.
pub const CONTINENTAL_COLDEST_C: f64 = -3.0;

/// Aridity threshold in mm of annual precipitation.
///
/// `20 × T` for evenly spread or winter rain, `20 × T + 280` when more than
/// 70 % of the year's rain falls in the summer half. Negative for cold
/// climates, which therefore never classify as arid.
pub fn aridity_threshold(stats: &DerivedStatistics) -> f64 {
    let base = ARIDITY_PER_DEGREE * stats.annual_mean_temp;
    if stats.summer_precip > SUMMER_RAIN_FRACTION * stats.annual_precip {
        base + SUMMER_RAIN_OFFSET_MM
    } else {
        base
    }
}

/// Pick the main group. `threshold` is the value from [`aridity_threshold`].
///
/// Every finite input lands in exactly one group; the trailing error arm only
/// fires if the temperature bands stop covering the number line.
pub fn main_group(stats: &DerivedStatistics, threshold: f64) -> Result<MainGroup, ClassifyError> {
    let coldest = stats.coldest_month_temp;
    let hottest = stats.hottest_month_temp;

    if stats.annual_precip < threshold {
        Ok(MainGroup::Arid)
    } else if hottest < POLAR_HOTTEST_C {
        Ok(MainGroup::Polar)
    } else if coldest >= TROPICAL_COLDEST_C {
        Ok(MainGroup::Tropical)
    } else if coldest < CONTINENTAL_COLDEST_C {
        Ok(MainGroup::Continental)
    } else if (CONTINENTAL_COLDEST_C..TROPICAL_COLDEST_C).contains(&coldest) {
        Ok(MainGroup::Temperate)
    } else {
        Err(ClassifyError::Unclassifiable { coldest, hottest })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Hemisphere;
    use crate::series::MonthlyClimateSeries;
    use approx::assert_relative_eq;

    fn stats(t: [f64; 12], p: [f64; 12]) -> DerivedStatistics {
        let series = MonthlyClimateSeries::new(&t, &p).unwrap();
        DerivedStatistics::derive(&series, Hemisphere::North)
    }

    /// Coldest month `cold`, all other months `warm`; generous even rain.
    fn with_coldest(cold: f64, warm: f64) -> DerivedStatistics {
        let mut t = [warm; 12];
        t[0] = cold;
        stats(t, [100.0; 12])
    }

    fn group(s: &DerivedStatistics) -> MainGroup {
        main_group(s, aridity_threshold(s)).unwrap()
    }

    #[test]
    fn threshold_without_summer_concentration() {
        let s = stats([15.0; 12], [50.0; 12]);
        assert_relative_eq!(aridity_threshold(&s), 300.0);
    }

    #[test]
    fn threshold_with_summer_concentration() {
        let mut p = [5.0; 12];
        for m in 3..9 {
            p[m] = 100.0;
        }
        let s = stats([15.0; 12], p);
        assert!(s.summer_precip > 0.7 * s.annual_precip);
        assert_relative_eq!(aridity_threshold(&s), 580.0);
    }

    /// Exactly 70 % in summer is not "more than 70 %".
    #[test]
    fn threshold_fraction_is_strict() {
        let mut p = [0.0; 12];
        p[6] = 70.0;
        p[0] = 30.0;
        let s = stats([15.0; 12], p);
        assert_relative_eq!(aridity_threshold(&s), 300.0);
    }

    #[test]
    fn tropical_boundary_is_inclusive() {
        assert_eq!(group(&with_coldest(18.0, 26.0)), MainGroup::Tropical);
        assert_eq!(group(&with_coldest(17.99, 26.0)), MainGroup::Temperate);
    }

    #[test]
    fn continental_boundary_is_strict() {
        assert_eq!(group(&with_coldest(-3.0, 20.0)), MainGroup::Temperate);
        assert_eq!(group(&with_coldest(-3.01, 20.0)), MainGroup::Continental);
    }

    #[test]
    fn polar_when_hottest_below_ten() {
        assert_eq!(group(&with_coldest(-30.0, 9.9)), MainGroup::Polar);
        assert_eq!(group(&with_coldest(-30.0, 10.0)), MainGroup::Continental);
    }

    /// Tropical temperatures with too little rain are arid.
    #[test]
    fn aridity_overrides_temperature_groups() {
        let s = stats([27.0; 12], [20.0; 12]);
        assert!(s.coldest_month_temp >= TROPICAL_COLDEST_C);
        assert!(s.annual_precip < aridity_threshold(&s));
        assert_eq!(group(&s), MainGroup::Arid);
    }

    #[test]
    fn non_finite_figures_are_unclassifiable() {
        let mut s = with_coldest(5.0, 20.0);
        s.coldest_month_temp = f64::NAN;
        let err = main_group(&s, f64::NEG_INFINITY).unwrap_err();
        assert!(matches!(err, ClassifyError::Unclassifiable { .. }), "got {err:?}");
    }
}
