//! Köppen–Geiger classifier.
//!
//! Pipeline:
//!   statistics → main group (B, E, A, D, C) → precipitation letter →
//!   temperature letter → code assembly.
//!
//! Each stage only runs the rules that the previous stage's outcome allows:
//! B stops after its precipitation letter, E collapses to its subtype, and
//! only C and D get a temperature letter.

pub mod main_group;
pub mod precipitation;
pub mod temperature;

use serde::Serialize;
use tracing::debug;

use crate::code::{KoppenCode, MainGroup};
use crate::config::ClassifierConfig;
use crate::error::ClassifyError;
use crate::series::MonthlyClimateSeries;
use crate::statistics::DerivedStatistics;

use main_group::{aridity_threshold, main_group};
use precipitation::{arid_pattern, seasonal_pattern, tropical_pattern};
use temperature::{polar_type, temperature_level};

/// A code together with the figures it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub code: KoppenCode,
    pub statistics: DerivedStatistics,
    /// Aridity threshold in mm that the annual total was compared against.
    pub aridity_threshold_mm: f64,
}

/// Stateless classifier bound to a configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a validated series and keep the derived statistics.
    pub fn classify(&self, series: &MonthlyClimateSeries) -> Result<Classification, ClassifyError> {
        let stats = DerivedStatistics::derive(series, self.config.hemisphere);
        let threshold = aridity_threshold(&stats);
        let group = main_group(&stats, threshold)?;

        debug!(
            group = %group.letter(),
            annual_precip_mm = stats.annual_precip,
            aridity_threshold_mm = threshold,
            coldest_c = stats.coldest_month_temp,
            hottest_c = stats.hottest_month_temp,
            "main group"
        );

        let code = match group {
            MainGroup::Arid => KoppenCode::Arid(arid_pattern(&stats, threshold)),
            MainGroup::Polar => KoppenCode::Polar(polar_type(&stats, self.config.polar_subdivision)),
            MainGroup::Tropical => KoppenCode::Tropical(tropical_pattern(&stats)),
            MainGroup::Temperate => {
                KoppenCode::Temperate(seasonal_pattern(&stats), temperature_level(group, &stats))
            }
            MainGroup::Continental => {
                KoppenCode::Continental(seasonal_pattern(&stats), temperature_level(group, &stats))
            }
        };

        debug!(code = %code, hemisphere = ?self.config.hemisphere, "classified");

        Ok(Classification {
            code,
            statistics: stats,
            aridity_threshold_mm: threshold,
        })
    }

    /// Validate raw monthly arrays, then classify.
    pub fn classify_months(
        &self,
        temperature: &[f64],
        precipitation: &[f64],
    ) -> Result<Classification, ClassifyError> {
        let series = MonthlyClimateSeries::new(temperature, precipitation)?;
        self.classify(&series)
    }
}

/// Classify one series and return just the code.
pub fn classify(
    series: &MonthlyClimateSeries,
    config: &ClassifierConfig,
) -> Result<KoppenCode, ClassifyError> {
    Classifier::new(*config).classify(series).map(|c| c.code)
}

/// Classify many independent series, preserving input order.
///
/// With the `threading` feature the calls are spread over the rayon pool;
/// each call is independent so the result is identical either way.
pub fn classify_batch(
    series: &[MonthlyClimateSeries],
    config: &ClassifierConfig,
) -> Vec<Result<KoppenCode, ClassifyError>> {
    #[cfg(feature = "threading")]
    {
        use rayon::prelude::*;
        series.par_iter().map(|s| classify(s, config)).collect()
    }
    #[cfg(not(feature = "threading"))]
    {
        series.iter().map(|s| classify(s, config)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{AridPattern, PolarType, SeasonalPattern, TemperatureLevel, TropicalPattern};
    use crate::config::Hemisphere;
    use crate::error::ValidationError;

    fn series(t: [f64; 12], p: [f64; 12]) -> MonthlyClimateSeries {
        MonthlyClimateSeries::new(&t, &p).unwrap()
    }

    fn code(t: [f64; 12], p: [f64; 12]) -> String {
        classify(&series(t, p), &ClassifierConfig::default()).unwrap().to_string()
    }

    #[test]
    fn tropical_rainforest() {
        assert_eq!(code([27.0; 12], [250.0; 12]), "Af");
    }

    /// Arid codes carry no temperature letter.
    #[test]
    fn arid_codes_have_two_letters() {
        let c = classify(&series([30.0; 12], [1.0; 12]), &ClassifierConfig::default()).unwrap();
        assert_eq!(c, KoppenCode::Arid(AridPattern::Desert));
        assert_eq!(c.to_string().len(), 2);
    }

    #[test]
    fn polar_defaults_to_et() {
        let t = [-30.0, -30.0, -25.0, -20.0, -10.0, -3.0, -1.0, -2.0, -8.0, -15.0, -22.0, -28.0];
        let s = series(t, [10.0; 12]);
        assert_eq!(classify(&s, &ClassifierConfig::default()).unwrap(), KoppenCode::Polar(PolarType::Tundra));

        let cfg = ClassifierConfig { polar_subdivision: true, ..Default::default() };
        assert_eq!(classify(&s, &cfg).unwrap(), KoppenCode::Polar(PolarType::IceCap));
    }

    #[test]
    fn classification_keeps_statistics() {
        let s = series([27.0; 12], [250.0; 12]);
        let c = Classifier::default().classify(&s).unwrap();
        assert_eq!(c.code, KoppenCode::Tropical(TropicalPattern::Rainforest));
        assert_eq!(c.statistics.annual_precip, 3000.0);
        assert_eq!(c.aridity_threshold_mm, 540.0);
    }

    #[test]
    fn classify_months_validates_first() {
        let err = Classifier::default().classify_months(&[10.0; 11], &[50.0; 12]).unwrap_err();
        assert!(
            matches!(err, ClassifyError::Validation(ValidationError::WrongLength { len: 11, .. })),
            "got {err:?}"
        );
    }

    /// A southern Mediterranean climate (wet Jun–Aug) is `Cs` only with
    /// southern windows.
    #[test]
    fn hemisphere_changes_seasonal_letter() {
        let t = [23.0, 23.0, 21.0, 18.0, 15.0, 13.0, 12.0, 13.0, 14.0, 16.0, 19.0, 21.0];
        let p = [12.0, 10.0, 18.0, 45.0, 80.0, 95.0, 90.0, 75.0, 50.0, 35.0, 20.0, 12.0];
        let s = series(t, p);

        let south = classify(&s, &ClassifierConfig { hemisphere: Hemisphere::South, ..Default::default() })
            .unwrap();
        assert_eq!(
            south,
            KoppenCode::Temperate(SeasonalPattern::DrySummer, TemperatureLevel::HotSummer)
        );

        let north = classify(&s, &ClassifierConfig::default()).unwrap();
        assert_ne!(north.precipitation_letter(), 's');
    }

    #[test]
    fn batch_preserves_order_and_failures() {
        let input = vec![
            series([27.0; 12], [250.0; 12]),
            series([30.0; 12], [1.0; 12]),
            series([27.0; 12], [250.0; 12]),
        ];
        let out = classify_batch(&input, &ClassifierConfig::default());
        let codes: Vec<String> = out.into_iter().map(|r| r.unwrap().to_string()).collect();
        assert_eq!(codes, ["Af", "BW", "Af"]);
    }
}
