//! Köppen–Geiger climate classification engine.
//!
//! Maps a representative year of monthly mean temperatures and monthly
//! precipitation totals to a climate code such as `Cfb`, `BS`, `Af` or `Dfc`.
//!
//! ```
//! use koppen_core::{classify, ClassifierConfig, MonthlyClimateSeries};
//!
//! let series = MonthlyClimateSeries::new(&[27.0; 12], &[250.0; 12])?;
//! let code = classify(&series, &ClassifierConfig::default())?;
//! assert_eq!(code.to_string(), "Af");
//! # Ok::<(), koppen_core::ClassifyError>(())
//! ```

pub mod classify;
pub mod code;
pub mod config;
pub mod error;
pub mod report;
pub mod series;
pub mod statistics;

pub use classify::{classify, classify_batch, Classification, Classifier};
pub use code::{
    AridPattern, KoppenCode, MainGroup, ParseCodeError, PolarType, SeasonalPattern,
    TemperatureLevel, TropicalPattern,
};
pub use config::{ClassifierConfig, Hemisphere};
pub use error::{ClassifyError, SeriesKind, ValidationError};
pub use report::{climate_report, ClimateReport, ClimateSource, ReportFacts, ReportGenerator};
pub use series::MonthlyClimateSeries;
pub use statistics::DerivedStatistics;
