//! Error types for series validation and classification.

use thiserror::Error;

use crate::series::month_name;

/// Which of the two monthly arrays a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Temperature,
    Precipitation,
}

impl std::fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesKind::Temperature => f.write_str("temperature"),
            SeriesKind::Precipitation => f.write_str("precipitation"),
        }
    }
}

/// Input series rejected before any statistic is computed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{series} series has {len} entries, expected 12")]
    WrongLength { series: SeriesKind, len: usize },

    #[error("{series} for {} is not finite ({value})", month_name(*.month))]
    NonFinite {
        series: SeriesKind,
        month: usize,
        value: f64,
    },

    #[error("precipitation for {} is negative ({value} mm)", month_name(*.month))]
    NegativePrecipitation { month: usize, value: f64 },
}

/// Failure of a single classification call. Never partial.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("invalid climate series: {0}")]
    Validation(#[from] ValidationError),

    /// The main-group decision reached no branch.
    #[error("no main group matches (coldest month {coldest} °C, hottest month {hottest} °C)")]
    Unclassifiable { coldest: f64, hottest: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_month() {
        let e = ValidationError::NegativePrecipitation { month: 2, value: -4.0 };
        assert_eq!(e.to_string(), "precipitation for March is negative (-4 mm)");

        let e = ValidationError::NonFinite {
            series: SeriesKind::Temperature,
            month: 11,
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "temperature for December is not finite (NaN)");
    }

    #[test]
    fn validation_converts_into_classify_error() {
        let e: ClassifyError = ValidationError::WrongLength {
            series: SeriesKind::Precipitation,
            len: 11,
        }
        .into();
        assert!(matches!(e, ClassifyError::Validation(_)));
        assert_eq!(
            e.to_string(),
            "invalid climate series: precipitation series has 11 entries, expected 12"
        );
    }
}
