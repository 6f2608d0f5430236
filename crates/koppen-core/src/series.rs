//! Monthly climate series: the sole input to the classifier.
//!
//! Twelve monthly mean temperatures (°C) and twelve monthly precipitation
//! totals (mm), index 0 = January. Construction validates the data, so a
//! `MonthlyClimateSeries` in hand is always classifiable input.

use serde::{Deserialize, Serialize};

use crate::error::{SeriesKind, ValidationError};

pub const MONTHS: usize = 12;

const MONTH_NAMES: [&str; MONTHS] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// English name for a zero-based month index.
pub fn month_name(month: usize) -> &'static str {
    MONTH_NAMES.get(month).copied().unwrap_or("unknown month")
}

/// A validated representative year of monthly climate data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries", into = "RawSeries")]
pub struct MonthlyClimateSeries {
    temperature: [f64; MONTHS],
    precipitation: [f64; MONTHS],
}

/// Unchecked wire shape, validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawSeries {
    temperature: Vec<f64>,
    precipitation: Vec<f64>,
}

impl TryFrom<RawSeries> for MonthlyClimateSeries {
    type Error = ValidationError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::new(&raw.temperature, &raw.precipitation)
    }
}

impl From<MonthlyClimateSeries> for RawSeries {
    fn from(s: MonthlyClimateSeries) -> Self {
        Self {
            temperature: s.temperature.to_vec(),
            precipitation: s.precipitation.to_vec(),
        }
    }
}

impl MonthlyClimateSeries {
    /// Validate and build a series.
    ///
    /// Fails if either slice does not hold exactly 12 values, if any value is
    /// NaN or infinite, or if any precipitation total is negative. Nothing is
    /// truncated, padded or clamped.
    pub fn new(temperature: &[f64], precipitation: &[f64]) -> Result<Self, ValidationError> {
        let temperature = checked_array(temperature, SeriesKind::Temperature)?;
        let precipitation = checked_array(precipitation, SeriesKind::Precipitation)?;

        if let Some((month, &value)) = precipitation.iter().enumerate().find(|(_, p)| **p < 0.0) {
            return Err(ValidationError::NegativePrecipitation { month, value });
        }

        Ok(Self { temperature, precipitation })
    }

    /// Monthly mean temperatures in °C, January first.
    pub fn temperature(&self) -> &[f64; MONTHS] {
        &self.temperature
    }

    /// Monthly precipitation totals in mm, January first.
    pub fn precipitation(&self) -> &[f64; MONTHS] {
        &self.precipitation
    }
}

fn checked_array(values: &[f64], series: SeriesKind) -> Result<[f64; MONTHS], ValidationError> {
    let array: [f64; MONTHS] = values
        .try_into()
        .map_err(|_| ValidationError::WrongLength { series, len: values.len() })?;

    if let Some((month, &value)) = array.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ValidationError::NonFinite { series, month, value });
    }

    Ok(array)
}
