//! Classifier configuration.
//!
//! The rules themselves are fixed; configuration only selects which months
//! count as the warm and cold halves of the year and whether the polar group
//! is split into tundra and ice cap.

use serde::{Deserialize, Serialize};

/// Hemisphere of the location, used to align the seasonal windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hemisphere {
    #[default]
    North,
    South,
}

impl Hemisphere {
    /// North for latitude ≥ 0 (the equator included), South otherwise.
    /// Non-finite latitudes fall back to North.
    pub fn from_latitude(lat_deg: f64) -> Self {
        if lat_deg < 0.0 {
            Hemisphere::South
        } else {
            Hemisphere::North
        }
    }

    /// Zero-based month indices of the summer half (April–September in the north).
    pub fn summer_months(self) -> [usize; 6] {
        match self {
            Hemisphere::North => [3, 4, 5, 6, 7, 8],
            Hemisphere::South => [9, 10, 11, 0, 1, 2],
        }
    }

    /// Zero-based month indices of the winter half (October–March in the north).
    pub fn winter_months(self) -> [usize; 6] {
        match self {
            Hemisphere::North => [9, 10, 11, 0, 1, 2],
            Hemisphere::South => [3, 4, 5, 6, 7, 8],
        }
    }
}

/// Options for a classification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Seasonal window alignment. Default: North.
    pub hemisphere: Hemisphere,
    /// Split group E into `ET` (tundra) and `EF` (ice cap).
    /// Default false: every polar climate is reported as `ET`.
    pub polar_subdivision: bool,
}

impl ClassifierConfig {
    /// Default config with the hemisphere taken from a latitude.
    pub fn for_latitude(lat_deg: f64) -> Self {
        Self {
            hemisphere: Hemisphere::from_latitude(lat_deg),
            ..Self::default()
        }
    }
}
