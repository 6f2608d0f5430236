//! Climate report glue.
//!
//! Data acquisition and text generation are external services. This module
//! defines the seams they plug into and the facts the engine hands over:
//! fetch series → classify → extract facts → build prompt → generate text.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::classify::{Classification, Classifier};
use crate::code::KoppenCode;
use crate::config::ClassifierConfig;
use crate::series::MonthlyClimateSeries;

/// Source of monthly climate normals for a named location.
pub trait ClimateSource {
    fn monthly_series(&self, location: &str) -> Result<MonthlyClimateSeries>;
}

/// Text generation service that narrates a prompt.
pub trait ReportGenerator {
    fn generate(&self, prompt: &str) -> Result<String>;
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Facts about a classified location, as passed to the report generator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportFacts {
    pub location: String,
    pub code: KoppenCode,
    pub description: String,
    /// Mean over the winter half.
    pub winter_mean_c: f64,
    pub winter_mean_f: f64,
    /// Mean over the summer half.
    pub summer_mean_c: f64,
    pub summer_mean_f: f64,
    pub coldest_month_c: f64,
    pub hottest_month_c: f64,
    pub annual_precip_mm: f64,
}

impl ReportFacts {
    pub fn new(location: &str, classification: &Classification) -> Self {
        let stats = &classification.statistics;
        Self {
            location: location.to_string(),
            code: classification.code,
            description: classification.code.description(),
            winter_mean_c: stats.winter_mean_temp,
            winter_mean_f: celsius_to_fahrenheit(stats.winter_mean_temp),
            summer_mean_c: stats.summer_mean_temp,
            summer_mean_f: celsius_to_fahrenheit(stats.summer_mean_temp),
            coldest_month_c: stats.coldest_month_temp,
            hottest_month_c: stats.hottest_month_temp,
            annual_precip_mm: stats.annual_precip,
        }
    }

    /// Prompt text for the generator. Temperatures in °F, rounded to one
    /// decimal; precipitation in whole millimetres.
    pub fn prompt(&self) -> String {
        format!(
            "Generate a detailed climate report for {} with Köppen classification {} ({}). \
             Average winter temperature: {:.1}°F, \
             Average summer temperature: {:.1}°F, \
             Annual precipitation: {:.0} mm. \
             Include information about how this climate affects local agriculture, ecology, and lifestyle.",
            self.location,
            self.code,
            self.description,
            self.winter_mean_f,
            self.summer_mean_f,
            self.annual_precip_mm,
        )
    }
}

/// Output of [`climate_report`].
#[derive(Debug, Clone, Serialize)]
pub struct ClimateReport {
    pub facts: ReportFacts,
    pub text: String,
}

/// Fetch, classify and narrate one location.
///
/// Any failure aborts the report; a classification error is never replaced
/// by a guessed code.
pub fn climate_report(
    source: &dyn ClimateSource,
    generator: &dyn ReportGenerator,
    location: &str,
    config: &ClassifierConfig,
) -> Result<ClimateReport> {
    let series = source
        .monthly_series(location)
        .with_context(|| format!("fetching climate data for {location}"))?;

    let classification = Classifier::new(*config)
        .classify(&series)
        .with_context(|| format!("classifying climate of {location}"))?;

    let facts = ReportFacts::new(location, &classification);
    info!(location, code = %facts.code, "generating climate report");

    let text = generator
        .generate(&facts.prompt())
        .with_context(|| format!("generating report for {location}"))?;
    if text.trim().is_empty() {
        warn!(location, "report generator returned empty text");
    }

    Ok(ClimateReport { facts, text })
}
