//! Pollutant Threshold Tables

use sample_window::Pollutant;
use serde::{Deserialize, Serialize};

/// Health-risk severity of a crossed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl Severity {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Moderate => "moderate",
            Severity::Unhealthy => "unhealthy",
            Severity::VeryUnhealthy => "very_unhealthy",
            Severity::Hazardous => "hazardous",
        }
    }
}

/// One tier of a pollutant's threshold table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Concentration above which the tier fires (µg/m³, exclusive)
    pub threshold: f64,
    /// Severity assigned when the tier fires
    pub severity: Severity,
    /// Fixed alert message for this (pollutant, tier) pair
    pub message: &'static str,
}

const fn tier(threshold: f64, severity: Severity, message: &'static str) -> Tier {
    Tier {
        threshold,
        severity,
        message,
    }
}

// Tables are ordered most severe first; evaluation takes the first tier
// whose threshold is exceeded. NO2 and O3 carry no moderate tier.
const PM25_TIERS: [Tier; 4] = [
    tier(
        250.0,
        Severity::Hazardous,
        "Hazardous Air Quality - PM2.5 levels are extremely high",
    ),
    tier(
        150.0,
        Severity::VeryUnhealthy,
        "Very Unhealthy Air Quality - PM2.5 levels are very high",
    ),
    tier(
        100.0,
        Severity::Unhealthy,
        "Unhealthy Air Quality - PM2.5 levels exceed safe limits",
    ),
    tier(
        55.0,
        Severity::Moderate,
        "Moderate Air Quality - Sensitive groups should limit outdoor exposure",
    ),
];

const NO2_TIERS: [Tier; 3] = [
    tier(
        400.0,
        Severity::Hazardous,
        "Hazardous Air Quality - NO2 levels are extremely high",
    ),
    tier(
        200.0,
        Severity::VeryUnhealthy,
        "Very Unhealthy Air Quality - NO2 levels are very high",
    ),
    tier(
        40.0,
        Severity::Unhealthy,
        "Unhealthy Air Quality - NO2 levels exceed safe limits",
    ),
];

const O3_TIERS: [Tier; 3] = [
    tier(
        800.0,
        Severity::Hazardous,
        "Hazardous Air Quality - Ozone levels are extremely high",
    ),
    tier(
        400.0,
        Severity::VeryUnhealthy,
        "Very Unhealthy Air Quality - Ozone levels are very high",
    ),
    tier(
        200.0,
        Severity::Unhealthy,
        "Unhealthy Air Quality - Ozone levels exceed safe limits",
    ),
];

/// Threshold table for a pollutant, most severe tier first
pub fn tiers(pollutant: Pollutant) -> &'static [Tier] {
    match pollutant {
        Pollutant::Pm25 => &PM25_TIERS,
        Pollutant::No2 => &NO2_TIERS,
        Pollutant::O3 => &O3_TIERS,
    }
}

/// Find the most severe tier exceeded by `value`, if any
pub(crate) fn classify(pollutant: Pollutant, value: f64) -> Option<&'static Tier> {
    tiers(pollutant).iter().find(|t| value > t.threshold)
}
