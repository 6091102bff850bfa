//! Sample Window
//!
//! Shared pollutant vocabulary for the pipeline and a bounded chronological
//! buffer of hourly air-quality samples.

mod window;

pub use window::{SampleWindow, DEFAULT_CAPACITY};

use serde::{Deserialize, Serialize};

/// Pollutants tracked by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    /// Fine particulate matter (PM2.5)
    Pm25,
    /// Nitrogen dioxide
    No2,
    /// Ozone
    O3,
}

impl Pollutant {
    /// All tracked pollutants, in canonical order
    pub const ALL: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::No2, Pollutant::O3];

    /// Get wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::No2 => "no2",
            Pollutant::O3 => "o3",
        }
    }

    /// Parse a wire identifier. Unknown identifiers yield `None`.
    pub fn parse(s: &str) -> Option<Pollutant> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pm25" => Some(Pollutant::Pm25),
            "no2" => Some(Pollutant::No2),
            "o3" => Some(Pollutant::O3),
            _ => None,
        }
    }
}

/// One hourly observation. Ordinal position in a series is its index;
/// samples are assumed evenly spaced at 1-hour intervals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// PM2.5 concentration (µg/m³)
    #[serde(default)]
    pub pm25: f64,
    /// NO2 concentration (µg/m³)
    #[serde(default)]
    pub no2: f64,
    /// O3 concentration (µg/m³)
    #[serde(default)]
    pub o3: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(pm25: f64, no2: f64, o3: f64) -> Self {
        Self { pm25, no2, o3 }
    }

    /// Get the value for a pollutant
    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::No2 => self.no2,
            Pollutant::O3 => self.o3,
        }
    }
}

/// Instantaneous reading as reported by a monitoring station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Wire identifier of the pollutant ("pm25", "no2", "o3", ...)
    pub parameter: String,
    /// Observed concentration
    pub value: f64,
    /// Unit string as reported upstream
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "µg/m³".to_string()
}

impl Measurement {
    /// Create a measurement with the default µg/m³ unit
    pub fn new(parameter: impl Into<String>, value: f64) -> Self {
        Self {
            parameter: parameter.into(),
            value,
            unit: default_unit(),
        }
    }

    /// Resolve the tracked pollutant, if any
    pub fn pollutant(&self) -> Option<Pollutant> {
        Pollutant::parse(&self.parameter)
    }
}
