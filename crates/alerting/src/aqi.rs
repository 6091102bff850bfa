//! AQI Summary Classification

use serde::{Deserialize, Serialize};

/// Air quality index level derived from a PM2.5 concentration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AqiLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

impl AqiLevel {
    /// Classify an average PM2.5 concentration (µg/m³)
    pub fn from_pm25(value: f64) -> Self {
        if value <= 12.0 {
            AqiLevel::Good
        } else if value <= 35.4 {
            AqiLevel::Moderate
        } else if value <= 55.4 {
            AqiLevel::UnhealthySensitive
        } else if value <= 150.4 {
            AqiLevel::Unhealthy
        } else if value <= 250.4 {
            AqiLevel::VeryUnhealthy
        } else {
            AqiLevel::Hazardous
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    /// Short health guidance for the level
    pub fn description(&self) -> &'static str {
        match self {
            AqiLevel::Good => "Air quality is satisfactory",
            AqiLevel::Moderate => "Acceptable for most people",
            AqiLevel::UnhealthySensitive => "Sensitive groups may experience effects",
            AqiLevel::Unhealthy => "Everyone may experience effects",
            AqiLevel::VeryUnhealthy => {
                "Health alert: everyone may experience serious effects"
            }
            AqiLevel::Hazardous => "Health warning of emergency conditions",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(AqiLevel::from_pm25(12.0), AqiLevel::Good);
        assert_eq!(AqiLevel::from_pm25(12.1), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_pm25(35.4), AqiLevel::Moderate);
        assert_eq!(AqiLevel::from_pm25(55.4), AqiLevel::UnhealthySensitive);
        assert_eq!(AqiLevel::from_pm25(150.4), AqiLevel::Unhealthy);
        assert_eq!(AqiLevel::from_pm25(250.4), AqiLevel::VeryUnhealthy);
        assert_eq!(AqiLevel::from_pm25(250.5), AqiLevel::Hazardous);
    }

    #[test]
    fn test_levels_are_ordered() {
        assert!(AqiLevel::Good < AqiLevel::Moderate);
        assert!(AqiLevel::VeryUnhealthy < AqiLevel::Hazardous);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            AqiLevel::UnhealthySensitive.label(),
            "Unhealthy for Sensitive Groups"
        );
        assert_eq!(
            serde_json::to_string(&AqiLevel::VeryUnhealthy).unwrap(),
            "\"very_unhealthy\""
        );
    }
}
