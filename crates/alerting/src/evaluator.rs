//! Measurement Evaluation

use crate::thresholds::{classify, Severity};
use sample_window::{Measurement, Pollutant};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Alert fired for a measurement that crossed a threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Pollutant that crossed a threshold
    pub pollutant: Pollutant,
    /// Observed concentration (µg/m³)
    pub value: f64,
    /// Threshold that was crossed
    pub threshold: f64,
    /// Human-readable alert message
    pub message: String,
    /// Severity tier
    pub severity: Severity,
}

/// Outcome of evaluating a batch of measurements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertReport {
    /// Whether any measurement crossed a threshold
    pub triggered: bool,
    /// Fired alerts, in input measurement order
    pub alerts: Vec<Alert>,
}

/// Stateless threshold evaluator.
///
/// Holds no alert history; deduplication and persistence belong to the
/// caller. A single instance may be shared freely across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlertEvaluator;

impl AlertEvaluator {
    /// Create an evaluator
    pub fn new() -> Self {
        Self
    }

    /// Evaluate measurements against the per-pollutant threshold tables.
    ///
    /// At most one alert fires per measurement (the most severe tier whose
    /// threshold is exceeded). Unknown pollutant identifiers are skipped.
    pub fn evaluate(&self, measurements: &[Measurement]) -> AlertReport {
        let mut alerts = Vec::new();

        for measurement in measurements {
            let Some(pollutant) = measurement.pollutant() else {
                debug!(
                    parameter = %measurement.parameter,
                    "skipping measurement for untracked pollutant"
                );
                continue;
            };

            if let Some(tier) = classify(pollutant, measurement.value) {
                alerts.push(Alert {
                    pollutant,
                    value: measurement.value,
                    threshold: tier.threshold,
                    message: tier.message.to_string(),
                    severity: tier.severity,
                });
            }
        }

        AlertReport {
            triggered: !alerts.is_empty(),
            alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(measurements: &[Measurement]) -> AlertReport {
        AlertEvaluator::new().evaluate(measurements)
    }

    #[test]
    fn test_hazardous_pm25() {
        let report = evaluate(&[Measurement::new("pm25", 260.0)]);

        assert!(report.triggered);
        assert_eq!(report.alerts.len(), 1);
        let alert = &report.alerts[0];
        assert_eq!(alert.severity, Severity::Hazardous);
        assert_eq!(alert.threshold, 250.0);
        assert_eq!(alert.value, 260.0);
    }

    #[test]
    fn test_pm25_below_lowest_tier() {
        let report = evaluate(&[Measurement::new("pm25", 50.0)]);

        assert!(!report.triggered);
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn test_no2_has_no_moderate_tier() {
        let report = evaluate(&[Measurement::new("no2", 45.0)]);

        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].severity, Severity::Unhealthy);
        assert_eq!(report.alerts[0].threshold, 40.0);
    }

    #[test]
    fn test_one_alert_per_measurement() {
        // 260 exceeds every PM2.5 tier, yet only the hazardous one fires
        let report = evaluate(&[Measurement::new("pm25", 260.0)]);
        assert_eq!(report.alerts.len(), 1);
    }

    #[test]
    fn test_unknown_pollutant_skipped() {
        let report = evaluate(&[
            Measurement::new("so2", 9999.0),
            Measurement::new("pm25", 120.0),
        ]);

        assert_eq!(report.alerts.len(), 1);
        assert_eq!(report.alerts[0].pollutant, Pollutant::Pm25);
    }

    #[test]
    fn test_alert_order_follows_input_order() {
        let report = evaluate(&[
            Measurement::new("o3", 450.0),
            Measurement::new("pm25", 60.0),
            Measurement::new("no2", 30.0),
            Measurement::new("no2", 250.0),
        ]);

        assert_eq!(report.alerts.len(), 3);
        assert_eq!(report.alerts[0].pollutant, Pollutant::O3);
        assert_eq!(report.alerts[0].severity, Severity::VeryUnhealthy);
        assert_eq!(report.alerts[1].pollutant, Pollutant::Pm25);
        assert_eq!(report.alerts[1].severity, Severity::Moderate);
        assert_eq!(report.alerts[2].pollutant, Pollutant::No2);
        assert_eq!(report.alerts[2].severity, Severity::VeryUnhealthy);
    }

    #[test]
    fn test_empty_input_never_triggers() {
        let report = evaluate(&[]);
        assert!(!report.triggered);
        assert!(report.alerts.is_empty());
    }

    #[test]
    fn test_evaluation_is_stateless() {
        let evaluator = AlertEvaluator::new();
        let measurements = [Measurement::new("pm25", 260.0)];

        let first = evaluator.evaluate(&measurements);
        let second = evaluator.evaluate(&measurements);
        assert_eq!(first, second);
    }
}
