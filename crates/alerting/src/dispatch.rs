//! Best-Effort Alert Dispatch

use crate::evaluator::Alert;
use thiserror::Error;
use tracing::warn;

/// Errors during alert delivery
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Sink refused or failed to accept the alert
    #[error("sink rejected alert: {0}")]
    Rejected(String),
}

/// Delivery target for fired alerts
pub trait AlertSink {
    /// Deliver a single alert
    fn deliver(&self, alert: &Alert) -> Result<(), DispatchError>;
}

/// Sink that records alerts via tracing
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl AlertSink for LogSink {
    fn deliver(&self, alert: &Alert) -> Result<(), DispatchError> {
        warn!(
            pollutant = alert.pollutant.as_str(),
            value = alert.value,
            threshold = alert.threshold,
            severity = alert.severity.as_str(),
            "air quality alert: {}",
            alert.message
        );
        Ok(())
    }
}

/// Outcome of a dispatch fan-out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Alerts delivered successfully
    pub delivered: usize,
    /// Alerts whose delivery failed
    pub failed: usize,
}

/// Fan alerts out to a sink, isolating per-item failures.
///
/// A failed delivery is logged and counted; it never aborts delivery of the
/// remaining alerts and never propagates to the caller.
pub fn dispatch_all(sink: &dyn AlertSink, alerts: &[Alert]) -> DispatchOutcome {
    let mut outcome = DispatchOutcome::default();

    for alert in alerts {
        match sink.deliver(alert) {
            Ok(()) => outcome.delivered += 1,
            Err(e) => {
                outcome.failed += 1;
                warn!(
                    pollutant = alert.pollutant.as_str(),
                    error = %e,
                    "alert delivery failed"
                );
            }
        }
    }

    outcome
}
