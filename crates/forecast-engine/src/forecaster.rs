//! Forecast Assembly

use crate::regression::LinearModel;
use crate::ForecastError;
use chrono::{DateTime, Duration, Utc};
use sample_window::{Pollutant, Sample};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default forecast horizon in hours
pub const DEFAULT_HORIZON: usize = 24;

/// One forecasted future point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Absolute time the prediction refers to
    pub timestamp: DateTime<Utc>,
    /// Forward offset in hours (1..=horizon)
    pub hour: u32,
    /// Predicted PM2.5 concentration (µg/m³, rounded)
    pub pm25: u32,
    /// Predicted NO2 concentration (µg/m³, rounded)
    pub no2: u32,
    /// Predicted O3 concentration (µg/m³, rounded)
    pub o3: u32,
    /// Combined confidence score (0-100)
    pub confidence: u8,
}

/// Fitted models, one per tracked pollutant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollutantModels {
    pub pm25: LinearModel,
    pub no2: LinearModel,
    pub o3: LinearModel,
}

impl PollutantModels {
    /// Get the model for a pollutant
    pub fn get(&self, pollutant: Pollutant) -> &LinearModel {
        match pollutant {
            Pollutant::Pm25 => &self.pm25,
            Pollutant::No2 => &self.no2,
            Pollutant::O3 => &self.o3,
        }
    }

    /// Mean R² across the three models
    fn mean_r2(&self) -> f64 {
        (self.pm25.r2_score + self.no2.r2_score + self.o3.r2_score) / 3.0
    }
}

/// Complete forecast output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Forward predictions, one per hour
    pub predictions: Vec<Prediction>,
    /// Fitted models with quality metrics
    pub models: PollutantModels,
    /// Overall accuracy, round(mean R² × 100)
    pub accuracy: u8,
}

/// Stateless pollutant forecaster.
///
/// Every call refits from scratch; there is no cached state, so a single
/// instance may be shared freely across tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Forecaster;

impl Forecaster {
    /// Create a forecaster
    pub fn new() -> Self {
        Self
    }

    /// Forecast `hours` steps ahead from the current wall-clock time
    pub fn forecast(
        &self,
        samples: &[Sample],
        hours: usize,
    ) -> Result<ForecastResult, ForecastError> {
        self.forecast_at(samples, hours, Utc::now())
    }

    /// Forecast with a pinned evaluation instant.
    ///
    /// Identical samples and the same `now` yield bit-identical output.
    pub fn forecast_at(
        &self,
        samples: &[Sample],
        hours: usize,
        now: DateTime<Utc>,
    ) -> Result<ForecastResult, ForecastError> {
        let n = samples.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData { got: n });
        }

        debug!("fitting pollutant models over {} samples", n);

        let fit = |pollutant: Pollutant| {
            let series: Vec<f64> = samples.iter().map(|s| s.value(pollutant)).collect();
            LinearModel::fit(&series)
        };

        let models = PollutantModels {
            pm25: fit(Pollutant::Pm25)?,
            no2: fit(Pollutant::No2)?,
            o3: fit(Pollutant::O3)?,
        };

        let last_index = n - 1;
        let mut predictions = Vec::with_capacity(hours);

        for step in 1..=hours {
            let future_index = (last_index + step) as f64;

            let combined = models.pm25.confidence(step, n) as f64
                + models.no2.confidence(step, n) as f64
                + models.o3.confidence(step, n) as f64;

            predictions.push(Prediction {
                timestamp: now + Duration::hours(step as i64),
                hour: step as u32,
                pm25: predict_value(&models.pm25, future_index),
                no2: predict_value(&models.no2, future_index),
                o3: predict_value(&models.o3, future_index),
                confidence: (combined / 3.0).round() as u8,
            });
        }

        Ok(ForecastResult {
            predictions,
            accuracy: (models.mean_r2() * 100.0).round() as u8,
            models,
        })
    }
}

/// Round an extrapolated value, flooring negatives to zero
fn predict_value(model: &LinearModel, index: f64) -> u32 {
    model.predict(index).round().max(0.0) as u32
}
