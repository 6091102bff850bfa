//! Forecast Engine
//!
//! Fits one least-squares linear model per tracked pollutant over an hourly
//! sample window and extrapolates forward with a decaying confidence score.

mod forecaster;
mod regression;
mod smoothing;

pub use forecaster::{Forecaster, ForecastResult, PollutantModels, Prediction, DEFAULT_HORIZON};
pub use regression::LinearModel;
pub use smoothing::moving_average;

use thiserror::Error;

/// Errors during forecasting
#[derive(Debug, Clone, Error)]
pub enum ForecastError {
    /// Too few historical samples to fit a model
    #[error("insufficient data: need at least 2 samples, got {got}")]
    InsufficientData { got: usize },
}
