//! Ordinary Least Squares Fitting

use crate::ForecastError;
use serde::{Deserialize, Serialize};

/// Residual tolerance used when a series has zero variance
const RESIDUAL_EPSILON: f64 = 1e-9;

/// Linear model fitted over a sample series, with in-sample quality metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// Slope of the fitted line (µg/m³ per hour)
    pub slope: f64,
    /// Intercept of the fitted line
    pub intercept: f64,
    /// Coefficient of determination, clamped to [0, 1]
    pub r2_score: f64,
    /// Mean absolute error over the fitted series
    pub mae: f64,
}

impl LinearModel {
    /// Fit a least-squares line over `values`, using the sample index
    /// (0..n-1) as the independent variable.
    ///
    /// Requires at least two samples; with fewer the slope denominator
    /// degenerates and no line can be fit.
    pub fn fit(values: &[f64]) -> Result<Self, ForecastError> {
        let n = values.len();
        if n < 2 {
            return Err(ForecastError::InsufficientData { got: n });
        }

        let nf = n as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_xx += x * x;
        }

        // x = 0..n-1 with n >= 2 guarantees a nonzero denominator
        let slope = (nf * sum_xy - sum_x * sum_y) / (nf * sum_xx - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / nf;

        let y_mean = sum_y / nf;
        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;
        let mut sum_abs_error = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let y_pred = slope * i as f64 + intercept;
            ss_total += (y - y_mean) * (y - y_mean);
            ss_residual += (y - y_pred) * (y - y_pred);
            sum_abs_error += (y - y_pred).abs();
        }

        // Zero-variance series makes R² indeterminate; resolve locally so
        // no NaN escapes the engine.
        let r2_score = if ss_total == 0.0 {
            if ss_residual < RESIDUAL_EPSILON {
                1.0
            } else {
                0.0
            }
        } else {
            (1.0 - ss_residual / ss_total).clamp(0.0, 1.0)
        };

        Ok(Self {
            slope,
            intercept,
            r2_score,
            mae: sum_abs_error / nf,
        })
    }

    /// Evaluate the fitted line at a sample index
    pub fn predict(&self, index: f64) -> f64 {
        self.slope * index + self.intercept
    }

    /// Confidence score for forecasting `step` hours ahead of a history of
    /// `history_len` samples.
    ///
    /// Decays linearly to zero as the horizon approaches twice the history
    /// length, scaled by model fit quality.
    pub fn confidence(&self, step: usize, history_len: usize) -> u8 {
        let distance_factor = (1.0 - step as f64 / (2.0 * history_len as f64)).max(0.0);
        (distance_factor * self.r2_score * 100.0).round() as u8
    }
}
