use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::EpiError;

/// Goodness of fit of a predicted series against the observed window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitQuality {
    /// Root mean squared error of the residuals
    pub rmse: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Sample standard deviation of the residuals
    pub residual_std_error: f64,
    /// 95% Student-t confidence interval for the mean residual
    pub mean_residual_lower: f64,
    pub mean_residual_upper: f64,
    /// Number of observed points compared
    pub sample_size: usize,
}

impl FitQuality {
    /// Compare predictions to observations over the observed window.
    pub fn compute(observed: &[f64], predicted: &[f64]) -> Result<Self, EpiError> {
        let n = observed.len();
        if n < 2 {
            return Err(EpiError::InsufficientData(
                "need at least 2 observations to assess fit quality".to_string(),
            ));
        }
        if predicted.len() != n {
            return Err(EpiError::FitError(format!(
                "predicted window length {} does not match observed length {n}",
                predicted.len()
            )));
        }

        let residuals: Vec<f64> = observed
            .iter()
            .zip(predicted.iter())
            .map(|(o, p)| p - o)
            .collect();

        let sse: f64 = residuals.iter().map(|r| r * r).sum();
        let rmse = (sse / n as f64).sqrt();

        let obs_mean = observed.iter().sum::<f64>() / n as f64;
        let sst: f64 = observed.iter().map(|o| (o - obs_mean).powi(2)).sum();
        let r_squared = if sst > f64::EPSILON {
            1.0 - sse / sst
        } else {
            // Constant observations: perfect iff residuals vanish
            if sse < f64::EPSILON {
                1.0
            } else {
                0.0
            }
        };

        let res_mean = residuals.iter().sum::<f64>() / n as f64;
        let res_var =
            residuals.iter().map(|r| (r - res_mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        let residual_std_error = res_var.sqrt();
        let std_error = residual_std_error / (n as f64).sqrt();

        let df = (n - 1) as f64;
        let t_dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| EpiError::FitError(e.to_string()))?;
        let t_value = t_dist.inverse_cdf(1.0 - 0.05 / 2.0);
        let margin = t_value * std_error;

        Ok(FitQuality {
            rmse,
            r_squared,
            residual_std_error,
            mean_residual_lower: res_mean - margin,
            mean_residual_upper: res_mean + margin,
            sample_size: n,
        })
    }
}
