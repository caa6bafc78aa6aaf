use serde::{Deserialize, Serialize};

/// Fitted logistic parameters for a fixed ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticParams {
    /// Steepness of the curve (k)
    pub growth_rate: f64,
    /// Day index at which the curve reaches half its ceiling (x0)
    pub midpoint: f64,
}

impl LogisticParams {
    pub fn new(growth_rate: f64, midpoint: f64) -> Self {
        Self {
            growth_rate,
            midpoint,
        }
    }

    /// Evaluate the curve with this parameterization at day `x`.
    pub fn evaluate(&self, ceiling: f64, x: f64) -> f64 {
        logistic(ceiling, self.growth_rate, self.midpoint, x)
    }

    /// Evaluate the curve over day indices `0..num_days`.
    pub fn evaluate_days(&self, ceiling: f64, num_days: usize) -> Vec<f64> {
        (0..num_days)
            .map(|x| self.evaluate(ceiling, x as f64))
            .collect()
    }
}

/// The logistic function `ceiling / (1 + e^(-k * (x - x0)))`.
///
/// S-shaped saturating growth: half the ceiling is reached at `x0`, and the
/// value approaches `ceiling` as `x` grows.
pub fn logistic(ceiling: f64, k: f64, x0: f64, x: f64) -> f64 {
    ceiling / (1.0 + (-k * (x - x0)).exp())
}
