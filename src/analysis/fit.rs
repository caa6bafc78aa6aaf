//! Bounded non-linear least squares fit of the logistic curve.
//!
//! Levenberg-Marquardt with a finite-difference Jacobian: damped normal
//! equations solved by Gaussian elimination, with the damping parameter
//! adapted on step acceptance. The ceiling is fixed; only the growth rate
//! and midpoint are free, constrained to the model's box bounds by
//! projecting each trial step.

use crate::analysis::logistic::{logistic, LogisticParams};
use crate::error::EpiError;

/// Box constraint on the growth rate k.
pub const GROWTH_RATE_BOUNDS: (f64, f64) = (0.05, 15.0);
/// Box constraint on the midpoint x0.
pub const MIDPOINT_BOUNDS: (f64, f64) = (0.3, 50.0);

/// Configuration for the Levenberg-Marquardt solver.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Convergence tolerance for the step norm
    pub parameter_tolerance: f64,
    /// Convergence tolerance for the sum of squared residuals
    pub residual_tolerance: f64,
    /// Initial damping parameter (lambda)
    pub initial_lambda: f64,
    /// Damping increase factor on rejected steps
    pub lambda_increase: f64,
    /// Damping decrease factor on accepted steps
    pub lambda_decrease: f64,
    /// Finite difference step size
    pub fd_step: f64,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            parameter_tolerance: 1e-8,
            residual_tolerance: 1e-12,
            initial_lambda: 1e-3,
            lambda_increase: 10.0,
            lambda_decrease: 0.1,
            fd_step: 1e-6,
        }
    }
}

/// Outcome of a successful fit.
#[derive(Debug, Clone)]
pub struct FitResult {
    /// Fitted (k, x0)
    pub params: LogisticParams,
    /// Final sum of squared residuals
    pub objective: f64,
    /// Iterations used
    pub iterations: usize,
    /// Whether a convergence criterion was met
    pub converged: bool,
}

fn clamp_params(p: &mut [f64; 2]) {
    p[0] = p[0].clamp(GROWTH_RATE_BOUNDS.0, GROWTH_RATE_BOUNDS.1);
    p[1] = p[1].clamp(MIDPOINT_BOUNDS.0, MIDPOINT_BOUNDS.1);
}

fn residuals(ceiling: f64, observed: &[f64], p: &[f64; 2]) -> Vec<f64> {
    observed
        .iter()
        .enumerate()
        .map(|(x, &y)| logistic(ceiling, p[0], p[1], x as f64) - y)
        .collect()
}

fn sum_squares(r: &[f64]) -> f64 {
    r.iter().map(|ri| ri * ri).sum()
}

/// Fit (k, x0) of `ceiling / (1 + e^(-k(x - x0)))` to the observed
/// cumulative counts, with day indices `0..observed.len()` as x-coordinates.
///
/// Fewer than 2 observations cannot constrain two parameters; that and
/// non-convergence are fatal (the caller has no fallback parameters).
pub fn fit_logistic(
    ceiling: f64,
    observed: &[f64],
    config: &FitConfig,
) -> Result<FitResult, EpiError> {
    if observed.len() < 2 {
        return Err(EpiError::InsufficientData(format!(
            "need at least 2 observed counts to fit a logistic curve, got {}",
            observed.len()
        )));
    }
    if !ceiling.is_finite() || ceiling <= 0.0 {
        return Err(EpiError::FitError(format!(
            "ceiling must be positive and finite, got {ceiling}"
        )));
    }

    // Initial guess: moderate growth, midpoint halfway through the
    // observed window, both projected into the bounds.
    let mut x = [0.5, observed.len() as f64 / 2.0];
    clamp_params(&mut x);

    let mut lambda = config.initial_lambda;
    let mut r = residuals(ceiling, observed, &x);
    let mut ssr = sum_squares(&r);

    for iteration in 0..config.max_iterations {
        if ssr < config.residual_tolerance {
            return Ok(FitResult {
                params: LogisticParams::new(x[0], x[1]),
                objective: ssr,
                iterations: iteration,
                converged: true,
            });
        }

        // Jacobian via forward differences
        let m = r.len();
        let mut j = vec![[0.0f64; 2]; m];
        for k in 0..2 {
            let mut x_plus = x;
            x_plus[k] += config.fd_step;
            let r_plus = residuals(ceiling, observed, &x_plus);
            for i in 0..m {
                j[i][k] = (r_plus[i] - r[i]) / config.fd_step;
            }
        }

        // Normal equations J^T J and J^T r for the 2x2 system
        let mut jtj = [[0.0f64; 2]; 2];
        let mut jtr = [0.0f64; 2];
        for row in 0..2 {
            for col in 0..2 {
                jtj[row][col] = j.iter().map(|ji| ji[row] * ji[col]).sum();
            }
            jtr[row] = j.iter().zip(r.iter()).map(|(ji, ri)| ji[row] * ri).sum();
        }

        // Damped system (J^T J + lambda I) step = -J^T r
        jtj[0][0] += lambda;
        jtj[1][1] += lambda;
        let step = solve_2x2(&jtj, &[-jtr[0], -jtr[1]])?;

        let step_norm = (step[0] * step[0] + step[1] * step[1]).sqrt();
        if step_norm < config.parameter_tolerance {
            return Ok(FitResult {
                params: LogisticParams::new(x[0], x[1]),
                objective: ssr,
                iterations: iteration,
                converged: true,
            });
        }

        // Trial step, projected into the box. Projection can pin the
        // iterate at a bound: the raw step is large but the in-box movement
        // is nil, and rejecting such a step would inflate lambda forever.
        // If the point cannot move, the constrained minimum is here.
        let mut x_new = [x[0] + step[0], x[1] + step[1]];
        clamp_params(&mut x_new);
        let moved = ((x_new[0] - x[0]).powi(2) + (x_new[1] - x[1]).powi(2)).sqrt();
        if moved < config.parameter_tolerance {
            return Ok(FitResult {
                params: LogisticParams::new(x[0], x[1]),
                objective: ssr,
                iterations: iteration,
                converged: true,
            });
        }

        let r_new = residuals(ceiling, observed, &x_new);
        let ssr_new = sum_squares(&r_new);

        if ssr_new < ssr {
            x = x_new;
            r = r_new;
            ssr = ssr_new;
            lambda *= config.lambda_decrease;
        } else {
            lambda *= config.lambda_increase;
        }
    }

    Err(EpiError::FitError(format!(
        "did not converge within {} iterations (residual {ssr:.6})",
        config.max_iterations
    )))
}

/// Solve a 2x2 linear system by elimination with partial pivoting.
fn solve_2x2(a: &[[f64; 2]; 2], b: &[f64; 2]) -> Result<[f64; 2], EpiError> {
    let (r0, r1, b0, b1) = if a[1][0].abs() > a[0][0].abs() {
        (a[1], a[0], b[1], b[0])
    } else {
        (a[0], a[1], b[0], b[1])
    };

    if r0[0].abs() < 1e-12 {
        return Err(EpiError::FitError("singular normal equations".to_string()));
    }

    let factor = r1[0] / r0[0];
    let denom = r1[1] - factor * r0[1];
    if denom.abs() < 1e-12 {
        return Err(EpiError::FitError("singular normal equations".to_string()));
    }

    let y = (b1 - factor * b0) / denom;
    let x = (b0 - r0[1] * y) / r0[0];
    Ok([x, y])
}
