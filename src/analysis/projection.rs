use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::delta::daily_deltas;
use crate::analysis::fit::{fit_logistic, FitConfig};
use crate::analysis::goodness::FitQuality;
use crate::analysis::logistic::LogisticParams;
use crate::error::EpiError;
use crate::models::{CaseSeries, Scenario};

/// A fitted scenario evaluated over the full day range of a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub scenario: Scenario,
    /// Fitted (k, x0) for the scenario's ceiling
    pub params: LogisticParams,
    /// Predicted cumulative counts for day indices 0..num_days
    pub cumulative: Vec<f64>,
    /// Predicted daily new cases (element 0 is 0)
    pub deltas: Vec<f64>,
    /// Goodness of fit over the observed window
    pub quality: FitQuality,
}

/// Fit every scenario against the observed prefix of `series` and evaluate
/// each fitted curve over the whole day range, including future days.
pub fn project_scenarios(
    series: &CaseSeries,
    scenarios: &[Scenario],
    config: &FitConfig,
) -> Result<Vec<ScenarioProjection>, EpiError> {
    if series.num_days() == 0 {
        return Err(EpiError::InsufficientData(
            "series has no observations".to_string(),
        ));
    }
    series.validate()?;

    let observed = series.actual_counts();
    let num_days = series.num_days();

    let mut projections = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let result = fit_logistic(scenario.ceiling, &observed, config)?;
        debug!(
            scenario = %scenario.name,
            ceiling = scenario.ceiling,
            growth_rate = result.params.growth_rate,
            midpoint = result.params.midpoint,
            iterations = result.iterations,
            "fitted scenario"
        );

        let cumulative = result.params.evaluate_days(scenario.ceiling, num_days);
        let deltas = daily_deltas(&cumulative);
        let quality = FitQuality::compute(&observed, &cumulative[..observed.len()])?;

        projections.push(ScenarioProjection {
            scenario: scenario.clone(),
            params: result.params,
            cumulative,
            deltas,
            quality,
        });
    }

    Ok(projections)
}
