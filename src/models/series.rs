use serde::{Deserialize, Serialize};

use super::Observation;
use crate::error::EpiError;

/// A complete case-count time series for one region or dataset.
///
/// Observations are kept in file order, which is assumed chronological.
/// Reported counts must form a contiguous prefix; unreported days may only
/// appear as a trailing suffix (future days the curve is projected onto).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseSeries {
    /// Name or identifier for this series
    pub name: String,
    /// All observations, in chronological order
    pub observations: Vec<Observation>,
}

impl CaseSeries {
    /// Create a new empty series.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            observations: Vec::new(),
        }
    }

    /// Total number of days in the series, including unreported ones.
    pub fn num_days(&self) -> usize {
        self.observations.len()
    }

    /// Number of days with a reported count.
    pub fn num_observed(&self) -> usize {
        self.observations.iter().filter(|o| o.is_reported()).count()
    }

    /// The observed cumulative counts, as the prefix of reported values.
    pub fn actual_counts(&self) -> Vec<f64> {
        self.observations
            .iter()
            .map_while(|o| o.count.map(|c| c as f64))
            .collect()
    }

    /// ISO date labels for every day.
    pub fn labels(&self) -> Vec<String> {
        self.observations.iter().map(|o| o.label()).collect()
    }

    /// `DD.MM` date labels for every day (plot axis format).
    pub fn short_labels(&self) -> Vec<String> {
        self.observations.iter().map(|o| o.short_label()).collect()
    }

    /// Most recent reported cumulative count, if any.
    pub fn latest_count(&self) -> Option<u64> {
        self.observations
            .iter()
            .rev()
            .find_map(|o| o.count)
    }

    /// Largest day-over-day increase among reported counts.
    pub fn peak_daily_increase(&self) -> Option<i64> {
        let actual = self.actual_counts();
        actual
            .windows(2)
            .map(|w| (w[1] - w[0]) as i64)
            .max()
    }

    /// Check the structural assumptions the analysis relies on: dates in
    /// strictly increasing order, and unreported counts only as a trailing
    /// suffix (interior gaps would make the observed prefix ambiguous).
    pub fn validate(&self) -> Result<(), EpiError> {
        for pair in self.observations.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(EpiError::ValidationError(format!(
                    "dates out of order: {} followed by {}",
                    pair[0].label(),
                    pair[1].label()
                )));
            }
        }

        let mut seen_gap = false;
        for obs in &self.observations {
            match obs.count {
                None => seen_gap = true,
                Some(_) if seen_gap => {
                    return Err(EpiError::ValidationError(format!(
                        "interior gap: count reported on {} after an unreported day",
                        obs.label()
                    )));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
