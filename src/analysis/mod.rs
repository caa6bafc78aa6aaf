mod delta;
mod fit;
mod goodness;
mod logistic;
mod projection;

pub use delta::{cumulative_from_deltas, daily_deltas};
pub use fit::{fit_logistic, FitConfig, FitResult, GROWTH_RATE_BOUNDS, MIDPOINT_BOUNDS};
pub use goodness::FitQuality;
pub use logistic::{logistic, LogisticParams};
pub use projection::{project_scenarios, ScenarioProjection};
