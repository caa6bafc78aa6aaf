pub mod analysis;
pub mod error;
pub mod io;
pub mod models;
pub mod visualization;

pub use analysis::{fit_logistic, project_scenarios, FitConfig, ScenarioProjection};
pub use error::EpiError;
pub use models::{CaseSeries, Observation, Scenario, ScenarioSet};
