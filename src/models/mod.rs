mod observation;
mod scenario;
mod series;

pub use observation::Observation;
pub use scenario::{Scenario, ScenarioSet};
pub use series::CaseSeries;
