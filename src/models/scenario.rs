use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EpiError;

/// One total-case-count scenario: an assumed asymptote the cumulative curve
/// converges to, plus presentation hints for the chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name for tables and the chart legend
    pub name: String,
    /// Assumed asymptotic total case count
    pub ceiling: f64,
    /// Line color name for the chart (green, blue, red, grey, black, ...)
    #[serde(default = "default_color")]
    pub color: String,
    /// Draw the predicted curve dashed
    #[serde(default)]
    pub dashed: bool,
}

fn default_color() -> String {
    "blue".to_string()
}

impl Scenario {
    /// Create a scenario with default presentation.
    pub fn new(name: impl Into<String>, ceiling: f64) -> Self {
        Self {
            name: name.into(),
            ceiling,
            color: default_color(),
            dashed: false,
        }
    }

    /// Legend label: name plus ceiling.
    pub fn legend_label(&self) -> String {
        format!("{} total cases ({})", self.ceiling, self.name)
    }
}

/// The set of scenarios to fit and project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSet {
    #[serde(rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

impl Default for ScenarioSet {
    /// The scenario set from the original Iceland analysis.
    fn default() -> Self {
        Self {
            scenarios: vec![
                Scenario {
                    name: "most probable".to_string(),
                    ceiling: 2000.0,
                    color: "green".to_string(),
                    dashed: false,
                },
                Scenario {
                    name: "worst case".to_string(),
                    ceiling: 6000.0,
                    color: "blue".to_string(),
                    dashed: false,
                },
                Scenario {
                    name: "intermediate".to_string(),
                    ceiling: 4000.0,
                    color: "grey".to_string(),
                    dashed: true,
                },
            ],
        }
    }
}

impl ScenarioSet {
    /// Build a set from bare ceilings, named after their values.
    pub fn from_ceilings(ceilings: &[f64]) -> Result<Self, EpiError> {
        if ceilings.is_empty() {
            return Err(EpiError::Config("no scenario ceilings given".to_string()));
        }
        let palette = ["green", "blue", "grey", "red", "magenta", "cyan"];
        let scenarios = ceilings
            .iter()
            .enumerate()
            .map(|(i, &ceiling)| Scenario {
                name: format!("{ceiling} ceiling"),
                ceiling,
                color: palette[i % palette.len()].to_string(),
                dashed: false,
            })
            .collect();
        Ok(Self { scenarios })
    }

    /// Load a scenario set from a TOML file with `[[scenario]]` tables.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, EpiError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let set: ScenarioSet = toml::from_str(&text)?;
        set.validate()?;
        Ok(set)
    }

    /// Check that every scenario is usable for fitting.
    pub fn validate(&self) -> Result<(), EpiError> {
        if self.scenarios.is_empty() {
            return Err(EpiError::Config("scenario set is empty".to_string()));
        }
        for s in &self.scenarios {
            if !s.ceiling.is_finite() || s.ceiling <= 0.0 {
                return Err(EpiError::Config(format!(
                    "scenario '{}' has non-positive ceiling {}",
                    s.name, s.ceiling
                )));
            }
        }
        Ok(())
    }
}
