//! Fit the default scenarios against an in-code series and print the
//! projection tables.
//!
//! Run with: cargo run --example basic_analysis

use epicurve::{
    analysis::{project_scenarios, FitConfig},
    models::{CaseSeries, Observation, ScenarioSet},
    visualization::{print_fit_summary_table, print_projection_table},
};

fn main() -> anyhow::Result<()> {
    let mut series = CaseSeries::new("demo");
    let counts = [
        Some(10),
        Some(18),
        Some(35),
        Some(61),
        Some(109),
        Some(180),
        Some(270),
        Some(409),
        None,
        None,
        None,
        None,
    ];
    for (day, count) in counts.into_iter().enumerate() {
        let date = format!("2020-03-{:02}", day + 1);
        series.observations.push(Observation::parse(&date, count)?);
    }
    series.validate()?;

    let scenarios = ScenarioSet::default();
    let projections = project_scenarios(&series, &scenarios.scenarios, &FitConfig::default())?;

    print_projection_table(&series, &projections);
    print_fit_summary_table(&projections);

    Ok(())
}
