use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use epicurve::{
    analysis::{project_scenarios, FitConfig},
    io,
    models::{CaseSeries, ScenarioSet},
    visualization::{
        print_delta_histogram, print_fit_summary_table, print_projection_table, render_chart,
    },
};

#[derive(Parser)]
#[command(
    name = "epicurve",
    about = "Epidemic Curve Analyzer - logistic growth fitting and scenario projection",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit all scenarios and display projection tables
    Analyze {
        /// Path to input CSV file with Date,Count columns
        #[arg(short, long)]
        input: PathBuf,

        /// Scenario definition file (TOML with [[scenario]] tables)
        #[arg(short, long)]
        scenarios: Option<PathBuf>,

        /// Override scenarios with bare ceilings (repeatable)
        #[arg(short, long)]
        ceiling: Vec<f64>,

        /// Write the actual-vs-predicted chart to this PNG path
        #[arg(long)]
        chart: Option<PathBuf>,

        /// Show a terminal histogram of projected daily new cases
        #[arg(long)]
        histogram: bool,
    },

    /// Render the actual-vs-predicted chart only
    Plot {
        /// Path to input CSV file with Date,Count columns
        #[arg(short, long)]
        input: PathBuf,

        /// Scenario definition file (TOML with [[scenario]] tables)
        #[arg(short, long)]
        scenarios: Option<PathBuf>,

        /// Override scenarios with bare ceilings (repeatable)
        #[arg(short, long)]
        ceiling: Vec<f64>,

        /// Output PNG path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Display a quick summary of the input series
    Summary {
        /// Path to input CSV file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn load_scenarios(path: &Option<PathBuf>, ceilings: &[f64]) -> Result<ScenarioSet> {
    if !ceilings.is_empty() {
        return Ok(ScenarioSet::from_ceilings(ceilings)?);
    }
    match path {
        Some(p) => Ok(ScenarioSet::from_toml_file(p)?),
        None => Ok(ScenarioSet::default()),
    }
}

fn load_series(path: &PathBuf) -> Result<CaseSeries> {
    let series = io::read_csv(path)?;
    series.validate()?;
    debug!(
        name = %series.name,
        days = series.num_days(),
        observed = series.num_observed(),
        "loaded series"
    );
    Ok(series)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            scenarios,
            ceiling,
            chart,
            histogram,
        } => {
            println!(
                "\n{}",
                format!("Epidemic Curve Analysis: {}", input.display())
                    .bold()
                    .cyan()
            );

            let series = load_series(&input)?;
            println!(
                "  Loaded {} days, {} with reported counts",
                series.num_days(),
                series.num_observed()
            );

            let scenario_set = load_scenarios(&scenarios, &ceiling)?;
            let projections =
                project_scenarios(&series, &scenario_set.scenarios, &FitConfig::default())?;

            print_projection_table(&series, &projections);
            print_fit_summary_table(&projections);

            if histogram {
                for projection in &projections {
                    print_delta_histogram(&series, projection);
                }
            }

            if let Some(chart_path) = chart {
                render_chart(&series, &projections, &chart_path)?;
                println!(
                    "\n{} Chart written to {}",
                    "Success:".green().bold(),
                    chart_path.display()
                );
            }
        }

        Commands::Plot {
            input,
            scenarios,
            ceiling,
            output,
        } => {
            let series = load_series(&input)?;
            let scenario_set = load_scenarios(&scenarios, &ceiling)?;
            let projections =
                project_scenarios(&series, &scenario_set.scenarios, &FitConfig::default())?;

            render_chart(&series, &projections, &output)?;
            println!(
                "{} Chart written to {}",
                "Success:".green().bold(),
                output.display()
            );
        }

        Commands::Summary { input } => {
            let series = load_series(&input)?;

            println!("\n{}", "Quick Summary".bold().cyan());
            println!("{}", "=".repeat(40));
            println!("  Name:            {}", series.name);
            println!("  Total days:      {}", series.num_days());
            println!("  Reported days:   {}", series.num_observed());
            if let (Some(first), Some(last)) =
                (series.observations.first(), series.observations.last())
            {
                println!("  Date range:      {} to {}", first.label(), last.label());
            }
            if let Some(latest) = series.latest_count() {
                println!("  Latest count:    {latest}");
            }
            if let Some(peak) = series.peak_daily_increase() {
                println!("  Peak daily rise: {peak}");
            }
        }
    }

    Ok(())
}
