use colored::Colorize;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement,
    Table,
};

use crate::analysis::ScenarioProjection;
use crate::models::CaseSeries;

/// Format the per-day projection table as a string.
///
/// One row per day of the series, including future days: the date, the
/// actual count where reported, then for each scenario the predicted
/// cumulative and daily-new values at 2 decimal places.
pub fn format_projection_table(series: &CaseSeries, projections: &[ScenarioProjection]) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!("Scenario Projections: {}", series.name).bold().green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Day"), Cell::new("Actual")];
    for p in projections {
        header.push(Cell::new(format!("{} cum", p.scenario.ceiling)));
        header.push(Cell::new(format!("{} new", p.scenario.ceiling)));
    }
    table.set_header(header);

    for (day, obs) in series.observations.iter().enumerate() {
        let mut row = vec![
            Cell::new(obs.label()),
            Cell::new(obs.count.map(|c| c.to_string()).unwrap_or_default())
                .set_alignment(CellAlignment::Right),
        ];
        for p in projections {
            row.push(
                Cell::new(format!("{:.2}", p.cumulative[day]))
                    .set_alignment(CellAlignment::Right),
            );
            row.push(
                Cell::new(format!("{:.2}", p.deltas[day])).set_alignment(CellAlignment::Right),
            );
        }
        table.add_row(row);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the per-day projection table.
pub fn print_projection_table(series: &CaseSeries, projections: &[ScenarioProjection]) {
    print!("{}", format_projection_table(series, projections));
}

/// Format the fitted-parameter summary table as a string.
pub fn format_fit_summary_table(projections: &[ScenarioProjection]) -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", "Fitted Curves".bold().green()));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Scenario",
            "Ceiling",
            "Growth rate (k)",
            "Midpoint (x0)",
            "RMSE",
            "R\u{00b2}",
        ]);

    for p in projections {
        table.add_row(vec![
            Cell::new(&p.scenario.name),
            Cell::new(format!("{:.0}", p.scenario.ceiling)),
            Cell::new(format!("{:.4}", p.params.growth_rate)),
            Cell::new(format!("{:.2}", p.params.midpoint)),
            Cell::new(format!("{:.2}", p.quality.rmse)),
            Cell::new(format!("{:.4}", p.quality.r_squared)),
        ]);
    }

    output.push_str(&format!("{table}"));
    output
}

/// Print the fitted-parameter summary table.
pub fn print_fit_summary_table(projections: &[ScenarioProjection]) {
    print!("{}", format_fit_summary_table(projections));
}
