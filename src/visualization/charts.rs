use colored::Colorize;

use crate::analysis::ScenarioProjection;
use crate::models::CaseSeries;

/// Format a text-based histogram of one scenario's projected daily new
/// cases as a string.
pub fn format_delta_histogram(series: &CaseSeries, projection: &ScenarioProjection) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "\n{}\n",
        format!(
            "Projected Daily New Cases ({})",
            projection.scenario.legend_label()
        )
        .bold()
        .green()
    ));
    output.push_str(&format!("{}\n", "=".repeat(60)));

    if projection.deltas.is_empty() {
        output.push_str("  No data available.\n");
        return output;
    }

    let max_delta = projection
        .deltas
        .iter()
        .copied()
        .fold(0.0f64, f64::max);

    let bar_width = 40;
    let labels = series.short_labels();

    output.push_str(&format!("  {:>7}  {:>9}  Distribution\n", "Day", "New"));
    output.push_str(&format!("  {}\n", "-".repeat(60)));

    for (day, &delta) in projection.deltas.iter().enumerate() {
        let bar_len = if max_delta > 0.0 {
            ((delta.max(0.0) / max_delta) * bar_width as f64).round() as usize
        } else {
            0
        };

        let bar = "\u{2588}".repeat(bar_len);

        output.push_str(&format!(
            "  {:>7}  {:>9.2}  {}\n",
            labels.get(day).map(String::as_str).unwrap_or(""),
            delta,
            bar.green()
        ));
    }

    output.push('\n');
    output
}

/// Print a text-based histogram of projected daily new cases.
pub fn print_delta_histogram(series: &CaseSeries, projection: &ScenarioProjection) {
    print!("{}", format_delta_histogram(series, projection));
}
