use std::path::Path;

use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::FontTransform;

use crate::analysis::ScenarioProjection;
use crate::error::EpiError;
use crate::models::CaseSeries;

fn to_plot_err<E: std::fmt::Display>(e: E) -> EpiError {
    EpiError::Plot(e.to_string())
}

fn color_of(name: &str) -> RGBColor {
    match name {
        "green" => GREEN,
        "blue" => BLUE,
        "red" => RED,
        "black" => BLACK,
        "magenta" => MAGENTA,
        "cyan" => CYAN,
        "yellow" => YELLOW,
        _ => RGBColor(128, 128, 128), // grey and anything unknown
    }
}

/// Render the actual-vs-predicted chart to a PNG file: two stacked panels
/// sharing the day axis (labeled `DD.MM`, rotated 90 degrees), cumulative
/// counts on top with the actual values as cross markers, daily new cases
/// below. The legend sits on the top panel only.
pub fn render_chart(
    series: &CaseSeries,
    projections: &[ScenarioProjection],
    path: impl AsRef<Path>,
) -> Result<(), EpiError> {
    let num_days = series.num_days();
    if num_days == 0 {
        return Err(EpiError::InsufficientData(
            "cannot plot an empty series".to_string(),
        ));
    }

    let labels = series.short_labels();
    let actual = series.actual_counts();
    let x_max = (num_days - 1).max(1) as f64;

    let cum_max = projections
        .iter()
        .flat_map(|p| p.cumulative.iter())
        .chain(actual.iter())
        .copied()
        .fold(1.0f64, f64::max)
        * 1.05;
    let delta_max = projections
        .iter()
        .flat_map(|p| p.deltas.iter())
        .copied()
        .fold(1.0f64, f64::max)
        * 1.1;

    let root = BitMapBackend::new(path.as_ref(), (1280, 960)).into_drawing_area();
    root.fill(&WHITE).map_err(to_plot_err)?;
    let panels = root.split_evenly((2, 1));

    let label_style = ("sans-serif", 12)
        .into_font()
        .transform(FontTransform::Rotate90);

    // Top panel: cumulative actual + predicted curves
    let mut top = ChartBuilder::on(&panels[0])
        .caption(
            format!("Cumulative cases: {}", series.name),
            ("sans-serif", 22),
        )
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..cum_max)
        .map_err(to_plot_err)?;

    top.configure_mesh()
        .x_labels(num_days.min(30))
        .x_label_formatter(&|x: &f64| {
            let day = x.round() as usize;
            labels.get(day).cloned().unwrap_or_default()
        })
        .x_label_style(label_style.clone())
        .y_desc("cumulative cases")
        .draw()
        .map_err(to_plot_err)?;

    for p in projections {
        let color = color_of(&p.scenario.color);
        let points = p
            .cumulative
            .iter()
            .enumerate()
            .map(|(x, &y)| (x as f64, y));

        let annotation = if p.scenario.dashed {
            top.draw_series(DashedLineSeries::new(points, 6, 4, color.stroke_width(2)))
                .map_err(to_plot_err)?
        } else {
            top.draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(to_plot_err)?
        };
        annotation
            .label(p.scenario.legend_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    top.draw_series(
        actual
            .iter()
            .enumerate()
            .map(|(x, &y)| Cross::new((x as f64, y), 5, RED.stroke_width(2))),
    )
    .map_err(to_plot_err)?
    .label("Actual")
    .legend(|(x, y)| Cross::new((x + 10, y), 5, RED.stroke_width(2)));

    top.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK.mix(0.4))
        .draw()
        .map_err(to_plot_err)?;

    // Bottom panel: daily new cases, same layout, no legend duplication
    let mut bottom = ChartBuilder::on(&panels[1])
        .caption("Daily new cases", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..delta_max)
        .map_err(to_plot_err)?;

    bottom
        .configure_mesh()
        .x_labels(num_days.min(30))
        .x_label_formatter(&|x: &f64| {
            let day = x.round() as usize;
            labels.get(day).cloned().unwrap_or_default()
        })
        .x_label_style(label_style)
        .y_desc("new cases")
        .draw()
        .map_err(to_plot_err)?;

    for p in projections {
        let color = color_of(&p.scenario.color);
        let points = p.deltas.iter().enumerate().map(|(x, &y)| (x as f64, y));
        if p.scenario.dashed {
            bottom
                .draw_series(DashedLineSeries::new(points, 6, 4, color.stroke_width(2)))
                .map_err(to_plot_err)?;
        } else {
            bottom
                .draw_series(LineSeries::new(points, color.stroke_width(2)))
                .map_err(to_plot_err)?;
        }
    }

    let actual_deltas = crate::analysis::daily_deltas(&actual);
    bottom
        .draw_series(
            actual_deltas
                .iter()
                .enumerate()
                .map(|(x, &y)| Cross::new((x as f64, y), 5, RED.stroke_width(2))),
        )
        .map_err(to_plot_err)?;

    root.present().map_err(to_plot_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{project_scenarios, FitConfig};
    use crate::models::{Observation, ScenarioSet};

    fn sample() -> (CaseSeries, Vec<ScenarioProjection>) {
        let mut series = CaseSeries::new("Plot Test");
        let counts = [
            Some(10),
            Some(20),
            Some(40),
            Some(80),
            Some(150),
            None,
            None,
            None,
        ];
        for (day, count) in counts.into_iter().enumerate() {
            let date = format!("2020-03-{:02}", day + 1);
            series
                .observations
                .push(Observation::parse(&date, count).unwrap());
        }
        let scenarios = ScenarioSet::default().scenarios;
        let projections =
            project_scenarios(&series, &scenarios, &FitConfig::default()).unwrap();
        (series, projections)
    }

    #[test]
    fn test_render_creates_png() {
        let (series, projections) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_chart(&series, &projections, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_render_empty_series_fails() {
        let series = CaseSeries::new("Empty");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let err = render_chart(&series, &[], &path).unwrap_err();
        assert!(matches!(err, EpiError::InsufficientData(_)));
    }

    #[test]
    fn test_color_of_known_names() {
        assert_eq!(color_of("green"), GREEN);
        assert_eq!(color_of("blue"), BLUE);
        assert_eq!(color_of("black"), BLACK);
    }

    #[test]
    fn test_color_of_unknown_is_grey() {
        assert_eq!(color_of("grey"), RGBColor(128, 128, 128));
        assert_eq!(color_of("no-such-color"), RGBColor(128, 128, 128));
    }
}
