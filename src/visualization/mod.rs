mod charts;
mod plot;
mod tables;

pub use charts::{format_delta_histogram, print_delta_histogram};
pub use plot::render_chart;
pub use tables::{
    format_fit_summary_table, format_projection_table, print_fit_summary_table,
    print_projection_table,
};
