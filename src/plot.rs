use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

use plotters::{
    prelude::{BitMapBackend, ChartBuilder, IntoDrawingArea, LabelAreaPosition},
    series::LineSeries,
    style::{BLUE, WHITE},
};

use crate::error::{PerceptronError, Result};

/// Draws the per-iteration training score as a line chart PNG.
pub fn plot_history(history: &[f64], file_path: impl AsRef<Path>) -> Result<()> {
    let root_area = BitMapBackend::new(file_path.as_ref(), (1280, 720)).into_drawing_area();
    root_area.fill(&WHITE).map_err(plot_error)?;

    let mut chart = ChartBuilder::on(&root_area)
        .set_label_area_size(LabelAreaPosition::Left, 50)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .caption("Perceptron score per iteration", ("sans-serif", 30))
        .build_cartesian_2d(0..history.len().max(1), score_range(history))
        .map_err(plot_error)?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Score")
        .draw()
        .map_err(plot_error)?;

    chart
        .draw_series(LineSeries::new(history.iter().copied().enumerate(), &BLUE))
        .map_err(plot_error)?;

    root_area.present().map_err(plot_error)?;

    Ok(())
}

// Scores normally live in [-1, 1]; labels outside {0, 1} can push them further.
fn score_range(history: &[f64]) -> Range<f64> {
    let low = history.iter().copied().fold(-1.0, f64::min);
    let high = history.iter().copied().fold(1.0, f64::max);

    low..high
}

fn plot_error<E: Display>(error: E) -> PerceptronError {
    PerceptronError::Plot(error.to_string())
}
