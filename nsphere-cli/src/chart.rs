//! Renders a comparison chart of run progressions with a line per run.

use nsphere_core::prelude::{Float, GenericResult};
use plotters::prelude::*;
use std::path::Path;

/// A named progression of one run: `(iteration, average fitness)` pairs.
pub type RunSeries = (String, Vec<(usize, Float)>);

/// Draws all run progressions into a single chart at given path.
pub fn draw_comparison(path: &Path, title: &str, series: &[RunSeries]) -> GenericResult<()> {
    let max_iteration = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(iteration, _)| *iteration))
        .max()
        .unwrap_or(1);
    let max_average = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(_, average)| *average))
        .fold(0., Float::max);

    let area = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    area.fill(&WHITE).map_err(|err| err.to_string())?;

    let mut chart = ChartBuilder::on(&area)
        .caption(title, ("sans-serif", 20))
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .margin(10)
        .build_cartesian_2d(0.0..max_iteration as Float, 0.0..max_average)
        .map_err(|err| err.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Iteration")
        .y_desc("Average")
        .draw()
        .map_err(|err| err.to_string())?;

    for (idx, (label, points)) in series.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        chart
            .draw_series(LineSeries::new(
                points.iter().map(|(iteration, average)| (*iteration as Float, *average)),
                &color,
            ))
            .map_err(|err| err.to_string())?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart.configure_series_labels().border_style(BLACK).draw().map_err(|err| err.to_string())?;
    area.present().map_err(|err| err.to_string())?;

    Ok(())
}
