//! # Plot Output
//!
//! PNG chart rendering for the correlation report: scatter plots of
//! sentiment against price and a dual-axis quarterly line chart.

use crate::data::records::Period;
use anyhow::{bail, Result};
use plotters::prelude::*;
use std::path::Path;

/// Chart size in pixels.
const SCATTER_SIZE: (u32, u32) = (800, 600);
const LINES_SIZE: (u32, u32) = (1200, 600);

/// Axis range with a small margin around the data, widened when the data
/// is a single point or constant.
fn padded_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    let span = max - min;
    let pad = if span > 0.0 { span * 0.05 } else { 1.0 };
    (min - pad, max + pad)
}

/// Render a scatter plot of (x, y) points.
pub fn scatter_plot(
    path: &Path,
    points: &[(f64, f64)],
    title: &str,
    x_label: &str,
    y_label: &str,
) -> Result<()> {
    if points.is_empty() {
        bail!("no data points to plot for {:?}", path);
    }

    let (x_min, x_max) = padded_range(points.iter().map(|&(x, _)| x));
    let (y_min, y_max) = padded_range(points.iter().map(|&(_, y)| y));

    let root = BitMapBackend::new(path, SCATTER_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc(y_label)
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 5, BLUE.mix(0.8).filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Render sentiment and price by quarter on shared x, separate y axes.
pub fn dual_axis_lines(
    path: &Path,
    periods: &[Period],
    sentiment: &[Option<f64>],
    price: &[Option<f64>],
) -> Result<()> {
    if periods.is_empty() {
        bail!("no periods to plot for {:?}", path);
    }

    let labels: Vec<String> = periods.iter().map(|p| p.to_string()).collect();
    let sentiment_points: Vec<(usize, f64)> = sentiment
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .collect();
    let price_points: Vec<(usize, f64)> = price
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .collect();
    if sentiment_points.is_empty() || price_points.is_empty() {
        bail!("no complete series to plot for {:?}", path);
    }

    let (s_min, s_max) = padded_range(sentiment_points.iter().map(|&(_, v)| v));
    let (p_min, p_max) = padded_range(price_points.iter().map(|&(_, v)| v));

    let root = BitMapBackend::new(path, LINES_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment Score vs. WTI Oil Price by Quarter", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0..periods.len(), s_min..s_max)?
        .set_secondary_coord(0..periods.len(), p_min..p_max);

    chart
        .configure_mesh()
        .x_labels(periods.len().min(24))
        .x_label_formatter(&|index: &usize| labels.get(*index).cloned().unwrap_or_default())
        .x_desc("Quarter")
        .y_desc("Sentiment Score (-1 to +1)")
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("WTI Oil Price ($/bbl)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(sentiment_points, &BLUE).point_size(3))?
        .label("Sentiment Score")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_secondary_series(LineSeries::new(price_points, &RED).point_size(3))?
        .label("WTI Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_scatter_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scatter.png");
        let points = vec![(-1.0, 20.0), (0.0, 30.0), (1.0, 40.0)];
        scatter_plot(&path, &points, "test", "x", "y").unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_scatter_rejects_empty_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scatter.png");
        assert!(scatter_plot(&path, &[], "test", "x", "y").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_dual_axis_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.png");
        let periods = vec![Period::new(2020, 1), Period::new(2020, 2), Period::new(2020, 3)];
        let sentiment = vec![Some(-0.5), Some(0.0), Some(0.5)];
        let price = vec![Some(20.0), None, Some(40.0)];
        dual_axis_lines(&path, &periods, &sentiment, &price).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_dual_axis_rejects_all_missing_price() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lines.png");
        let periods = vec![Period::new(2020, 1)];
        let sentiment = vec![Some(0.5)];
        let price = vec![None];
        assert!(dual_axis_lines(&path, &periods, &sentiment, &price).is_err());
    }
}
