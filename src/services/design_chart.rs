use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use thiserror::Error;

use crate::domain::result_point::ResultPoint;
use crate::services::chart_data::{AxisPairing, series_points};

#[derive(Error, Debug)]
pub enum DesignChartError {
    #[error("no points to plot")]
    EmptySeries,
    #[error("failed to render design chart: {0}")]
    Render(String),
}

const PROPOSED_COLOR: RGBColor = RGBColor(30, 122, 204);
const BASELINE_COLOR: RGBColor = RGBColor(204, 92, 30);

pub async fn write_design_chart_png(
    output_path: &str,
    proposed: &[ResultPoint],
    baseline: &[ResultPoint],
    pairing: AxisPairing,
    highlight: Vec<(f64, f64)>,
) -> Result<(), DesignChartError> {
    let output_path = output_path.to_string();
    let proposed = series_points(proposed, pairing);
    let baseline = series_points(baseline, pairing);
    tokio::task::spawn_blocking(move || {
        render_design_chart_png(&output_path, &proposed, &baseline, pairing, &highlight)
    })
    .await
    .map_err(|e| DesignChartError::Render(e.to_string()))??;
    Ok(())
}

fn render_design_chart_png(
    output_path: &str,
    proposed: &[(f64, f64)],
    baseline: &[(f64, f64)],
    pairing: AxisPairing,
    highlight: &[(f64, f64)],
) -> Result<(), DesignChartError> {
    if proposed.is_empty() && baseline.is_empty() {
        return Err(DesignChartError::EmptySeries);
    }

    let (x_range, y_range) = padded_ranges(proposed.iter().chain(baseline));
    let (x_desc, y_desc) = pairing.axis_labels();

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DesignChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Design Comparison", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| DesignChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| DesignChartError::Render(e.to_string()))?;

    draw_design(&mut chart, proposed, PROPOSED_COLOR, "Proposed")?;
    draw_design(&mut chart, baseline, BASELINE_COLOR, "Baseline")?;

    let highlight_style = ShapeStyle::from(&BLACK).stroke_width(2);
    chart
        .draw_series(
            highlight
                .iter()
                .map(|point| Circle::new(*point, 8, highlight_style)),
        )
        .map_err(|e| DesignChartError::Render(e.to_string()))?;

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .label_font(("sans-serif", 18))
        .draw()
        .map_err(|e| DesignChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| DesignChartError::Render(e.to_string()))?;
    Ok(())
}

fn draw_design(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    points: &[(f64, f64)],
    color: RGBColor,
    label: &str,
) -> Result<(), DesignChartError> {
    if points.is_empty() {
        return Ok(());
    }

    chart
        .draw_series(LineSeries::new(points.iter().copied(), color))
        .map_err(|e| DesignChartError::Render(e.to_string()))?
        .label(label.to_string())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

    let marker_style = ShapeStyle::from(&color).filled();
    chart
        .draw_series(
            points
                .iter()
                .map(|point| Circle::new(*point, 4, marker_style)),
        )
        .map_err(|e| DesignChartError::Render(e.to_string()))?;
    Ok(())
}

fn padded_ranges<'a>(
    points: impl Iterator<Item = &'a (f64, f64)>,
) -> (std::ops::Range<f64>, std::ops::Range<f64>) {
    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (x, y) in points {
        min_x = min_x.min(*x);
        max_x = max_x.max(*x);
        min_y = min_y.min(*y);
        max_y = max_y.max(*y);
    }

    let x_pad = ((max_x - min_x) * 0.05).max(1.0);
    let y_pad = ((max_y - min_y) * 0.05).max(0.01);
    (
        (min_x - x_pad)..(max_x + x_pad),
        (min_y - y_pad)..(max_y + y_pad),
    )
}
