use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;
use thiserror::Error;

use crate::services::boxplot::ScenarioSummary;

#[derive(Error, Debug)]
pub enum BoxplotChartError {
    #[error("no scenarios to plot")]
    EmptyScenarios,
    #[error("failed to render boxplot chart: {0}")]
    Render(String),
}

const BOX_COLOR: RGBColor = RGBColor(30, 122, 204);
const MEAN_COLOR: RGBColor = RGBColor(204, 92, 30);
const BOX_HALF_WIDTH: f64 = 0.25;

pub async fn write_boxplot_chart_png(
    output_path: &str,
    summaries: &[ScenarioSummary],
) -> Result<(), BoxplotChartError> {
    let output_path = output_path.to_string();
    let summaries = summaries.to_vec();
    tokio::task::spawn_blocking(move || render_boxplot_chart_png(&output_path, &summaries))
        .await
        .map_err(|e| BoxplotChartError::Render(e.to_string()))??;
    Ok(())
}

fn render_boxplot_chart_png(
    output_path: &str,
    summaries: &[ScenarioSummary],
) -> Result<(), BoxplotChartError> {
    if summaries.is_empty() {
        return Err(BoxplotChartError::EmptyScenarios);
    }

    let (min_y, max_y) = value_range(summaries);
    let pad = ((max_y - min_y) * 0.08).max(1.0);
    let max_x = summaries.len() as f64;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Scenario Summaries", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0.0..max_x, (min_y - pad)..(max_y + pad))
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Scenario")
        .y_desc("Draw value")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(summaries.len())
        .x_label_formatter(&|position| {
            let index = position.floor() as usize;
            summaries
                .get(index)
                .map(|scenario| scenario.name.clone())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    for (index, scenario) in summaries.iter().enumerate() {
        draw_box(&mut chart, index as f64 + 0.5, scenario)?;
    }

    // Dataset-wide mean, identical across the summaries.
    let overall_mean = summaries[0].summary.overall_mean;
    chart
        .draw_series(LineSeries::new(
            [(0.0, overall_mean), (max_x, overall_mean)],
            ShapeStyle::from(&MEAN_COLOR).stroke_width(2),
        ))
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;
    Ok(())
}

fn draw_box(
    chart: &mut ChartContext<'_, BitMapBackend<'_>, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    center: f64,
    scenario: &ScenarioSummary,
) -> Result<(), BoxplotChartError> {
    let summary = &scenario.summary;
    let left = center - BOX_HALF_WIDTH;
    let right = center + BOX_HALF_WIDTH;
    let line_style = ShapeStyle::from(&BOX_COLOR).stroke_width(2);

    // Whiskers, box, and median line.
    let elements = vec![
        PathElement::new(vec![(center, summary.min), (center, summary.q1)], line_style),
        PathElement::new(vec![(center, summary.q3), (center, summary.max)], line_style),
        PathElement::new(vec![(left, summary.min), (right, summary.min)], line_style),
        PathElement::new(vec![(left, summary.max), (right, summary.max)], line_style),
        PathElement::new(vec![(left, summary.median), (right, summary.median)], line_style),
    ];
    chart
        .draw_series(elements)
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    chart
        .draw_series([Rectangle::new(
            [(left, summary.q1), (right, summary.q3)],
            ShapeStyle::from(&BOX_COLOR),
        )])
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;

    let outlier_style = ShapeStyle::from(&BOX_COLOR).filled();
    chart
        .draw_series(
            summary
                .outliers
                .iter()
                .map(|value| Circle::new((center, *value), 3, outlier_style)),
        )
        .map_err(|e| BoxplotChartError::Render(e.to_string()))?;
    Ok(())
}

fn value_range(summaries: &[ScenarioSummary]) -> (f64, f64) {
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for scenario in summaries {
        let summary = &scenario.summary;
        min_y = min_y.min(summary.min).min(summary.overall_mean);
        max_y = max_y.max(summary.max).max(summary.overall_mean);
        for outlier in &summary.outliers {
            min_y = min_y.min(*outlier);
            max_y = max_y.max(*outlier);
        }
    }
    (min_y, max_y)
}
