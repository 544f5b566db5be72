use crate::domain::comparison::{Comparison, MetricDelta};
use crate::domain::result_point::ResultPoint;

pub fn format_comparison_report(comparison: &Comparison) -> String {
    let mut lines = Vec::new();
    lines.push("Design Comparison".to_string());
    lines.push(format!("Target power: {:.2}", comparison.target_power));
    lines.push(format!(
        "Proposed: {}",
        format_point(comparison.proposed.as_ref())
    ));
    lines.push(format!(
        "Baseline: {}",
        format_point(comparison.baseline.as_ref())
    ));
    lines.push(String::new());
    lines.push("Deltas:".to_string());
    lines.push("Metric | Change | Direction".to_string());
    lines.push("-------|--------|----------".to_string());
    lines.push(format_delta_row("Sample size", &comparison.deltas.sample_size));
    lines.push(format_delta_row(
        "Enrollment time",
        &comparison.deltas.enrollment_time,
    ));
    lines.push(format_delta_row("Cost", &comparison.deltas.cost));
    lines.push(format_delta_row("Power", &comparison.deltas.power));

    lines.join("\n")
}

fn format_point(point: Option<&ResultPoint>) -> String {
    match point {
        Some(point) => format!(
            "power {:.2}, {} patients, {:.1} months, {:.2}M",
            point.power,
            point.sample_size,
            point.enrollment_months,
            point.cost / 1_000_000.0
        ),
        None => "no match".to_string(),
    }
}

fn format_delta_row(label: &str, delta: &MetricDelta) -> String {
    let (change, direction) = match delta {
        MetricDelta::NotApplicable => ("n/a".to_string(), "n/a"),
        MetricDelta::NoLoss => ("no loss".to_string(), "kept"),
        MetricDelta::Change {
            magnitude_pct,
            improved,
        } => (
            format!("{magnitude_pct:.2}%"),
            if *improved { "improved" } else { "worsened" },
        ),
    };
    format!("{label} | {change} | {direction}")
}
