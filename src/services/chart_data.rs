//! Reshapes result points into the `(x, y)` pairs the chart layer draws.
//! Field selection and display-unit conversion only.

use crate::domain::result_point::ResultPoint;

/// Costs are charted in millions.
pub const COST_DISPLAY_DIVISOR: f64 = 1_000_000.0;

/// The named axis pairings the product charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisPairing {
    SampleSizePower,
    EnrollmentPower,
    SampleSizeCost,
}

impl AxisPairing {
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            AxisPairing::SampleSizePower => ("Total sample size", "Power"),
            AxisPairing::EnrollmentPower => ("Enrollment time in months", "Power"),
            AxisPairing::SampleSizeCost => ("Total sample size", "Cost in millions"),
        }
    }
}

pub fn point_xy(point: &ResultPoint, pairing: AxisPairing) -> (f64, f64) {
    match pairing {
        AxisPairing::SampleSizePower => (point.sample_size as f64, point.power),
        AxisPairing::EnrollmentPower => (point.enrollment_months, point.power),
        AxisPairing::SampleSizeCost => (
            point.sample_size as f64,
            point.cost / COST_DISPLAY_DIVISOR,
        ),
    }
}

pub fn series_points(points: &[ResultPoint], pairing: AxisPairing) -> Vec<(f64, f64)> {
    points.iter().map(|point| point_xy(point, pairing)).collect()
}
