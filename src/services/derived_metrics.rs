//! Relative-change calculation between the matched proposed and baseline
//! points.

use crate::domain::comparison::{ComparisonDeltas, MetricDelta};
use crate::domain::result_point::ResultPoint;

/// Computes one delta per metric. Without a baseline point every delta is
/// `NotApplicable` rather than a silently wrong zero.
pub fn compare_points(proposed: &ResultPoint, baseline: Option<&ResultPoint>) -> ComparisonDeltas {
    let Some(baseline) = baseline else {
        return ComparisonDeltas::not_applicable();
    };

    ComparisonDeltas {
        sample_size: reduction_delta(proposed.sample_size as f64, baseline.sample_size as f64),
        enrollment_time: reduction_delta(proposed.enrollment_months, baseline.enrollment_months),
        cost: reduction_delta(proposed.cost, baseline.cost),
        power: power_delta(proposed.power, baseline.power),
    }
}

/// Delta for a lower-is-better metric. A zero baseline marks missing
/// upstream data, so the result is `NotApplicable` instead of a division
/// blowing up into infinity.
fn reduction_delta(proposed: f64, baseline: f64) -> MetricDelta {
    if baseline == 0.0 {
        return MetricDelta::NotApplicable;
    }
    let raw = (baseline - proposed) / baseline * 100.0;
    MetricDelta::Change {
        magnitude_pct: raw.abs(),
        improved: raw >= 0.0,
    }
}

/// Power is higher-is-better: matching or beating the baseline reports the
/// distinguished no-loss state, never a percentage.
fn power_delta(proposed: f64, baseline: f64) -> MetricDelta {
    if proposed >= baseline {
        return MetricDelta::NoLoss;
    }
    MetricDelta::Change {
        magnitude_pct: (baseline - proposed) * 100.0,
        improved: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::build_point;

    #[test]
    fn smaller_proposed_sample_size_is_an_improvement() {
        let proposed = build_point(0.85, 400, 15.0, 2_500_000.0);
        let baseline = build_point(0.85, 500, 18.0, 3_000_000.0);

        let deltas = compare_points(&proposed, Some(&baseline));

        assert_eq!(
            deltas.sample_size,
            MetricDelta::Change {
                magnitude_pct: 20.0,
                improved: true,
            }
        );
    }

    #[test]
    fn larger_proposed_sample_size_is_a_worsening() {
        let proposed = build_point(0.85, 500, 15.0, 2_500_000.0);
        let baseline = build_point(0.85, 400, 18.0, 3_000_000.0);

        let deltas = compare_points(&proposed, Some(&baseline));

        assert_eq!(
            deltas.sample_size,
            MetricDelta::Change {
                magnitude_pct: 25.0,
                improved: false,
            }
        );
    }

    #[test]
    fn power_at_or_above_baseline_reports_no_loss() {
        let proposed = build_point(0.85, 400, 15.0, 2_500_000.0);
        let baseline = build_point(0.80, 500, 18.0, 3_000_000.0);

        let deltas = compare_points(&proposed, Some(&baseline));

        assert_eq!(deltas.power, MetricDelta::NoLoss);
    }

    #[test]
    fn power_below_baseline_reports_the_absolute_loss() {
        let proposed = build_point(0.78, 400, 15.0, 2_500_000.0);
        let baseline = build_point(0.85, 500, 18.0, 3_000_000.0);

        let deltas = compare_points(&proposed, Some(&baseline));

        match deltas.power {
            MetricDelta::Change {
                magnitude_pct,
                improved,
            } => {
                assert!((magnitude_pct - 7.0).abs() < 1e-9);
                assert!(!improved);
            }
            other => panic!("expected a power loss, got {other:?}"),
        }
    }

    #[test]
    fn zero_baseline_cost_is_not_applicable() {
        let proposed = build_point(0.85, 400, 15.0, 2_500_000.0);
        let mut baseline = build_point(0.85, 500, 18.0, 3_000_000.0);
        baseline.cost = 0.0;

        let deltas = compare_points(&proposed, Some(&baseline));

        assert_eq!(deltas.cost, MetricDelta::NotApplicable);
        assert!(deltas.sample_size.is_applicable());
    }

    #[test]
    fn missing_baseline_makes_every_delta_not_applicable() {
        let proposed = build_point(0.85, 400, 15.0, 2_500_000.0);

        let deltas = compare_points(&proposed, None);

        assert_eq!(deltas, ComparisonDeltas::not_applicable());
    }

    #[test]
    fn equal_values_report_a_zero_improvement() {
        let proposed = build_point(0.85, 400, 15.0, 2_500_000.0);
        let baseline = proposed.clone();

        let deltas = compare_points(&proposed, Some(&baseline));

        assert_eq!(
            deltas.cost,
            MetricDelta::Change {
                magnitude_pct: 0.0,
                improved: true,
            }
        );
    }

    #[test]
    fn compare_points_is_idempotent() {
        let proposed = build_point(0.82, 410, 14.5, 2_400_000.0);
        let baseline = build_point(0.84, 505, 17.5, 3_100_000.0);

        let first = compare_points(&proposed, Some(&baseline));
        let second = compare_points(&proposed, Some(&baseline));

        assert_eq!(first, second);
    }
}
