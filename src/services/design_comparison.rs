//! Matches both design series against one target power and derives the
//! metric deltas. Pure over the applied snapshot: identical inputs always
//! produce the identical comparison.

use crate::domain::comparison::{Comparison, ComparisonDeltas};
use crate::domain::series::ResultsPayload;
use crate::services::derived_metrics::compare_points;
use crate::services::nearest_match::find_nearest;
use crate::services::series_filter::{DisplayBand, display_series};

pub fn compare_designs(
    payload: &ResultsPayload,
    target_power: f64,
    band: &DisplayBand,
) -> Comparison {
    let proposed_points = display_series(&payload.proposed.points, band);
    let baseline_points = display_series(&payload.baseline.points, band);

    let proposed = find_nearest(&proposed_points, target_power)
        .map(|index| proposed_points[index].clone());
    let baseline = find_nearest(&baseline_points, target_power)
        .map(|index| baseline_points[index].clone());

    let deltas = match &proposed {
        Some(point) => compare_points(point, baseline.as_ref()),
        None => ComparisonDeltas::not_applicable(),
    };

    Comparison {
        target_power,
        proposed,
        baseline,
        deltas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::comparison::MetricDelta;
    use crate::test_support::{build_payload, build_point};

    #[test]
    fn compare_designs_matches_each_series_and_derives_deltas() {
        let payload = build_payload(
            vec![
                build_point(0.70, 320, 13.0, 2_100_000.0),
                build_point(0.85, 400, 15.0, 2_500_000.0),
            ],
            vec![
                build_point(0.72, 410, 16.0, 2_900_000.0),
                build_point(0.86, 500, 18.0, 3_000_000.0),
            ],
        );

        let comparison = compare_designs(&payload, 0.85, &DisplayBand::default());

        assert_eq!(comparison.proposed.as_ref().unwrap().sample_size, 400);
        assert_eq!(comparison.baseline.as_ref().unwrap().sample_size, 500);
        assert_eq!(
            comparison.deltas.sample_size,
            MetricDelta::Change {
                magnitude_pct: 20.0,
                improved: true,
            }
        );
    }

    #[test]
    fn compare_designs_without_baseline_points_yields_not_applicable_deltas() {
        let payload = build_payload(vec![build_point(0.85, 400, 15.0, 2_500_000.0)], vec![]);

        let comparison = compare_designs(&payload, 0.85, &DisplayBand::default());

        assert!(comparison.proposed.is_some());
        assert!(comparison.baseline.is_none());
        assert_eq!(comparison.deltas, ComparisonDeltas::not_applicable());
    }

    #[test]
    fn compare_designs_with_an_empty_payload_degrades_to_no_match() {
        let payload = build_payload(vec![], vec![]);

        let comparison = compare_designs(&payload, 0.85, &DisplayBand::default());

        assert!(comparison.proposed.is_none());
        assert!(comparison.baseline.is_none());
        assert_eq!(comparison.deltas, ComparisonDeltas::not_applicable());
    }

    #[test]
    fn compare_designs_matches_outside_the_band_via_the_display_fallback() {
        // Every point sits below the display band, so the filter yields
        // nothing and the unfiltered series must be used instead.
        let payload = build_payload(
            vec![build_point(0.50, 300, 12.0, 2_000_000.0)],
            vec![build_point(0.52, 380, 14.0, 2_600_000.0)],
        );

        let comparison = compare_designs(&payload, 0.85, &DisplayBand::default());

        assert_eq!(comparison.proposed.as_ref().unwrap().sample_size, 300);
        assert_eq!(comparison.baseline.as_ref().unwrap().sample_size, 380);
    }

    #[test]
    fn compare_designs_is_idempotent() {
        let payload = build_payload(
            vec![
                build_point(0.75, 350, 14.0, 2_300_000.0),
                build_point(0.88, 430, 16.0, 2_700_000.0),
            ],
            vec![build_point(0.87, 520, 19.0, 3_300_000.0)],
        );

        let first = compare_designs(&payload, 0.86, &DisplayBand::default());
        let second = compare_designs(&payload, 0.86, &DisplayBand::default());

        assert_eq!(first, second);
    }
}
