//! Nearest-point lookup along the power axis.

use crate::domain::result_point::ResultPoint;

/// Returns the index of the point whose power is closest to `target`, or
/// `None` for an empty slice. Ties keep the earliest index: the scan only
/// replaces the running best on a strictly smaller distance, so results are
/// stable across repeated calls with the same input. Linear on purpose —
/// series carry tens to low hundreds of points and are not sorted.
pub fn find_nearest(points: &[ResultPoint], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, point) in points.iter().enumerate() {
        let distance = (point.power - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }

    best.map(|(index, _)| index)
}
