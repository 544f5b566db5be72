//! Display-range filtering for result series.
//!
//! - `filter_series` keeps only points whose power lies inside the band.
//! - `display_series` adds the fallback rule: when the band leaves nothing,
//!   the unfiltered points are used instead, so a chart never renders empty
//!   while raw data exists. Emptiness is the signal, not an error.

use crate::domain::result_point::ResultPoint;

/// Inclusive power band used to narrow a series for display. Defaults to
/// the range the target-power control covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBand {
    pub min_power: f64,
    pub max_power: f64,
}

impl Default for DisplayBand {
    fn default() -> Self {
        Self {
            min_power: 0.60,
            max_power: 0.95,
        }
    }
}

impl DisplayBand {
    pub fn contains(&self, power: f64) -> bool {
        power >= self.min_power && power <= self.max_power
    }
}

pub fn filter_series(points: &[ResultPoint], band: &DisplayBand) -> Vec<ResultPoint> {
    points
        .iter()
        .filter(|point| band.contains(point.power))
        .cloned()
        .collect()
}

pub fn display_series(points: &[ResultPoint], band: &DisplayBand) -> Vec<ResultPoint> {
    let filtered = filter_series(points, band);
    if filtered.is_empty() {
        points.to_vec()
    } else {
        filtered
    }
}
