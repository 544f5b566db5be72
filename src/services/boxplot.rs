//! Descriptive statistics for box-plot rendering.
//!
//! Quartiles use the nearest-rank scheme: the value at index
//! `floor(q * n)` of the ascending sort. Whisker ends are the extreme
//! values still inside the 1.5-IQR fences; values outside the fences are
//! reported separately as outliers. Sparse or invalid input degrades to a
//! flat all-zero summary instead of failing, so a malformed upstream array
//! renders as an empty box rather than a crashed chart.

use crate::domain::series::ScenarioDraws;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub outliers: Vec<f64>,
    pub overall_mean: f64,
}

impl BoxplotSummary {
    fn degenerate() -> Self {
        Self {
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
            outliers: Vec::new(),
            overall_mean: 0.0,
        }
    }
}

/// Box-plot summary for one named scenario category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub name: String,
    pub summary: BoxplotSummary,
}

/// Summarizes one array of draws. Non-finite entries are dropped before
/// any statistics; fewer than 5 usable values yields the degenerate
/// summary.
pub fn summarize(values: &[f64]) -> BoxplotSummary {
    let mut usable = sanitize(values);
    if usable.len() < 5 {
        return BoxplotSummary::degenerate();
    }
    usable.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = usable.len();
    let q1 = usable[n / 4];
    let median = usable[n / 2];
    let q3 = usable[(3 * n) / 4];

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let outliers: Vec<f64> = usable
        .iter()
        .copied()
        .filter(|value| *value < lower_fence || *value > upper_fence)
        .collect();

    let in_fence: Vec<f64> = usable
        .iter()
        .copied()
        .filter(|value| *value >= lower_fence && *value <= upper_fence)
        .collect();
    let min = in_fence.first().copied().unwrap_or(usable[0]);
    let max = in_fence.last().copied().unwrap_or(usable[n - 1]);

    let overall_mean = usable.iter().sum::<f64>() / n as f64;

    BoxplotSummary {
        min,
        q1,
        median,
        q3,
        max,
        outliers,
        overall_mean,
    }
}

/// Summarizes every scenario of one result snapshot. The reported
/// `overall_mean` is the mean over all usable draws across all categories,
/// outliers included, and is the same for every returned summary.
pub fn summarize_scenarios(scenarios: &[ScenarioDraws]) -> Vec<ScenarioSummary> {
    let mut total = 0.0;
    let mut count = 0usize;
    for scenario in scenarios {
        for value in sanitize(&scenario.draws) {
            total += value;
            count += 1;
        }
    }
    let dataset_mean = if count == 0 { 0.0 } else { total / count as f64 };

    scenarios
        .iter()
        .map(|scenario| {
            let mut summary = summarize(&scenario.draws);
            summary.overall_mean = dataset_mean;
            ScenarioSummary {
                name: scenario.name.clone(),
                summary,
            }
        })
        .collect()
}

fn sanitize(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .collect()
}
