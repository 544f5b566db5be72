use crate::domain::result_point::ResultPoint;

/// Relative change for one metric between the matched proposed and baseline
/// points. `NotApplicable` covers a missing baseline point and a zero
/// baseline value; `NoLoss` is the distinguished state for power when the
/// proposed design is at least as powerful as the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricDelta {
    NotApplicable,
    NoLoss,
    Change { magnitude_pct: f64, improved: bool },
}

impl MetricDelta {
    pub fn is_applicable(&self) -> bool {
        !matches!(self, MetricDelta::NotApplicable)
    }
}

/// One delta per compared metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonDeltas {
    pub sample_size: MetricDelta,
    pub enrollment_time: MetricDelta,
    pub cost: MetricDelta,
    pub power: MetricDelta,
}

impl ComparisonDeltas {
    pub fn not_applicable() -> Self {
        Self {
            sample_size: MetricDelta::NotApplicable,
            enrollment_time: MetricDelta::NotApplicable,
            cost: MetricDelta::NotApplicable,
            power: MetricDelta::NotApplicable,
        }
    }
}

/// Outcome of matching both series against one target power. `proposed` is
/// absent only when the proposed series itself was empty, in which case the
/// deltas are all not-applicable.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub target_power: f64,
    pub proposed: Option<ResultPoint>,
    pub baseline: Option<ResultPoint>,
    pub deltas: ComparisonDeltas,
}
