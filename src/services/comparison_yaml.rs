use std::io::{self, Write};

use serde::Serialize;
use thiserror::Error;

use crate::domain::comparison::{Comparison, MetricDelta};
use crate::services::boxplot::ScenarioSummary;
use crate::services::results_yaml::PointRecord;
use crate::services::series_filter::DisplayBand;

#[derive(Error, Debug)]
pub enum ComparisonYamlError {
    #[error("failed to serialize comparison yaml: {0}")]
    Serialize(#[from] serde_yaml::Error),
    #[error("failed to write comparison yaml: {0}")]
    Write(#[from] io::Error),
}

#[derive(Serialize)]
struct ComparisonRecord {
    target_power: f64,
    band_min_power: f64,
    band_max_power: f64,
    proposed: Option<PointRecord>,
    baseline: Option<PointRecord>,
    deltas: DeltasRecord,
}

#[derive(Serialize)]
struct DeltasRecord {
    sample_size: DeltaRecord,
    enrollment_time: DeltaRecord,
    cost: DeltaRecord,
    power: DeltaRecord,
}

#[derive(Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
enum DeltaRecord {
    NotApplicable,
    NoLoss,
    Change { magnitude_pct: f64, improved: bool },
}

impl DeltaRecord {
    fn from_delta(delta: MetricDelta) -> Self {
        match delta {
            MetricDelta::NotApplicable => DeltaRecord::NotApplicable,
            MetricDelta::NoLoss => DeltaRecord::NoLoss,
            MetricDelta::Change {
                magnitude_pct,
                improved,
            } => DeltaRecord::Change {
                magnitude_pct,
                improved,
            },
        }
    }
}

pub fn serialize_comparison_to_yaml<W: Write>(
    writer: &mut W,
    comparison: &Comparison,
    band: &DisplayBand,
) -> Result<(), ComparisonYamlError> {
    let record = ComparisonRecord {
        target_power: comparison.target_power,
        band_min_power: band.min_power,
        band_max_power: band.max_power,
        proposed: comparison.proposed.as_ref().map(PointRecord::from_point),
        baseline: comparison.baseline.as_ref().map(PointRecord::from_point),
        deltas: DeltasRecord {
            sample_size: DeltaRecord::from_delta(comparison.deltas.sample_size),
            enrollment_time: DeltaRecord::from_delta(comparison.deltas.enrollment_time),
            cost: DeltaRecord::from_delta(comparison.deltas.cost),
            power: DeltaRecord::from_delta(comparison.deltas.power),
        },
    };

    let yaml = serde_yaml::to_string(&record)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

#[derive(Serialize)]
struct SummaryFileRecord {
    overall_mean: f64,
    scenarios: Vec<ScenarioSummaryRecord>,
}

#[derive(Serialize)]
struct ScenarioSummaryRecord {
    name: String,
    min: f64,
    q1: f64,
    median: f64,
    q3: f64,
    max: f64,
    outliers: Vec<f64>,
}

pub fn serialize_summaries_to_yaml<W: Write>(
    writer: &mut W,
    summaries: &[ScenarioSummary],
) -> Result<(), ComparisonYamlError> {
    let record = SummaryFileRecord {
        overall_mean: summaries
            .first()
            .map(|scenario| scenario.summary.overall_mean)
            .unwrap_or(0.0),
        scenarios: summaries
            .iter()
            .map(|scenario| ScenarioSummaryRecord {
                name: scenario.name.clone(),
                min: scenario.summary.min,
                q1: scenario.summary.q1,
                median: scenario.summary.median,
                q3: scenario.summary.q3,
                max: scenario.summary.max,
                outliers: scenario.summary.outliers.clone(),
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}
