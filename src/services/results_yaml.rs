use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;

use crate::domain::result_point::{GroupSizes, ResultPoint};
use crate::domain::series::{Design, ResultSeries, ResultsPayload, ScenarioDraws};
use crate::domain::study::EndpointKind;

#[derive(Error, Debug)]
pub enum ResultsYamlError {
    #[error("failed to read results yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse results yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown endpoint kind: {0}")]
    UnknownEndpoint(String),
}

/// The decoded result snapshot plus the request context it came from. One
/// fetch produces one snapshot file; the next fetch replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsSnapshot {
    pub study_name: String,
    pub endpoint: EndpointKind,
    pub fetch_date: String,
    pub payload: ResultsPayload,
}

#[derive(Serialize, Deserialize)]
struct SnapshotRecord {
    study_name: String,
    endpoint: String,
    fetch_date: String,
    proposed: Vec<PointRecord>,
    baseline: Vec<PointRecord>,
    scenarios: Vec<ScenarioRecord>,
}

#[derive(Serialize, Deserialize)]
pub struct PointRecord {
    pub power: f64,
    pub sample_size: u32,
    pub enrollment_months: f64,
    pub cost: f64,
    pub secondary_power: Option<f64>,
    pub arm_sizes: Vec<u32>,
    pub control_size: u32,
}

#[derive(Serialize, Deserialize)]
struct ScenarioRecord {
    name: String,
    draws: Vec<Value>,
}

impl PointRecord {
    pub fn from_point(point: &ResultPoint) -> Self {
        Self {
            power: point.power,
            sample_size: point.sample_size,
            enrollment_months: point.enrollment_months,
            cost: point.cost,
            secondary_power: point.secondary_power,
            arm_sizes: point.groups.treatment.iter().flatten().copied().collect(),
            control_size: point.groups.control,
        }
    }

    pub fn into_point(self) -> ResultPoint {
        let mut treatment = [None, None, None];
        for (slot, size) in treatment.iter_mut().zip(self.arm_sizes) {
            *slot = Some(size);
        }
        ResultPoint {
            power: self.power,
            sample_size: self.sample_size,
            enrollment_months: self.enrollment_months,
            cost: self.cost,
            secondary_power: self.secondary_power,
            groups: GroupSizes {
                treatment,
                control: self.control_size,
            },
        }
    }
}

pub fn serialize_snapshot_to_yaml<W: Write>(
    writer: &mut W,
    snapshot: &ResultsSnapshot,
) -> Result<(), ResultsYamlError> {
    let record = SnapshotRecord {
        study_name: snapshot.study_name.clone(),
        endpoint: snapshot.endpoint.label().to_string(),
        fetch_date: snapshot.fetch_date.clone(),
        proposed: point_records(&snapshot.payload.proposed.points),
        baseline: point_records(&snapshot.payload.baseline.points),
        scenarios: snapshot
            .payload
            .scenarios
            .iter()
            .map(|scenario| ScenarioRecord {
                name: scenario.name.clone(),
                draws: scenario.draws.iter().map(|draw| Value::from(*draw)).collect(),
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

pub fn load_snapshot_from_yaml_file(path: &str) -> Result<ResultsSnapshot, ResultsYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_snapshot_from_yaml_str(&contents)
}

pub fn deserialize_snapshot_from_yaml_str(
    input: &str,
) -> Result<ResultsSnapshot, ResultsYamlError> {
    let record: SnapshotRecord = serde_yaml::from_str(input)?;
    let endpoint = match record.endpoint.to_ascii_lowercase().as_str() {
        "continuous" => EndpointKind::Continuous,
        "binary" => EndpointKind::Binary,
        "survival" => EndpointKind::Survival,
        other => return Err(ResultsYamlError::UnknownEndpoint(other.to_string())),
    };

    Ok(ResultsSnapshot {
        study_name: record.study_name,
        endpoint,
        fetch_date: record.fetch_date,
        payload: ResultsPayload {
            proposed: ResultSeries {
                design: Design::Proposed,
                points: record.proposed.into_iter().map(PointRecord::into_point).collect(),
            },
            baseline: ResultSeries {
                design: Design::Baseline,
                points: record.baseline.into_iter().map(PointRecord::into_point).collect(),
            },
            scenarios: record
                .scenarios
                .into_iter()
                .map(|scenario| ScenarioDraws {
                    name: scenario.name,
                    draws: scenario.draws.iter().filter_map(draw_value).collect(),
                })
                .collect(),
        },
    })
}

// Draw entries that are not finite numbers are dropped on read, mirroring
// the decode boundary of the modeling client.
fn draw_value(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn point_records(points: &[ResultPoint]) -> Vec<PointRecord> {
    points.iter().map(PointRecord::from_point).collect()
}
