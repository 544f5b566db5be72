use crate::domain::result_point::{GroupSizes, ResultPoint};
use crate::domain::series::{Design, ResultSeries, ResultsPayload};
use crate::domain::study::{EndpointKind, StudyConfig, TreatmentArm};
use crate::services::data_source::{DataSourceError, ResultSource};

pub fn build_point(power: f64, sample_size: u32, enrollment_months: f64, cost: f64) -> ResultPoint {
    ResultPoint {
        power,
        sample_size,
        enrollment_months,
        cost,
        secondary_power: None,
        groups: GroupSizes {
            treatment: [None, None, None],
            control: sample_size,
        },
    }
}

pub fn build_payload(proposed: Vec<ResultPoint>, baseline: Vec<ResultPoint>) -> ResultsPayload {
    ResultsPayload {
        proposed: ResultSeries {
            design: Design::Proposed,
            points: proposed,
        },
        baseline: ResultSeries {
            design: Design::Baseline,
            points: baseline,
        },
        scenarios: Vec::new(),
    }
}

pub fn build_study() -> StudyConfig {
    StudyConfig {
        base_url: "http://localhost:8080".to_string(),
        study_name: "demo study".to_string(),
        endpoint: EndpointKind::Continuous,
        effect_size: 0.35,
        secondary_effect_size: None,
        arms: vec![TreatmentArm {
            name: "low dose".to_string(),
            allocation: 1.0,
        }],
        control_allocation: 1.0,
        enrollment_months: 18.0,
        follow_up_months: 6.0,
        dropout_rate: 0.1,
        alpha: 0.05,
        runs: 1000,
    }
}

// A mock ResultSource that returns a canned payload without any network.
pub struct CannedResultSource {
    pub payload: ResultsPayload,
}

#[async_trait::async_trait]
impl ResultSource for CannedResultSource {
    async fn fetch_results(&self, _study: &StudyConfig) -> Result<ResultsPayload, DataSourceError> {
        Ok(self.payload.clone())
    }
}

// A mock ResultSource that always fails before producing a payload.
pub struct FailingResultSource;

#[async_trait::async_trait]
impl ResultSource for FailingResultSource {
    async fn fetch_results(&self, _study: &StudyConfig) -> Result<ResultsPayload, DataSourceError> {
        Err(DataSourceError::Connection)
    }
}
