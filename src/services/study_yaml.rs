use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::study::{EndpointKind, StudyConfig, TreatmentArm};

#[derive(Error, Debug)]
pub enum StudyYamlError {
    #[error("failed to read study yaml: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse study yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("unknown endpoint kind: {0}")]
    UnknownEndpoint(String),
    #[error("base_url must not be empty")]
    MissingBaseUrl,
    #[error("study_name must not be empty")]
    MissingStudyName,
    #[error("a study needs 1 to 3 treatment arms, got {0}")]
    InvalidArmCount(usize),
    #[error("allocation for arm {0} must be positive")]
    InvalidAllocation(String),
    #[error("control allocation must be positive")]
    InvalidControlAllocation,
    #[error("effect size must be a positive finite number")]
    InvalidEffectSize,
    #[error("enrollment duration must be positive")]
    InvalidEnrollment,
    #[error("follow-up duration must not be negative")]
    InvalidFollowUp,
    #[error("dropout rate must lie in [0, 1)")]
    InvalidDropoutRate,
    #[error("alpha must lie in (0, 1)")]
    InvalidAlpha,
    #[error("simulation run count must be greater than zero")]
    InvalidRuns,
}

#[derive(Deserialize)]
struct StudyRecord {
    base_url: String,
    study_name: String,
    endpoint: String,
    effect_size: f64,
    secondary_effect_size: Option<f64>,
    arms: Vec<ArmRecord>,
    control_allocation: f64,
    enrollment_months: f64,
    follow_up_months: f64,
    dropout_rate: f64,
    alpha: f64,
    runs: u32,
}

#[derive(Deserialize)]
struct ArmRecord {
    name: String,
    allocation: f64,
}

pub fn load_study_from_yaml_file(path: &str) -> Result<StudyConfig, StudyYamlError> {
    let contents = std::fs::read_to_string(path)?;
    study_from_yaml_str(&contents)
}

pub fn study_from_yaml_str(input: &str) -> Result<StudyConfig, StudyYamlError> {
    let record: StudyRecord = serde_yaml::from_str(input)?;
    let study = StudyConfig {
        base_url: record.base_url,
        study_name: record.study_name,
        endpoint: parse_endpoint(&record.endpoint)?,
        effect_size: record.effect_size,
        secondary_effect_size: record.secondary_effect_size,
        arms: record
            .arms
            .into_iter()
            .map(|arm| TreatmentArm {
                name: arm.name,
                allocation: arm.allocation,
            })
            .collect(),
        control_allocation: record.control_allocation,
        enrollment_months: record.enrollment_months,
        follow_up_months: record.follow_up_months,
        dropout_rate: record.dropout_rate,
        alpha: record.alpha,
        runs: record.runs,
    };
    validate_study(&study)?;
    Ok(study)
}

fn parse_endpoint(value: &str) -> Result<EndpointKind, StudyYamlError> {
    match value.to_ascii_lowercase().as_str() {
        "continuous" => Ok(EndpointKind::Continuous),
        "binary" => Ok(EndpointKind::Binary),
        "survival" => Ok(EndpointKind::Survival),
        other => Err(StudyYamlError::UnknownEndpoint(other.to_string())),
    }
}

/// Checked synchronously before any request is issued. A violation blocks
/// submission.
pub fn validate_study(study: &StudyConfig) -> Result<(), StudyYamlError> {
    if study.base_url.trim().is_empty() {
        return Err(StudyYamlError::MissingBaseUrl);
    }
    if study.study_name.trim().is_empty() {
        return Err(StudyYamlError::MissingStudyName);
    }
    if study.arms.is_empty() || study.arms.len() > 3 {
        return Err(StudyYamlError::InvalidArmCount(study.arms.len()));
    }
    for arm in &study.arms {
        if !arm.allocation.is_finite() || arm.allocation <= 0.0 {
            return Err(StudyYamlError::InvalidAllocation(arm.name.clone()));
        }
    }
    if !study.control_allocation.is_finite() || study.control_allocation <= 0.0 {
        return Err(StudyYamlError::InvalidControlAllocation);
    }
    if !study.effect_size.is_finite() || study.effect_size <= 0.0 {
        return Err(StudyYamlError::InvalidEffectSize);
    }
    if !study.enrollment_months.is_finite() || study.enrollment_months <= 0.0 {
        return Err(StudyYamlError::InvalidEnrollment);
    }
    if !study.follow_up_months.is_finite() || study.follow_up_months < 0.0 {
        return Err(StudyYamlError::InvalidFollowUp);
    }
    if !study.dropout_rate.is_finite() || study.dropout_rate < 0.0 || study.dropout_rate >= 1.0 {
        return Err(StudyYamlError::InvalidDropoutRate);
    }
    if !study.alpha.is_finite() || study.alpha <= 0.0 || study.alpha >= 1.0 {
        return Err(StudyYamlError::InvalidAlpha);
    }
    if study.runs == 0 {
        return Err(StudyYamlError::InvalidRuns);
    }
    Ok(())
}
