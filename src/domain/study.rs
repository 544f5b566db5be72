/// Primary endpoint family the modeling service simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Continuous,
    Binary,
    Survival,
}

impl EndpointKind {
    pub fn label(&self) -> &'static str {
        match self {
            EndpointKind::Continuous => "continuous",
            EndpointKind::Binary => "binary",
            EndpointKind::Survival => "survival",
        }
    }
}

/// One treatment arm with its randomization weight relative to the other
/// arms and control.
#[derive(Debug, Clone, PartialEq)]
pub struct TreatmentArm {
    pub name: String,
    pub allocation: f64,
}

/// User-supplied study parameters submitted to the modeling service. The
/// constraints (1..=3 arms, positive durations and allocations) are checked
/// before any request is issued.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    pub base_url: String,
    pub study_name: String,
    pub endpoint: EndpointKind,
    pub effect_size: f64,
    pub secondary_effect_size: Option<f64>,
    pub arms: Vec<TreatmentArm>,
    pub control_allocation: f64,
    pub enrollment_months: f64,
    pub follow_up_months: f64,
    pub dropout_rate: f64,
    pub alpha: f64,
    pub runs: u32,
}
