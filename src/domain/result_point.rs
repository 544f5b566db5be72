/// Per-arm patient counts for one simulated configuration: up to three
/// treatment arms plus the control arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupSizes {
    pub treatment: [Option<u32>; 3],
    pub control: u32,
}

impl GroupSizes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u32 {
        let treatment_total: u32 = self.treatment.iter().flatten().sum();
        treatment_total + self.control
    }
}

/// One simulation outcome returned by the modeling service. `power` is the
/// control metric the slider target is matched against. Upstream guarantees
/// that `sample_size` equals the sum of the group sizes; this engine does
/// not re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultPoint {
    pub power: f64,
    pub sample_size: u32,
    pub enrollment_months: f64,
    pub cost: f64,
    pub secondary_power: Option<f64>,
    pub groups: GroupSizes,
}
