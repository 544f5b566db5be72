//! Seeded synthetic results so every downstream command can be exercised
//! without a live modeling service.

use chrono::Local;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use thiserror::Error;

use crate::domain::result_point::{GroupSizes, ResultPoint};
use crate::domain::series::{Design, ResultSeries, ResultsPayload, ScenarioDraws};
use crate::domain::study::EndpointKind;
use crate::services::results_yaml::ResultsSnapshot;

#[derive(Error, Debug)]
pub enum DemoDataError {
    #[error("failed to build draw distribution: {0}")]
    Distribution(String),
}

const POWER_STEPS: usize = 15;
const POWER_MIN: f64 = 0.60;
const POWER_MAX: f64 = 0.95;
const DRAWS_PER_SCENARIO: usize = 40;

pub fn generate_demo_snapshot(seed: u64) -> Result<ResultsSnapshot, DemoDataError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let payload = generate_demo_payload(&mut rng)?;
    Ok(ResultsSnapshot {
        study_name: "demo study".to_string(),
        endpoint: EndpointKind::Continuous,
        fetch_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        payload,
    })
}

/// A power sweep over the display band for both designs. The proposed
/// design reaches each power level with fewer patients, less time, and
/// less money than the baseline, so comparisons show improvements.
pub fn generate_demo_payload<R: Rng + ?Sized>(
    rng: &mut R,
) -> Result<ResultsPayload, DemoDataError> {
    let mut proposed = Vec::with_capacity(POWER_STEPS);
    let mut baseline = Vec::with_capacity(POWER_STEPS);

    for step in 0..POWER_STEPS {
        let fraction = step as f64 / (POWER_STEPS - 1) as f64;
        let power = POWER_MIN + fraction * (POWER_MAX - POWER_MIN);

        let baseline_size = 320.0 + 420.0 * fraction + rng.gen_range(-8.0..8.0);
        let savings = 0.18 + 0.04 * rng.gen_range(0.0..1.0);
        let proposed_size = baseline_size * (1.0 - savings);

        baseline.push(demo_point(power, baseline_size, 0.0));
        proposed.push(demo_point(power, proposed_size, 0.01));
    }

    let scenarios = vec![
        demo_scenario(rng, "conservative", 420.0, 35.0)?,
        demo_scenario(rng, "base case", 380.0, 30.0)?,
        demo_scenario(rng, "optimistic", 340.0, 28.0)?,
    ];

    Ok(ResultsPayload {
        proposed: ResultSeries {
            design: Design::Proposed,
            points: proposed,
        },
        baseline: ResultSeries {
            design: Design::Baseline,
            points: baseline,
        },
        scenarios,
    })
}

fn demo_point(power: f64, total_size: f64, power_edge: f64) -> ResultPoint {
    let sample_size = total_size.round().max(0.0) as u32;
    let per_arm = sample_size / 2;
    ResultPoint {
        power: (power + power_edge).min(1.0),
        sample_size,
        // Enrollment scales with the cohort; cost with enrollment.
        enrollment_months: total_size / 24.0,
        cost: total_size * 7_500.0,
        secondary_power: Some((power - 0.05).max(0.0)),
        groups: GroupSizes {
            treatment: [Some(sample_size - per_arm), None, None],
            control: per_arm,
        },
    }
}

fn demo_scenario<R: Rng + ?Sized>(
    rng: &mut R,
    name: &str,
    mean: f64,
    std_dev: f64,
) -> Result<ScenarioDraws, DemoDataError> {
    let normal =
        Normal::new(mean, std_dev).map_err(|e| DemoDataError::Distribution(e.to_string()))?;
    let draws = (0..DRAWS_PER_SCENARIO)
        .map(|_| normal.sample(rng))
        .collect();
    Ok(ScenarioDraws {
        name: name.to_string(),
        draws,
    })
}
