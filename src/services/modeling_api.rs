use std::env;

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use crate::domain::result_point::{GroupSizes, ResultPoint};
use crate::domain::series::{Design, ResultSeries, ResultsPayload, ScenarioDraws};
use crate::domain::study::StudyConfig;
use crate::services::data_source::{DataSourceError, ResultSource};

#[derive(Debug, Clone)]
pub struct AuthData {
    pub api_token: String,
}

impl AuthData {
    pub fn from_env() -> Result<Self, DataSourceError> {
        match env::var("MODELING_API_TOKEN") {
            Ok(api_token) if !api_token.is_empty() => Ok(Self { api_token }),
            _ => Err(DataSourceError::Unauthorized),
        }
    }
}

pub struct ModelingApiClient {
    auth: AuthData,
    client: Client,
}

impl ModelingApiClient {
    pub fn new(auth: AuthData) -> Self {
        Self {
            auth,
            client: Client::new(),
        }
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value, DataSourceError> {
        let response = self
            .client
            .post(url)
            .bearer_auth(self.auth.api_token.clone())
            .json(body)
            .send()
            .await
            .map_err(|_| DataSourceError::Connection)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(DataSourceError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(DataSourceError::NotFound);
        }
        if !status.is_success() {
            return Err(DataSourceError::Connection);
        }

        response
            .json::<Value>()
            .await
            .map_err(|_| DataSourceError::Parse)
    }
}

#[async_trait::async_trait]
impl ResultSource for ModelingApiClient {
    async fn fetch_results(&self, study: &StudyConfig) -> Result<ResultsPayload, DataSourceError> {
        let url = format!("{}/v1/simulations", study.base_url);
        let body = request_body(study);
        let payload = self.post_json(&url, &body).await?;
        payload_from_value(&payload)
    }
}

pub fn request_body(study: &StudyConfig) -> Value {
    let arms: Vec<Value> = study
        .arms
        .iter()
        .map(|arm| json!({ "name": arm.name, "allocation": arm.allocation }))
        .collect();

    json!({
        "studyName": study.study_name,
        "endpoint": study.endpoint.label(),
        "effectSize": study.effect_size,
        "secondaryEffectSize": study.secondary_effect_size,
        "arms": arms,
        "controlAllocation": study.control_allocation,
        "enrollmentMonths": study.enrollment_months,
        "followUpMonths": study.follow_up_months,
        "dropoutRate": study.dropout_rate,
        "alpha": study.alpha,
        "runs": study.runs,
    })
}

/// Decode boundary between the service's response shape and the domain
/// types. A response without a proposed series is unusable and fails the
/// whole fetch; a missing baseline degrades to an empty series; a point
/// with a missing or non-finite core field is dropped.
pub fn payload_from_value(payload: &Value) -> Result<ResultsPayload, DataSourceError> {
    let proposed = payload
        .get("proposed")
        .and_then(|value| value.as_array())
        .ok_or(DataSourceError::Parse)?;

    let baseline = payload
        .get("baseline")
        .and_then(|value| value.as_array())
        .map(|points| points.as_slice())
        .unwrap_or(&[]);

    let scenarios = payload
        .get("scenarios")
        .and_then(|value| value.as_array())
        .map(|entries| entries.iter().filter_map(scenario_from_value).collect())
        .unwrap_or_default();

    Ok(ResultsPayload {
        proposed: ResultSeries {
            design: Design::Proposed,
            points: map_points(proposed),
        },
        baseline: ResultSeries {
            design: Design::Baseline,
            points: map_points(baseline),
        },
        scenarios,
    })
}

fn map_points(points: &[Value]) -> Vec<ResultPoint> {
    points
        .iter()
        .filter_map(|point| point.as_object().and_then(point_from_fields))
        .collect()
}

fn point_from_fields(fields: &serde_json::Map<String, Value>) -> Option<ResultPoint> {
    let power = get_field_f64(fields, "power")?;
    let sample_size = get_field_f64(fields, "sampleSize")?;
    let enrollment_months = get_field_f64(fields, "enrollmentMonths")?;
    let cost = get_field_f64(fields, "cost")?;
    if sample_size < 0.0 || enrollment_months < 0.0 || cost < 0.0 {
        return None;
    }

    Some(ResultPoint {
        power,
        sample_size: sample_size as u32,
        enrollment_months,
        cost,
        secondary_power: get_field_f64(fields, "secondaryPower"),
        groups: group_sizes_from_fields(fields),
    })
}

fn group_sizes_from_fields(fields: &serde_json::Map<String, Value>) -> GroupSizes {
    let mut treatment = [None, None, None];
    if let Some(sizes) = fields.get("armSizes").and_then(|value| value.as_array()) {
        for (slot, size) in treatment.iter_mut().zip(sizes) {
            *slot = size.as_u64().map(|value| value as u32);
        }
    }
    let control = fields
        .get("controlSize")
        .and_then(|value| value.as_u64())
        .unwrap_or(0) as u32;
    GroupSizes { treatment, control }
}

fn scenario_from_value(entry: &Value) -> Option<ScenarioDraws> {
    let fields = entry.as_object()?;
    let name = fields.get("name").and_then(|value| value.as_str())?;
    let draws = fields
        .get("draws")
        .map(draws_from_value)
        .unwrap_or_default();
    Some(ScenarioDraws {
        name: name.to_string(),
        draws,
    })
}

/// Draw arrays arrive either as a JSON array or as a string-encoded JSON
/// array. An undecodable string yields no draws; non-numeric entries are
/// dropped.
fn draws_from_value(value: &Value) -> Vec<f64> {
    let decoded;
    let entries = match value {
        Value::Array(entries) => entries.as_slice(),
        Value::String(text) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(parsed)) => {
                decoded = parsed;
                decoded.as_slice()
            }
            _ => return Vec::new(),
        },
        _ => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.parse::<f64>().ok(),
            _ => None,
        })
        .filter(|value| value.is_finite())
        .collect()
}

fn get_field_f64(fields: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    let value = fields.get(key).and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse::<f64>().ok(),
        Value::Null => None,
        _ => None,
    })?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn point_value(power: f64, sample_size: u32) -> Value {
        json!({
            "power": power,
            "sampleSize": sample_size,
            "enrollmentMonths": 15.0,
            "cost": 2_500_000.0,
            "armSizes": [sample_size / 2],
            "controlSize": sample_size / 2,
        })
    }

    #[test]
    fn payload_from_value_decodes_both_series_and_scenarios() {
        let payload = json!({
            "proposed": [point_value(0.80, 400), point_value(0.85, 440)],
            "baseline": [point_value(0.80, 500)],
            "scenarios": [
                { "name": "base case", "draws": [1.0, 2.0, 3.0] }
            ]
        });

        let decoded = payload_from_value(&payload).unwrap();

        assert_eq!(decoded.proposed.points.len(), 2);
        assert_eq!(decoded.baseline.points.len(), 1);
        assert_eq!(decoded.proposed.points[0].sample_size, 400);
        assert_eq!(decoded.proposed.points[0].groups.treatment[0], Some(200));
        assert_eq!(decoded.proposed.points[0].groups.control, 200);
        assert_eq!(decoded.scenarios.len(), 1);
        assert_eq!(decoded.scenarios[0].draws, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn payload_without_proposed_series_is_a_parse_error() {
        let payload = json!({ "baseline": [point_value(0.80, 500)] });

        let error = payload_from_value(&payload).unwrap_err();

        assert!(matches!(error, DataSourceError::Parse));
    }

    #[test]
    fn missing_or_null_baseline_degrades_to_an_empty_series() {
        let with_null = json!({ "proposed": [point_value(0.80, 400)], "baseline": null });
        let without = json!({ "proposed": [point_value(0.80, 400)] });

        assert!(payload_from_value(&with_null).unwrap().baseline.is_empty());
        assert!(payload_from_value(&without).unwrap().baseline.is_empty());
    }

    #[test]
    fn points_with_missing_or_non_finite_fields_are_dropped() {
        let payload = json!({
            "proposed": [
                point_value(0.80, 400),
                { "power": 0.82, "sampleSize": 420 },
                { "power": "NaN", "sampleSize": 430, "enrollmentMonths": 15.0, "cost": 1.0 },
            ]
        });

        let decoded = payload_from_value(&payload).unwrap();

        assert_eq!(decoded.proposed.points.len(), 1);
        assert_eq!(decoded.proposed.points[0].sample_size, 400);
    }

    #[test]
    fn numeric_strings_are_accepted_for_point_fields() {
        let payload = json!({
            "proposed": [{
                "power": "0.85",
                "sampleSize": "400",
                "enrollmentMonths": "15.5",
                "cost": "2500000",
            }]
        });

        let decoded = payload_from_value(&payload).unwrap();

        let point = &decoded.proposed.points[0];
        assert_eq!(point.power, 0.85);
        assert_eq!(point.sample_size, 400);
        assert_eq!(point.enrollment_months, 15.5);
        assert_eq!(point.cost, 2_500_000.0);
    }

    #[test]
    fn string_encoded_draw_arrays_are_decoded() {
        let payload = json!({
            "proposed": [point_value(0.80, 400)],
            "scenarios": [
                { "name": "encoded", "draws": "[1.5, \"2.5\", null, 3.5]" },
                { "name": "broken", "draws": "not json" },
            ]
        });

        let decoded = payload_from_value(&payload).unwrap();

        assert_eq!(decoded.scenarios[0].draws, vec![1.5, 2.5, 3.5]);
        assert!(decoded.scenarios[1].draws.is_empty());
    }

    #[test]
    fn request_body_carries_the_study_fields() {
        let study = crate::test_support::build_study();

        let body = request_body(&study);

        assert_eq!(body["studyName"], "demo study");
        assert_eq!(body["endpoint"], "continuous");
        assert_eq!(body["arms"][0]["name"], "low dose");
        assert_eq!(body["runs"], 1000);
    }

    #[test]
    fn auth_from_env_requires_a_nonempty_token() {
        unsafe {
            env::set_var("MODELING_API_TOKEN", "");
        }
        assert!(matches!(
            AuthData::from_env(),
            Err(DataSourceError::Unauthorized)
        ));

        unsafe {
            env::set_var("MODELING_API_TOKEN", "secret");
        }
        let auth = AuthData::from_env().unwrap();
        assert_eq!(auth.api_token, "secret");
    }
}
