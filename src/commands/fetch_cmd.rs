use chrono::Local;

use crate::commands::base_commands::Commands;
use crate::services::data_source::ResultSource;
use crate::services::modeling_api::{AuthData, ModelingApiClient};
use crate::services::results_yaml::{ResultsSnapshot, serialize_snapshot_to_yaml};
use crate::services::session::StudySession;
use crate::services::study_yaml::load_study_from_yaml_file;

pub async fn fetch_command(cmd: Commands) {
    if let Commands::Fetch { config, output } = cmd {
        // Validation happens while loading; an invalid study never reaches
        // the wire.
        let study = match load_study_from_yaml_file(&config) {
            Ok(study) => study,
            Err(e) => {
                eprintln!("Failed to load study config: {e:?}");
                return;
            }
        };

        let auth = match AuthData::from_env() {
            Ok(auth) => auth,
            Err(e) => {
                eprintln!("Failed to load modeling service auth: {e:?}");
                return;
            }
        };
        let client = ModelingApiClient::new(auth);

        let mut session = StudySession::new();
        session.configure(study.clone());
        let token = match session.submit() {
            Ok(token) => token,
            Err(e) => {
                eprintln!("Failed to submit study: {e:?}");
                return;
            }
        };

        match client.fetch_results(&study).await {
            Ok(payload) => {
                session.receive_success(token, payload);
            }
            Err(e) => {
                session.receive_error(token, format!("{e:?}"));
                eprintln!("Failed to fetch simulation results: {e:?}");
                return;
            }
        }

        let Some(payload) = session.applied() else {
            eprintln!("No results applied for this request");
            return;
        };

        let snapshot = ResultsSnapshot {
            study_name: study.study_name.clone(),
            endpoint: study.endpoint,
            fetch_date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            payload: payload.clone(),
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_snapshot_to_yaml(&mut buffer, &snapshot) {
            eprintln!("Failed to serialize results to YAML: {e:?}");
            return;
        }
        if let Err(e) = tokio::fs::write(&output, buffer).await {
            eprintln!("Failed to write output file: {e:?}");
        } else {
            println!("Simulation results written to {output}");
        }
    }
}
