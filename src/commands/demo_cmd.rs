use crate::commands::base_commands::Commands;
use crate::services::demo_data::generate_demo_snapshot;
use crate::services::results_yaml::serialize_snapshot_to_yaml;

pub async fn demo_command(cmd: Commands) {
    if let Commands::Demo { output, seed } = cmd {
        let snapshot = match generate_demo_snapshot(seed) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Failed to generate demo results: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_snapshot_to_yaml(&mut buffer, &snapshot) {
            eprintln!("Failed to serialize demo results to YAML: {e:?}");
            return;
        }
        if let Err(e) = tokio::fs::write(&output, buffer).await {
            eprintln!("Failed to write output file: {e:?}");
        } else {
            println!("Demo results for seed {seed} written to {output}");
        }
    }
}
