use crate::commands::base_commands::Commands;
use crate::services::boxplot::summarize_scenarios;
use crate::services::boxplot_chart::write_boxplot_chart_png;
use crate::services::comparison_yaml::serialize_summaries_to_yaml;
use crate::services::results_yaml::load_snapshot_from_yaml_file;

pub async fn summarize_command(cmd: Commands) {
    if let Commands::Summarize { input, output } = cmd {
        let snapshot = match load_snapshot_from_yaml_file(&input) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Failed to load results file: {e:?}");
                return;
            }
        };

        let summaries = summarize_scenarios(&snapshot.payload.scenarios);

        let chart_path = format!("{output}.png");
        if let Err(e) = write_boxplot_chart_png(&chart_path, &summaries).await {
            eprintln!("Failed to write boxplot chart: {e:?}");
        }

        let mut buffer = Vec::new();
        if let Err(e) = serialize_summaries_to_yaml(&mut buffer, &summaries) {
            eprintln!("Failed to serialize summaries to YAML: {e:?}");
            return;
        }
        if let Err(e) = tokio::fs::write(&output, buffer).await {
            eprintln!("Failed to write summary output: {e:?}");
        } else {
            println!("Scenario summaries written to {output}");
            println!("Boxplot chart written to {chart_path}");
        }
    }
}
