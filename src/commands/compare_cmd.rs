use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_comparison_report;
use crate::services::chart_data::{AxisPairing, point_xy};
use crate::services::comparison_yaml::serialize_comparison_to_yaml;
use crate::services::design_chart::write_design_chart_png;
use crate::services::design_comparison::compare_designs;
use crate::services::results_yaml::load_snapshot_from_yaml_file;
use crate::services::series_filter::{DisplayBand, display_series};

pub async fn compare_command(cmd: Commands) {
    if let Commands::Compare {
        input,
        output,
        target,
        min_power,
        max_power,
    } = cmd
    {
        let snapshot = match load_snapshot_from_yaml_file(&input) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Failed to load results file: {e:?}");
                return;
            }
        };

        let band = DisplayBand {
            min_power,
            max_power,
        };
        let comparison = compare_designs(&snapshot.payload, target, &band);

        println!("{}", format_comparison_report(&comparison));

        let chart_path = format!("{output}.png");
        let pairing = AxisPairing::SampleSizePower;
        let highlight: Vec<(f64, f64)> = comparison
            .proposed
            .iter()
            .chain(comparison.baseline.iter())
            .map(|point| point_xy(point, pairing))
            .collect();
        if let Err(e) = write_design_chart_png(
            &chart_path,
            &display_series(&snapshot.payload.proposed.points, &band),
            &display_series(&snapshot.payload.baseline.points, &band),
            pairing,
            highlight,
        )
        .await
        {
            eprintln!("Failed to write comparison chart: {e:?}");
        }

        let mut buffer = Vec::new();
        if let Err(e) = serialize_comparison_to_yaml(&mut buffer, &comparison, &band) {
            eprintln!("Failed to serialize comparison to YAML: {e:?}");
            return;
        }
        if let Err(e) = tokio::fs::write(&output, buffer).await {
            eprintln!("Failed to write comparison output: {e:?}");
        } else {
            println!("Comparison written to {output}");
            println!("Comparison chart written to {chart_path}");
        }
    }
}
