use crate::commands::base_commands::Commands;
use crate::services::design_chart::write_design_chart_png;
use crate::services::results_yaml::load_snapshot_from_yaml_file;
use crate::services::series_filter::{DisplayBand, display_series};

pub async fn plot_command(cmd: Commands) {
    if let Commands::Plot {
        input,
        output,
        pairing,
    } = cmd
    {
        let snapshot = match load_snapshot_from_yaml_file(&input) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                eprintln!("Failed to load results file: {e:?}");
                return;
            }
        };

        let band = DisplayBand::default();
        let result = write_design_chart_png(
            &output,
            &display_series(&snapshot.payload.proposed.points, &band),
            &display_series(&snapshot.payload.baseline.points, &band),
            pairing.to_pairing(),
            Vec::new(),
        )
        .await;

        match result {
            Ok(()) => println!("Design chart written to {output}"),
            Err(e) => eprintln!("Failed to plot designs: {e:?}"),
        }
    }
}
