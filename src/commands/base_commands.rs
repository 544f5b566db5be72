use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::services::chart_data::AxisPairing;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit a study config to the modeling service and save the results
    Fetch {
        /// Path to study config YAML
        #[arg(short, long)]
        config: String,
        /// Output results YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Compare the proposed and baseline designs at a target power
    Compare {
        /// Results YAML file
        #[arg(short, long)]
        input: String,
        /// Output comparison YAML file
        #[arg(short, long)]
        output: String,
        /// Target power to match both designs against
        #[arg(short, long, default_value_t = 0.85)]
        target: f64,
        /// Lower bound of the display power band
        #[arg(long, default_value_t = 0.60)]
        min_power: f64,
        /// Upper bound of the display power band
        #[arg(long, default_value_t = 0.95)]
        max_power: f64,
    },
    /// Plot both designs for one axis pairing into a PNG chart
    Plot {
        /// Results YAML file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Axis pairing to chart
        #[arg(short, long, value_enum, default_value = "sample-size-power")]
        pairing: PairingArg,
    },
    /// Summarize per-scenario draws into box-plot statistics
    Summarize {
        /// Results YAML file
        #[arg(short, long)]
        input: String,
        /// Output summary YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Write a deterministic synthetic results file
    Demo {
        /// Output results YAML file
        #[arg(short, long)]
        output: String,
        /// Seed for the generator
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PairingArg {
    SampleSizePower,
    EnrollmentPower,
    SampleSizeCost,
}

impl PairingArg {
    pub fn to_pairing(self) -> AxisPairing {
        match self {
            PairingArg::SampleSizePower => AxisPairing::SampleSizePower,
            PairingArg::EnrollmentPower => AxisPairing::EnrollmentPower,
            PairingArg::SampleSizeCost => AxisPairing::SampleSizeCost,
        }
    }
}
