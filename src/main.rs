mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::compare_cmd::compare_command;
use crate::commands::demo_cmd::demo_command;
use crate::commands::fetch_cmd::fetch_command;
use crate::commands::plot_cmd::plot_command;
use crate::commands::summarize_cmd::summarize_command;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Fetch { .. } => fetch_command(cmd).await,
        cmd @ Commands::Compare { .. } => compare_command(cmd).await,
        cmd @ Commands::Plot { .. } => plot_command(cmd).await,
        cmd @ Commands::Summarize { .. } => summarize_command(cmd).await,
        cmd @ Commands::Demo { .. } => demo_command(cmd).await,
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            clap_complete::generate(shell, &mut cli, "trialscope", &mut std::io::stdout());
        }
    }
}
