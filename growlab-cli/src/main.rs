//! ## growlab-cli
//! **Command-line front end for the growlab exercises**
//!
//! Loads configuration, installs the `tracing` subscriber, then dispatches
//! to one subcommand per exercise.

use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use growlab_telemetry::logging::EventLogger;

mod commands;

use commands::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match commands::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = EventLogger::init(&config.telemetry.log_level) {
        eprintln!("Error: failed to install logger: {err}");
        return ExitCode::FAILURE;
    }

    let mut stdout = std::io::stdout().lock();
    match commands::execute(cli.command, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("command failed: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
