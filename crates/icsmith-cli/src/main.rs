//! icsmith CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use icsmith_cli::cli::{Cli, Command, ConfigAction};
use icsmith_cli::config::CliConfig;
use icsmith_cli::error::CliResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.debug {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(Level::WARN.to_string()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        CliConfig::load_from(path).map_err(icsmith_cli::error::CliError::Config)?
    } else {
        CliConfig::load().unwrap_or_default()
    };

    match cli.command {
        Some(Command::Build { input, output }) => {
            icsmith_cli::commands::build::run(input.as_deref(), &output, &config)
        }
        Some(Command::New { event, output }) => {
            icsmith_cli::commands::new::run(&event, &output, &config)
        }
        Some(Command::Config { action }) => match action {
            ConfigAction::Dump => icsmith_cli::commands::config::dump(&config),
            ConfigAction::Path => icsmith_cli::commands::config::path(),
        },
        None => {
            println!("icsmith - Build iCalendar (.ics) files from event descriptions");
            println!();
            println!("Run 'icsmith --help' for usage information.");
            println!();
            println!("Quick start:");
            println!("  1. From a JSON document: icsmith build event.json");
            println!("  2. From flags: icsmith new --title Standup --start 2024-01-02T09:00:00");
            Ok(())
        }
    }
}
